//! Storage layer for Spendwise
//!
//! Every persisted value is a JSON document under a string key in a
//! [`KeyValueStore`]. Typed repositories sit on top of the shared store:
//! credentials, the session copy, per-user partitions and global preferences.

pub mod file_io;
pub mod keys;
pub mod kv;
pub mod partition;
pub mod preferences;
pub mod session;
pub mod users;

pub use keys::{CollectionKind, PartitionKey};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use partition::{PartitionStore, UserData};
pub use preferences::PreferenceStore;
pub use session::SessionStore;
pub use users::CredentialStore;

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::AppPaths;
use crate::error::LedgerResult;
use crate::models::UserRecord;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
    pub users: CredentialStore,
    pub sessions: SessionStore,
    pub partitions: PartitionStore,
    pub preferences: PreferenceStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// File-backed storage under the configured base directory
    pub fn new(paths: &AppPaths, audit_enabled: bool) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        let store = Arc::new(FileStore::new(paths.store_dir()));
        let audit = audit_enabled.then(|| AuditLogger::new(paths.audit_log()));
        Ok(Self::with_store(store, audit))
    }

    /// Storage that never touches the disk
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), None)
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>, audit: Option<AuditLogger>) -> Self {
        Self {
            users: CredentialStore::new(store.clone()),
            sessions: SessionStore::new(store.clone()),
            partitions: PartitionStore::new(store.clone()),
            preferences: PreferenceStore::new(store.clone()),
            store,
            audit,
        }
    }

    /// The audit logger, when auditing is enabled
    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Remove every stored key: users, session, partitions and preferences
    pub fn reset_all(&self) -> LedgerResult<()> {
        self.store.clear()?;
        info!("all stored data removed");
        Ok(())
    }

    pub fn log_create<T: Serialize + ?Sized>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }

    pub fn log_update<T: Serialize + ?Sized>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> LedgerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::update(
                entity_type,
                entity_id,
                entity_name,
                before,
                after,
            )),
            None => Ok(()),
        }
    }

    pub fn log_delete<T: Serialize + ?Sized>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }
}

/// Audit snapshot of a user without the password field
#[derive(Serialize)]
pub struct UserSnapshot<'a> {
    pub email: &'a str,
    pub name: &'a str,
    #[serde(rename = "baseCurrency")]
    pub base_currency: &'a str,
}

impl<'a> From<&'a UserRecord> for UserSnapshot<'a> {
    fn from(user: &'a UserRecord) -> Self {
        Self {
            email: &user.email,
            name: &user.name,
            base_currency: user.base_currency().as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrencyCode;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths, true).unwrap();

        assert!(temp_dir.path().join("store").exists());
        assert!(storage.users.load_users().is_empty());
        assert!(storage.audit_log().is_some());
    }

    #[test]
    fn test_reset_all() {
        let storage = Storage::in_memory();
        let user = UserRecord::new("alice@x.com", "h", "Alice", CurrencyCode::default());
        storage.users.create(user.clone()).unwrap();
        storage.sessions.save(&user).unwrap();

        storage.reset_all().unwrap();

        assert!(storage.users.load_users().is_empty());
        assert!(storage.sessions.load().is_none());
    }

    #[test]
    fn test_user_snapshot_has_no_password() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths, true).unwrap();
        let user = UserRecord::new("alice@x.com", "secret-hash", "Alice", CurrencyCode::default());

        storage
            .log_create(
                EntityType::User,
                user.email.clone(),
                Some(user.name.clone()),
                &UserSnapshot::from(&user),
            )
            .unwrap();

        let log = std::fs::read_to_string(paths.audit_log()).unwrap();
        assert!(log.contains("alice@x.com"));
        assert!(!log.contains("secret-hash"));
        assert!(!log.contains("password"));
    }

    #[test]
    fn test_audit_disabled_is_noop() {
        let storage = Storage::in_memory();
        assert!(storage.audit_log().is_none());
        storage
            .log_delete(EntityType::Goal, "1", None, &serde_json::json!({}))
            .unwrap();
    }
}
