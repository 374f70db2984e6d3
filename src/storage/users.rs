//! Credential store
//!
//! All user records live under one key as a single JSON array, read and
//! written as a whole.

use std::sync::Arc;

use super::keys::USERS_KEY;
use super::kv::{read_value, write_value, KeyValueStore};
use crate::error::{LedgerError, LedgerResult};
use crate::models::UserRecord;

/// Repository for user records
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All users; an absent or malformed collection reads as empty
    pub fn load_users(&self) -> Vec<UserRecord> {
        read_value(self.store.as_ref(), USERS_KEY).unwrap_or_default()
    }

    /// Overwrite the whole collection
    pub fn save_users(&self, users: &[UserRecord]) -> LedgerResult<()> {
        write_value(self.store.as_ref(), USERS_KEY, users)
            .map_err(|e| LedgerError::unable_to_save("users", e))
    }

    /// Exact-match lookup (no case folding)
    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.load_users().into_iter().find(|u| u.email == email)
    }

    /// Append a new user, rejecting an email that is already registered
    pub fn create(&self, user: UserRecord) -> LedgerResult<UserRecord> {
        let mut users = self.load_users();
        if users.iter().any(|u| u.email == user.email) {
            return Err(LedgerError::duplicate_email(&user.email));
        }

        users.push(user.clone());
        self.save_users(&users)?;
        Ok(user)
    }

    /// Replace the stored record with the same email
    ///
    /// Returns `false` when no such record exists; nothing is written then.
    pub fn update(&self, user: &UserRecord) -> LedgerResult<bool> {
        let mut users = self.load_users();
        let Some(existing) = users.iter_mut().find(|u| u.email == user.email) else {
            return Ok(false);
        };

        *existing = user.clone();
        self.save_users(&users)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrencyCode;
    use crate::storage::kv::MemoryStore;

    fn store() -> (CredentialStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (CredentialStore::new(kv.clone()), kv)
    }

    fn user(email: &str) -> UserRecord {
        UserRecord::new(email, "hash", "Alice", CurrencyCode::default())
    }

    #[test]
    fn test_empty_when_absent() {
        let (users, _) = store();
        assert!(users.load_users().is_empty());
    }

    #[test]
    fn test_empty_when_malformed() {
        let (users, kv) = store();
        kv.set(USERS_KEY, "definitely not json").unwrap();
        assert!(users.load_users().is_empty());
    }

    #[test]
    fn test_create_and_find() {
        let (users, _) = store();
        users.create(user("alice@x.com")).unwrap();

        assert!(users.find_by_email("alice@x.com").is_some());
        assert!(users.find_by_email("Alice@x.com").is_none());
        assert!(users.find_by_email("bob@x.com").is_none());
    }

    #[test]
    fn test_duplicate_rejected_without_write() {
        let (users, _) = store();
        users.create(user("alice@x.com")).unwrap();

        let mut impostor = user("alice@x.com");
        impostor.name = "Mallory".into();
        let err = users.create(impostor).unwrap_err();

        assert!(err.is_duplicate());
        let all = users.load_users();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Alice");
    }

    #[test]
    fn test_update() {
        let (users, _) = store();
        users.create(user("alice@x.com")).unwrap();

        let mut changed = user("alice@x.com");
        changed.settings.base_currency = CurrencyCode::new("EUR");
        assert!(users.update(&changed).unwrap());
        assert_eq!(
            users.find_by_email("alice@x.com").unwrap().base_currency().as_str(),
            "EUR"
        );

        assert!(!users.update(&user("ghost@x.com")).unwrap());
        assert_eq!(users.load_users().len(), 1);
    }
}
