//! Persisted session
//!
//! The signed-in user is stored as a copy of their record under its own key,
//! independent of the credential collection, so a restart restores it.

use std::sync::Arc;

use super::keys::SESSION_KEY;
use super::kv::{read_value, write_value, KeyValueStore};
use crate::error::{LedgerError, LedgerResult};
use crate::models::UserRecord;

pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The persisted session record, if one exists and parses
    ///
    /// A record without `settings.baseCurrency` comes back with the default.
    pub fn load(&self) -> Option<UserRecord> {
        read_value(self.store.as_ref(), SESSION_KEY)
    }

    pub fn save(&self, user: &UserRecord) -> LedgerResult<()> {
        write_value(self.store.as_ref(), SESSION_KEY, user)
            .map_err(|e| LedgerError::unable_to_save("session", e))
    }

    pub fn clear(&self) -> LedgerResult<()> {
        self.store.remove(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrencyCode;
    use crate::storage::kv::MemoryStore;

    #[test]
    fn test_save_load_clear() {
        let sessions = SessionStore::new(Arc::new(MemoryStore::new()));
        assert!(sessions.load().is_none());

        let user = UserRecord::new("alice@x.com", "hash", "Alice", CurrencyCode::new("GBP"));
        sessions.save(&user).unwrap();
        assert_eq!(sessions.load().unwrap(), user);

        sessions.clear().unwrap();
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_backfills_currency() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(SESSION_KEY, r#"{"email":"a@b.c","password":"x","name":"A"}"#)
            .unwrap();

        let sessions = SessionStore::new(kv);
        assert_eq!(sessions.load().unwrap().base_currency().as_str(), "USD");
    }
}
