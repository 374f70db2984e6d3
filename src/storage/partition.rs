//! Per-user data partitions
//!
//! Each user's transactions, budgets and goals are three independent values.
//! Loading parses each on its own, so one corrupt collection never empties
//! the other two. Saving writes exactly one collection.

use std::sync::Arc;

use serde::Serialize;

use super::keys::{CollectionKind, PartitionKey};
use super::kv::{read_value, write_value, KeyValueStore};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetBook, Goal, Transaction};

/// The three collections of one user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserData {
    pub transactions: Vec<Transaction>,
    pub budgets: BudgetBook,
    pub goals: Vec<Goal>,
}

/// Repository for per-user collections
pub struct PartitionStore {
    store: Arc<dyn KeyValueStore>,
}

impl PartitionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load all three collections; each absent or malformed one is empty
    pub fn load(&self, key: &PartitionKey) -> UserData {
        let store = self.store.as_ref();
        UserData {
            transactions: read_value(store, &CollectionKind::Transactions.key(key))
                .unwrap_or_default(),
            budgets: read_value(store, &CollectionKind::Budgets.key(key)).unwrap_or_default(),
            goals: read_value(store, &CollectionKind::Goals.key(key)).unwrap_or_default(),
        }
    }

    pub fn save_transactions(
        &self,
        key: &PartitionKey,
        transactions: &[Transaction],
    ) -> LedgerResult<()> {
        self.save(CollectionKind::Transactions, key, transactions)
    }

    pub fn save_budgets(&self, key: &PartitionKey, budgets: &BudgetBook) -> LedgerResult<()> {
        self.save(CollectionKind::Budgets, key, budgets)
    }

    pub fn save_goals(&self, key: &PartitionKey, goals: &[Goal]) -> LedgerResult<()> {
        self.save(CollectionKind::Goals, key, goals)
    }

    /// Overwrite one collection, leaving the other two untouched
    fn save<T: Serialize + ?Sized>(
        &self,
        kind: CollectionKind,
        key: &PartitionKey,
        collection: &T,
    ) -> LedgerResult<()> {
        write_value(self.store.as_ref(), &kind.key(key), collection)
            .map_err(|e| LedgerError::unable_to_save(&kind.to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, TransactionDraft};
    use crate::storage::kv::MemoryStore;

    fn setup() -> (PartitionStore, Arc<MemoryStore>, PartitionKey) {
        let kv = Arc::new(MemoryStore::new());
        (
            PartitionStore::new(kv.clone()),
            kv,
            PartitionKey::from_email("alice@x.com"),
        )
    }

    fn txn(amount: &str, date: &str) -> Transaction {
        TransactionDraft {
            kind: "expense".into(),
            title: "Lunch".into(),
            amount: amount.into(),
            category: "Food".into(),
            date: date.into(),
            notes: String::new(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_empty_partition() {
        let (partitions, _, key) = setup();
        assert_eq!(partitions.load(&key), UserData::default());
    }

    #[test]
    fn test_transactions_round_trip() {
        let (partitions, _, key) = setup();
        let transactions = vec![txn("20", "2025-01-10"), txn("30.25", "2025-01-09")];

        partitions.save_transactions(&key, &transactions).unwrap();
        assert_eq!(partitions.load(&key).transactions, transactions);
    }

    #[test]
    fn test_corrupt_collection_is_isolated() {
        let (partitions, kv, key) = setup();
        partitions.save_transactions(&key, &[txn("20", "2025-01-10")]).unwrap();
        let mut budgets = BudgetBook::new();
        budgets.upsert(Budget::from_input("Food", "100").unwrap());
        partitions.save_budgets(&key, &budgets).unwrap();

        kv.set(&CollectionKind::Goals.key(&key), "[{\"broken\"").unwrap();
        kv.set(&CollectionKind::Budgets.key(&key), r#"[{"id":"1","category":"Food","amount":"NaN"}]"#)
            .unwrap();

        let data = partitions.load(&key);
        assert_eq!(data.transactions.len(), 1);
        assert!(data.budgets.is_empty());
        assert!(data.goals.is_empty());
    }

    #[test]
    fn test_save_touches_one_collection() {
        let (partitions, kv, key) = setup();
        kv.set(&CollectionKind::Goals.key(&key), "sentinel").unwrap();

        partitions.save_transactions(&key, &[]).unwrap();

        assert_eq!(
            kv.get(&CollectionKind::Goals.key(&key)).unwrap().as_deref(),
            Some("sentinel")
        );
        assert!(kv.get(&CollectionKind::Budgets.key(&key)).unwrap().is_none());
    }

    #[test]
    fn test_partitions_do_not_overlap() {
        let (partitions, _, alice) = setup();
        let bob = PartitionKey::from_email("bob@x.com");

        partitions.save_transactions(&alice, &[txn("5", "2025-02-01")]).unwrap();
        assert!(partitions.load(&bob).transactions.is_empty());
    }
}
