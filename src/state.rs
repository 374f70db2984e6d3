//! Application state
//!
//! The signed-in user and the collections of their partition that are
//! currently resident in memory. Built once at startup with [`AppState::init`]
//! and passed explicitly to services and views.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetBook, Goal, Transaction, UserRecord};
use crate::storage::{PartitionKey, Storage, UserData};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    session: Option<UserRecord>,
    pub transactions: Vec<Transaction>,
    pub budgets: BudgetBook,
    pub goals: Vec<Goal>,
}

impl AppState {
    /// Restore the persisted session, if any, and load its partition
    pub fn init(storage: &Storage) -> Self {
        let mut state = Self::default();
        state.restore_session(storage);
        state
    }

    /// Returns whether a session was restored
    pub fn restore_session(&mut self, storage: &Storage) -> bool {
        match storage.sessions.load() {
            Some(user) => {
                debug!(email = %user.email, "restored session");
                self.session = Some(user);
                self.load_partition(storage);
                true
            }
            None => false,
        }
    }

    /// Persist `user` as the session, then load their partition
    ///
    /// The session is in place before the collections are read, and the
    /// collections are always read right after.
    pub fn activate(&mut self, storage: &Storage, user: UserRecord) -> LedgerResult<()> {
        storage.sessions.save(&user)?;
        self.session = Some(user);
        self.load_partition(storage);
        Ok(())
    }

    /// Persist a changed copy of the active user without reloading data
    pub fn update_session(&mut self, storage: &Storage, user: UserRecord) -> LedgerResult<()> {
        storage.sessions.save(&user)?;
        self.session = Some(user);
        Ok(())
    }

    /// Drop the session and every resident collection
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn session(&self) -> Option<&UserRecord> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn require_session(&self) -> LedgerResult<&UserRecord> {
        self.session.as_ref().ok_or(LedgerError::NotSignedIn)
    }

    pub fn partition_key(&self) -> LedgerResult<PartitionKey> {
        self.require_session()
            .map(|user| PartitionKey::from_email(&user.email))
    }

    /// Transactions for display: newest date first, ties keep stored order
    pub fn transactions_by_date(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    fn load_partition(&mut self, storage: &Storage) {
        let Some(user) = &self.session else {
            return;
        };

        let UserData {
            transactions,
            budgets,
            goals,
        } = storage.partitions.load(&PartitionKey::from_email(&user.email));
        self.transactions = transactions;
        self.budgets = budgets;
        self.goals = goals;
    }
}
