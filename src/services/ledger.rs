//! Ledger service
//!
//! Mutations of the active user's transactions, budgets and goals. Each call
//! updates the resident collection first, then persists exactly that one
//! collection. When the write fails the error is returned and the in-memory
//! change stays, so nothing the user entered is lost.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Goal, Transaction, TransactionDraft};
use crate::state::AppState;
use crate::storage::Storage;

/// Service for the per-user collections
pub struct LedgerService<'a> {
    storage: &'a Storage,
    state: &'a mut AppState,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage, state: &'a mut AppState) -> Self {
        Self { storage, state }
    }

    /// Validate and record a new transaction
    pub fn add_transaction(&mut self, draft: &TransactionDraft) -> LedgerResult<Transaction> {
        let key = self.state.partition_key()?;
        let txn = draft.validate()?;

        self.state.transactions.push(txn.clone());
        self.storage
            .partitions
            .save_transactions(&key, &self.state.transactions)?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.as_str(),
            Some(txn.title.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    /// Remove a transaction by id
    pub fn delete_transaction(&mut self, id: &str) -> LedgerResult<Transaction> {
        let key = self.state.partition_key()?;
        let id = id.trim();
        let index = self
            .state
            .transactions
            .iter()
            .position(|t| t.id.as_str() == id)
            .ok_or_else(|| LedgerError::transaction_not_found(id))?;

        let removed = self.state.transactions.remove(index);
        self.storage
            .partitions
            .save_transactions(&key, &self.state.transactions)?;

        self.storage.log_delete(
            EntityType::Transaction,
            removed.id.as_str(),
            Some(removed.title.clone()),
            &removed,
        )?;

        Ok(removed)
    }

    /// Create or replace the budget for a category
    pub fn set_budget(&mut self, category: &str, amount: &str) -> LedgerResult<Budget> {
        let key = self.state.partition_key()?;
        let budget = Budget::from_input(category, amount)?;

        let previous = self.state.budgets.upsert(budget.clone());
        self.storage
            .partitions
            .save_budgets(&key, &self.state.budgets)?;

        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Budget,
                budget.id.as_str(),
                Some(budget.category.clone()),
                &before,
                &budget,
            )?,
            None => self.storage.log_create(
                EntityType::Budget,
                budget.id.as_str(),
                Some(budget.category.clone()),
                &budget,
            )?,
        }

        Ok(budget)
    }

    /// Record a new savings goal
    pub fn add_goal(
        &mut self,
        name: &str,
        target: &str,
        current: &str,
        date: &str,
    ) -> LedgerResult<Goal> {
        let key = self.state.partition_key()?;
        let goal = Goal::from_input(name, target, current, date)?;

        self.state.goals.push(goal.clone());
        self.storage.partitions.save_goals(&key, &self.state.goals)?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.as_str(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }
}
