//! Budget model
//!
//! A spending limit for one category. `BudgetBook` keys budgets by category,
//! so a user can never hold two budgets for the same category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::BudgetId;
use super::money::Money;
use super::require;
use crate::error::LedgerResult;

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category: String,
    pub amount: Money,
}

impl Budget {
    /// Validate raw input and build a budget with a fresh id
    pub fn from_input(category: &str, amount: &str) -> LedgerResult<Self> {
        require(&[category, amount])?;
        Ok(Self {
            id: BudgetId::new(),
            category: category.trim().to_string(),
            amount: super::parse_amount(amount)?,
        })
    }
}

/// All budgets of one user, keyed by category
///
/// Persisted as a plain JSON array. When an older array holds several budgets
/// for the same category, the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Budget>", into = "Vec<Budget>")]
pub struct BudgetBook {
    by_category: BTreeMap<String, Budget>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the budget for its category, returning the replaced one
    pub fn upsert(&mut self, budget: Budget) -> Option<Budget> {
        self.by_category.insert(budget.category.clone(), budget)
    }

    pub fn get(&self, category: &str) -> Option<&Budget> {
        self.by_category.get(category)
    }

    pub fn remove(&mut self, category: &str) -> Option<Budget> {
        self.by_category.remove(category)
    }

    /// Budgets ordered by category
    pub fn iter(&self) -> impl Iterator<Item = &Budget> {
        self.by_category.values()
    }

    pub fn len(&self) -> usize {
        self.by_category.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

impl From<Vec<Budget>> for BudgetBook {
    fn from(budgets: Vec<Budget>) -> Self {
        let mut book = Self::new();
        for budget in budgets {
            book.upsert(budget);
        }
        book
    }
}

impl From<BudgetBook> for Vec<Budget> {
    fn from(book: BudgetBook) -> Self {
        book.by_category.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_same_category() {
        let mut book = BudgetBook::new();
        assert!(book.upsert(Budget::from_input("Food", "100").unwrap()).is_none());
        let replaced = book.upsert(Budget::from_input("Food", "250").unwrap());

        assert_eq!(replaced.unwrap().amount.cents(), 10_000);
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Food").unwrap().amount.cents(), 25_000);
    }

    #[test]
    fn test_category_match_is_exact() {
        let mut book = BudgetBook::new();
        book.upsert(Budget::from_input("Food", "100").unwrap());
        book.upsert(Budget::from_input("food", "100").unwrap());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_duplicates_in_stored_array_collapse() {
        let json = r#"[
            {"id":"1","category":"Food","amount":"100"},
            {"id":"2","category":"Rent","amount":"900"},
            {"id":"3","category":"Food","amount":"150"}
        ]"#;
        let book: BudgetBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("Food").unwrap().id.as_str(), "3");
    }

    #[test]
    fn test_serializes_as_array() {
        let mut book = BudgetBook::new();
        book.upsert(Budget::from_input("Food", "100").unwrap());
        let value = serde_json::to_value(&book).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["category"], "Food");
        assert_eq!(value[0]["amount"], "100");
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(Budget::from_input("", "100").is_err());
        assert!(Budget::from_input("Food", "").is_err());
        assert!(Budget::from_input("Food", "-1").is_err());
    }
}
