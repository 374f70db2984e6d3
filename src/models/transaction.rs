//! Transaction model
//!
//! Income and expense entries. Transactions are never edited in place; they
//! are created from a validated draft and may later be deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::require;
use crate::error::{LedgerError, LedgerResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub title: String,

    pub amount: Money,

    pub category: String,

    pub date: NaiveDate,

    #[serde(default)]
    pub notes: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Raw form input for a new transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub kind: String,
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub notes: String,
}

impl TransactionDraft {
    /// Validate the raw input and build a transaction with a fresh id
    pub fn validate(&self) -> LedgerResult<Transaction> {
        require(&[
            self.kind.as_str(),
            self.title.as_str(),
            self.amount.as_str(),
            self.category.as_str(),
            self.date.as_str(),
        ])?;

        let kind = TransactionKind::parse(&self.kind).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Invalid transaction type: '{}'. Use 'income' or 'expense'",
                self.kind
            ))
        })?;

        let amount = super::parse_amount(&self.amount)?;
        let date = super::parse_date(&self.date)?;

        Ok(Transaction {
            id: TransactionId::new(),
            kind,
            title: self.title.trim().to_string(),
            amount,
            category: self.category.trim().to_string(),
            date,
            notes: self.notes.trim().to_string(),
        })
    }
}
