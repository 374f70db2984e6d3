//! Core data models for Spendwise
//!
//! Users, transactions, budgets and savings goals, plus the value types they
//! are built from. Raw user input is parsed and rejected here, at the entry
//! boundary, so stored amounts are always valid.

pub mod budget;
pub mod currency;
pub mod goal;
pub mod ids;
pub mod money;
pub mod theme;
pub mod transaction;
pub mod user;

pub use budget::{Budget, BudgetBook};
pub use currency::{CurrencyCode, DEFAULT_CURRENCY};
pub use goal::Goal;
pub use ids::{BudgetId, GoalId, TransactionId};
pub use money::Money;
pub use theme::ThemeMode;
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
pub use user::{UserRecord, UserSettings};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};

/// Fail with the generic notice if any required field is blank
pub(crate) fn require(fields: &[&str]) -> LedgerResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(LedgerError::Validation("Please fill all fields".into()));
    }
    Ok(())
}

/// Largest amount accepted at entry (one trillion units)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000_000);

/// Parse a user-entered amount; must be a finite number in `0..=MAX_AMOUNT`
pub(crate) fn parse_amount(input: &str) -> LedgerResult<Money> {
    let amount = Money::parse(input).map_err(|e| LedgerError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "Amount cannot be negative: '{}'",
            input.trim()
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "Amount is too large: '{}'",
            input.trim()
        )));
    }
    Ok(amount)
}

/// Parse an ISO `YYYY-MM-DD` date
pub(crate) fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date: '{}'. Use YYYY-MM-DD",
            input.trim()
        ))
    })
}
