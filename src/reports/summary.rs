//! Income, expense and balance totals

use crate::models::{Money, Transaction};

/// Dashboard totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`, may be negative
    pub balance: Money,
    /// The balance floored at zero
    pub savings: Money,
}

impl Totals {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for txn in transactions {
            if txn.is_income() {
                income += txn.amount;
            } else {
                expense += txn.amount;
            }
        }

        let balance = income - expense;
        Self {
            income,
            expense,
            balance,
            savings: balance.max_zero(),
        }
    }
}
