//! Spending by category
//!
//! Feeds the category chart: expense totals per category, in the order each
//! category first appears in the transaction list.

use crate::models::{Money, Transaction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub categories: Vec<CategorySpend>,
}

impl CategoryBreakdown {
    /// Group expense transactions by category; income is ignored
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut categories: Vec<CategorySpend> = Vec::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            match categories.iter_mut().find(|c| c.category == txn.category) {
                Some(entry) => {
                    entry.total += txn.amount;
                    entry.transaction_count += 1;
                }
                None => categories.push(CategorySpend {
                    category: txn.category.clone(),
                    total: txn.amount,
                    transaction_count: 1,
                }),
            }
        }

        Self { categories }
    }

    /// Label/value pairs for charting
    pub fn rows(&self) -> Vec<(&str, Money)> {
        self.categories
            .iter()
            .map(|c| (c.category.as_str(), c.total))
            .collect()
    }

    pub fn total(&self) -> Money {
        self.categories.iter().map(|c| c.total).sum()
    }

    /// Share of all spending, 0-100
    pub fn percentage(&self, spend: &CategorySpend) -> f64 {
        let total = self.total();
        if total.is_zero() {
            0.0
        } else {
            spend.total.as_f64() / total.as_f64() * 100.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::tests::txn;

    #[test]
    fn test_first_seen_order_and_sums() {
        let transactions = vec![
            txn("expense", "10", "Rent", "2025-01-03"),
            txn("expense", "5", "Food", "2025-01-01"),
            txn("income", "100", "Salary", "2025-01-01"),
            txn("expense", "7.25", "Rent", "2025-01-02"),
        ];

        let breakdown = CategoryBreakdown::generate(&transactions);
        assert_eq!(
            breakdown.rows(),
            vec![
                ("Rent", Money::from_cents(1725)),
                ("Food", Money::from_cents(500)),
            ]
        );
        assert_eq!(breakdown.categories[0].transaction_count, 2);
        assert_eq!(breakdown.total(), Money::from_cents(2225));
    }

    #[test]
    fn test_income_only_categories_absent() {
        let transactions = vec![txn("income", "100", "Salary", "2025-01-01")];
        assert!(CategoryBreakdown::generate(&transactions).is_empty());
    }

    #[test]
    fn test_percentage() {
        let transactions = vec![
            txn("expense", "30", "Food", "2025-01-01"),
            txn("expense", "10", "Fuel", "2025-01-01"),
        ];
        let breakdown = CategoryBreakdown::generate(&transactions);
        assert!((breakdown.percentage(&breakdown.categories[0]) - 75.0).abs() < 1e-9);
    }
}
