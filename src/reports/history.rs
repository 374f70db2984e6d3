//! Amounts per day
//!
//! Feeds the timeline chart. Every transaction counts positively regardless
//! of type; income and expense on the same day are added, not netted.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Money, Transaction};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSeries {
    /// Ascending by date
    pub points: Vec<(NaiveDate, Money)>,
}

impl DateSeries {
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for txn in transactions {
            *by_date.entry(txn.date).or_default() += txn.amount;
        }

        Self {
            points: by_date.into_iter().collect(),
        }
    }

    /// Label/value pairs for charting, labels as `YYYY-MM-DD`
    pub fn rows(&self) -> Vec<(String, Money)> {
        self.points
            .iter()
            .map(|(date, total)| (date.format("%Y-%m-%d").to_string(), *total))
            .collect()
    }

    pub fn get(&self, date: NaiveDate) -> Option<Money> {
        self.points
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, total)| *total)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
