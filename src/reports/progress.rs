//! Budget and goal progress

use std::fmt;

use chrono::NaiveDate;

use crate::models::{Budget, BudgetBook, Goal, Money, Transaction};

/// Warning level of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLevel {
    Neutral,
    /// Above 70%
    Warning,
    /// Above 90%
    Danger,
}

impl ProgressLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 90.0 {
            Self::Danger
        } else if percent > 70.0 {
            Self::Warning
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for ProgressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "ok"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// `part / whole` as a percentage clamped to `[0, 100]`; zero when `whole` is zero
fn clamped_percent(part: Money, whole: Money) -> f64 {
    if !whole.is_positive() {
        return 0.0;
    }
    (part.as_f64() / whole.as_f64() * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub category: String,
    pub amount: Money,
    /// Sum of expenses in the budget's category
    pub spent: Money,
    pub percent: f64,
    pub level: ProgressLevel,
}

impl BudgetProgress {
    pub fn generate(budget: &Budget, transactions: &[Transaction]) -> Self {
        let spent: Money = transactions
            .iter()
            .filter(|t| t.is_expense() && t.category == budget.category)
            .map(|t| t.amount)
            .sum();

        let percent = clamped_percent(spent, budget.amount);
        Self {
            category: budget.category.clone(),
            amount: budget.amount,
            spent,
            percent,
            level: ProgressLevel::from_percent(percent),
        }
    }

    /// Progress of every budget, ordered by category
    pub fn for_all(budgets: &BudgetBook, transactions: &[Transaction]) -> Vec<Self> {
        budgets
            .iter()
            .map(|b| Self::generate(b, transactions))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalProgress {
    pub name: String,
    pub current: Money,
    pub target: Money,
    pub date: Option<NaiveDate>,
    /// Whole percent, 0-100
    pub percent: u32,
}

impl GoalProgress {
    pub fn generate(goal: &Goal) -> Self {
        Self {
            name: goal.name.clone(),
            current: goal.current,
            target: goal.target,
            date: goal.date,
            percent: clamped_percent(goal.current, goal.target).round() as u32,
        }
    }
}
