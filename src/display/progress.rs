//! Budget and goal progress formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::currency::format_money;
use crate::models::CurrencyCode;
use crate::reports::{BudgetProgress, GoalProgress};

const BAR_WIDTH: usize = 20;

/// `[#####---------------]` for a 0-100 percentage
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent / Budget")]
    spent: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn format_budget_list(progress: &[BudgetProgress], currency: &CurrencyCode) -> String {
    if progress.is_empty() {
        return "No budgets set.".to_string();
    }

    let rows = progress.iter().map(|p| BudgetRow {
        category: p.category.clone(),
        spent: format!(
            "{} / {}",
            format_money(p.spent, currency),
            format_money(p.amount, currency)
        ),
        progress: format!("{} {:>3.0}%", progress_bar(p.percent), p.percent),
        status: p.level.to_string(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Target Date")]
    date: String,
}

pub fn format_goal_list(goals: &[GoalProgress], currency: &CurrencyCode) -> String {
    if goals.is_empty() {
        return "No goals.".to_string();
    }

    let rows = goals.iter().map(|g| GoalRow {
        name: g.name.clone(),
        saved: format!(
            "{} of {}",
            format_money(g.current, currency),
            format_money(g.target, currency)
        ),
        progress: format!("{} {:>3}%", progress_bar(f64::from(g.percent)), g.percent),
        date: g
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}
