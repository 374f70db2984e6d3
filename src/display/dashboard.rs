//! Dashboard and chart-style report formatting

use super::currency::format_money;
use super::progress::progress_bar;
use super::transaction::{format_recent, truncate};
use crate::models::{CurrencyCode, Money, Transaction, UserRecord};
use crate::reports::{CategoryBreakdown, DateSeries, Totals};

/// Greeting, totals and the most recent transactions
pub fn format_dashboard(
    user: &UserRecord,
    totals: &Totals,
    recent: &[&Transaction],
    limit: usize,
) -> String {
    let currency = user.base_currency();
    let mut output = String::new();

    output.push_str(&format!("Welcome back, {}!\n\n", user.name));
    output.push_str(&format!("  Income    {:>16}\n", format_money(totals.income, currency)));
    output.push_str(&format!("  Expenses  {:>16}\n", format_money(totals.expense, currency)));
    output.push_str(&format!("  Balance   {:>16}\n", format_money(totals.balance, currency)));
    output.push_str(&format!("  Savings   {:>16}\n", format_money(totals.savings, currency)));
    output.push_str("\nRecent transactions:\n");
    output.push_str(&format_recent(recent, currency, limit));

    output
}

/// Horizontal bar per category, scaled to the largest category
pub fn format_category_chart(breakdown: &CategoryBreakdown, currency: &CurrencyCode) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<(String, Money)> = breakdown
        .rows()
        .into_iter()
        .map(|(label, total)| (label.to_string(), total))
        .collect();
    format_bars("Spending by category", &rows, currency)
}

/// Horizontal bar per day, oldest first
pub fn format_date_chart(series: &DateSeries, currency: &CurrencyCode) -> String {
    if series.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    format_bars("Activity by date", &series.rows(), currency)
}

fn format_bars(title: &str, rows: &[(String, Money)], currency: &CurrencyCode) -> String {
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or_default();

    let mut output = format!("{}:\n", title);
    for (label, value) in rows {
        let percent = if max.is_positive() {
            value.as_f64() / max.as_f64() * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "  {:16} {} {:>16}\n",
            truncate(label, 16),
            progress_bar(percent),
            format_money(*value, currency)
        ));
    }
    output
}
