//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::currency::format_money;
use crate::models::{CurrencyCode, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

/// Signed amount: `+$10.00` for income, `-$10.00` for expenses
pub fn format_signed_amount(txn: &Transaction, currency: &CurrencyCode) -> String {
    format!("{}{}", txn.kind.sign(), format_money(txn.amount, currency))
}

/// Full transaction table, rows in the order given
pub fn format_transaction_table(transactions: &[&Transaction], currency: &CurrencyCode) -> String {
    if transactions.is_empty() {
        return "No transactions yet.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format("%Y-%m-%d").to_string(),
        title: truncate(&txn.title, 30),
        category: txn.category.clone(),
        amount: format_signed_amount(txn, currency),
        notes: truncate(&txn.notes, 30),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Compact list of the first `limit` transactions
pub fn format_recent(
    transactions: &[&Transaction],
    currency: &CurrencyCode,
    limit: usize,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    for txn in transactions.iter().take(limit) {
        output.push_str(&format!(
            "  {} {:24} {:14} {:>16}\n",
            txn.date.format("%Y-%m-%d"),
            truncate(&txn.title, 24),
            truncate(&txn.category, 14),
            format_signed_amount(txn, currency)
        ));
    }
    output
}

/// Cut a string to `max` characters, marking the cut with `...`
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionDraft;

    fn txn(kind: &str, title: &str, amount: &str) -> Transaction {
        TransactionDraft {
            kind: kind.into(),
            title: title.into(),
            amount: amount.into(),
            category: "Food".into(),
            date: "2025-01-10".into(),
            notes: "paid cash".into(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let usd = CurrencyCode::default();
        assert_eq!(format_signed_amount(&txn("income", "Pay", "10"), &usd), "+$10.00");
        assert_eq!(format_signed_amount(&txn("expense", "Tea", "2.5"), &usd), "-$2.50");
    }

    #[test]
    fn test_table() {
        let a = txn("expense", "Lunch", "12.50");
        let table = format_transaction_table(&[&a], &CurrencyCode::default());
        assert!(table.contains("Lunch"));
        assert!(table.contains("-$12.50"));
        assert!(table.contains("paid cash"));
        assert!(table.contains(a.id.as_str()));
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            format_transaction_table(&[], &CurrencyCode::default()),
            "No transactions yet."
        );
    }

    #[test]
    fn test_recent_respects_limit() {
        let items: Vec<Transaction> = (0..7)
            .map(|i| txn("expense", &format!("Item {}", i), "1"))
            .collect();
        let refs: Vec<&Transaction> = items.iter().collect();

        let output = format_recent(&refs, &CurrencyCode::default(), 5);
        assert_eq!(output.lines().count(), 5);
        assert!(!output.contains("Item 5"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        let result = truncate("A very long string", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }
}
