//! CSV export of transactions

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::state::AppState;

/// One row per transaction, newest first
pub fn export_transactions_csv<W: Write>(state: &AppState, writer: W) -> LedgerResult<usize> {
    state.require_session()?;

    let mut out = ::csv::Writer::from_writer(writer);
    out.write_record(["id", "date", "type", "title", "category", "amount", "notes"])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    let transactions = state.transactions_by_date();
    for txn in &transactions {
        let date = txn.date.format("%Y-%m-%d").to_string();
        let kind = txn.kind.to_string();
        let amount = txn.amount.to_decimal_string();
        out.write_record([
            txn.id.as_str(),
            date.as_str(),
            kind.as_str(),
            txn.title.as_str(),
            txn.category.as_str(),
            amount.as_str(),
            txn.notes.as_str(),
        ])
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    out.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::populated_state;

    #[test]
    fn test_export_csv() {
        let state = populated_state();
        let mut buffer = Vec::new();
        let count = export_transactions_csv(&state, &mut buffer).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "id,date,type,title,category,amount,notes");
        assert!(lines[1].contains(",2025-01-10,expense,\"Lunch, with Bob\",Food,50,"));
        assert!(lines[2].contains(",2025-01-01,income,Salary,Salary,1000,"));
    }
}
