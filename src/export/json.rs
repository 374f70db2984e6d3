//! JSON export of the active user's partition

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Goal, Money, Transaction};
use crate::reports::Totals;
use crate::state::AppState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Who the export belongs to; never carries the password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportUser {
    pub email: String,
    pub name: String,
    #[serde(rename = "baseCurrency")]
    pub base_currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
    pub savings: Money,
    pub transaction_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

/// Everything stored for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    pub user: ExportUser,

    pub transactions: Vec<Transaction>,

    pub budgets: Vec<Budget>,

    pub goals: Vec<Goal>,

    pub summary: ExportSummary,
}

impl PartitionExport {
    /// Snapshot of the signed-in user's resident collections
    pub fn from_state(state: &AppState) -> LedgerResult<Self> {
        let user = state.require_session()?;
        let totals = Totals::generate(&state.transactions);
        let dates = state.transactions.iter().map(|t| t.date);

        let summary = ExportSummary {
            income: totals.income,
            expense: totals.expense,
            balance: totals.balance,
            savings: totals.savings,
            transaction_count: state.transactions.len(),
            budget_count: state.budgets.len(),
            goal_count: state.goals.len(),
            earliest_transaction: dates.clone().min().map(|d| d.to_string()),
            latest_transaction: dates.max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            user: ExportUser {
                email: user.email.clone(),
                name: user.name.clone(),
                base_currency: user.base_currency().to_string(),
            },
            transactions: state.transactions.clone(),
            budgets: state.budgets.iter().cloned().collect(),
            goals: state.goals.clone(),
            summary,
        })
    }
}

pub fn export_json<W: Write>(state: &AppState, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let export = PartitionExport::from_state(state)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::populated_state;

    #[test]
    fn test_export_json() {
        let state = populated_state();
        let mut buffer = Vec::new();
        export_json(&state, &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["user"]["email"], "alice@x.com");
        assert_eq!(value["user"]["baseCurrency"], "USD");
        assert!(value["user"].get("password").is_none());
        assert_eq!(value["transactions"].as_array().unwrap().len(), 2);
        assert_eq!(value["transactions"][0]["type"], "income");
        assert_eq!(value["budgets"][0]["category"], "Food");
        assert_eq!(value["goals"][0]["name"], "Car");
        assert_eq!(value["summary"]["balance"], "950");
        assert_eq!(value["summary"]["earliest_transaction"], "2025-01-01");
    }

    #[test]
    fn test_export_requires_session() {
        let state = AppState::default();
        let mut buffer = Vec::new();
        assert!(matches!(
            export_json(&state, &mut buffer, false),
            Err(LedgerError::NotSignedIn)
        ));
    }
}
