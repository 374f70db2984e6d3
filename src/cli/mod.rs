//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers print
//! their results; errors propagate to `main`.

pub mod account;
pub mod budget;
pub mod export;
pub mod goal;
pub mod report;
pub mod settings;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportArgs};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_dashboard, handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use zeroize::Zeroizing;

use crate::config::{AppPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::Storage;

/// Everything a handler needs besides the application state
pub struct Context<'a> {
    pub paths: &'a AppPaths,
    pub settings: &'a Settings,
    pub storage: &'a Storage,
}

/// Use the supplied password or prompt for one without echo
pub(crate) fn read_password(
    supplied: Option<String>,
    prompt: &str,
) -> LedgerResult<Zeroizing<String>> {
    match supplied {
        Some(password) => Ok(Zeroizing::new(password)),
        None => rpassword::prompt_password(prompt)
            .map(Zeroizing::new)
            .map_err(|e| LedgerError::Io(format!("Failed to read password: {}", e))),
    }
}
