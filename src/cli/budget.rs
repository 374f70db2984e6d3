//! Budget CLI commands

use clap::Subcommand;

use super::Context;
use crate::display::{format_budget_list, format_money};
use crate::error::LedgerResult;
use crate::reports::BudgetProgress;
use crate::services::LedgerService;
use crate::state::AppState;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a category, replacing any existing one
    Set {
        /// Category name
        category: String,
        /// Budget amount
        amount: String,
    },
    /// Show every budget with its progress
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    ctx: &Context,
    state: &mut AppState,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let currency = state.require_session()?.base_currency().clone();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let budget = LedgerService::new(ctx.storage, state).set_budget(&category, &amount)?;
            println!(
                "Budget for {} set to {}",
                budget.category,
                format_money(budget.amount, &currency)
            );
        }

        BudgetCommands::List => {
            let progress = BudgetProgress::for_all(&state.budgets, &state.transactions);
            println!("{}", format_budget_list(&progress, &currency));
        }
    }

    Ok(())
}
