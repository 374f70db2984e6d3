//! Dashboard and report commands

use clap::Subcommand;

use super::Context;
use crate::display::{format_category_chart, format_dashboard, format_date_chart, format_money};
use crate::error::LedgerResult;
use crate::reports::{CategoryBreakdown, DateSeries, Totals};
use crate::state::AppState;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expense, balance and savings totals
    Summary,
    /// Expenses grouped by category
    Categories,
    /// All transaction amounts grouped by date
    Dates,
}

/// Greeting, totals and recent transactions
pub fn handle_dashboard(ctx: &Context, state: &AppState) -> LedgerResult<()> {
    let user = state.require_session()?;
    let totals = Totals::generate(&state.transactions);
    print!(
        "{}",
        format_dashboard(
            user,
            &totals,
            &state.transactions_by_date(),
            ctx.settings.recent_limit
        )
    );
    Ok(())
}

/// Handle a report command
pub fn handle_report_command(state: &AppState, cmd: ReportCommands) -> LedgerResult<()> {
    let currency = state.require_session()?.base_currency();

    match cmd {
        ReportCommands::Summary => {
            let totals = Totals::generate(&state.transactions);
            println!("Income:   {}", format_money(totals.income, currency));
            println!("Expenses: {}", format_money(totals.expense, currency));
            println!("Balance:  {}", format_money(totals.balance, currency));
            println!("Savings:  {}", format_money(totals.savings, currency));
        }

        ReportCommands::Categories => {
            let breakdown = CategoryBreakdown::generate(&state.transactions);
            print!("{}", format_category_chart(&breakdown, currency));
        }

        ReportCommands::Dates => {
            let series = DateSeries::generate(&state.transactions);
            print!("{}", format_date_chart(&series, currency));
        }
    }

    Ok(())
}
