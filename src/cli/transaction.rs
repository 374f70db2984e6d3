//! Transaction CLI commands

use chrono::Local;
use clap::Subcommand;

use super::Context;
use crate::display::format_transaction_table;
use crate::display::transaction::{format_recent, format_signed_amount};
use crate::error::LedgerResult;
use crate::models::TransactionDraft;
use crate::services::LedgerService;
use crate::state::AppState;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// income or expense
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Short description
        #[arg(long)]
        title: String,
        /// Amount, e.g. "12.50"
        #[arg(short, long)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// List all transactions, newest first
    List,
    /// Show the most recent transactions
    Recent {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete a transaction by ID
    Delete {
        /// Transaction ID
        id: String,
    },
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ctx: &Context,
    state: &mut AppState,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let currency = state.require_session()?.base_currency().clone();

    match cmd {
        TransactionCommands::Add {
            kind,
            title,
            amount,
            category,
            date,
            notes,
        } => {
            let draft = TransactionDraft {
                kind,
                title,
                amount,
                category,
                date: date.unwrap_or_else(today),
                notes,
            };

            let txn = LedgerService::new(ctx.storage, state).add_transaction(&draft)?;

            println!("Added transaction: {}", txn.title);
            println!("  Date:     {}", txn.date.format("%Y-%m-%d"));
            println!("  Amount:   {}", format_signed_amount(&txn, &currency));
            println!("  Category: {}", txn.category);
            println!("  ID:       {}", txn.id);
        }

        TransactionCommands::List => {
            println!(
                "{}",
                format_transaction_table(&state.transactions_by_date(), &currency)
            );
        }

        TransactionCommands::Recent { limit } => {
            let limit = limit.unwrap_or(ctx.settings.recent_limit);
            print!(
                "{}",
                format_recent(&state.transactions_by_date(), &currency, limit)
            );
        }

        TransactionCommands::Delete { id } => {
            let removed = LedgerService::new(ctx.storage, state).delete_transaction(&id)?;
            println!("Deleted transaction: {} ({})", removed.title, removed.id);
        }
    }

    Ok(())
}
