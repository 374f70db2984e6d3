use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use spendwise::cli::{
    handle_account_command, handle_budget_command, handle_dashboard, handle_export_command,
    handle_goal_command, handle_report_command, handle_settings_command,
    handle_transaction_command, AccountCommands, BudgetCommands, Context, ExportArgs,
    GoalCommands, ReportCommands, SettingsCommands, TransactionCommands,
};
use spendwise::config::{AppPaths, Settings};
use spendwise::state::AppState;
use spendwise::storage::Storage;

/// Environment variable holding a `tracing` filter; overrides `log_filter`
const LOG_ENV: &str = "SPENDWISE_LOG";

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Personal income, expense, budget and savings tracker",
    long_about = "Spendwise records income and expenses, tracks category budgets and \
                  savings goals, and summarises where the money goes. Each account's \
                  data is kept in its own partition on this machine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign up, sign in and sign out
    #[command(subcommand)]
    Account(AccountCommands),

    /// Record, list and delete transactions
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goals
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Totals and charts
    #[command(subcommand)]
    Report(ReportCommands),

    /// Totals and recent transactions
    Dashboard,

    /// Currency, theme, reset and audit log
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export the signed-in user's data
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings.log_filter);

    let storage = Storage::new(&paths, settings.audit_enabled)?;
    let mut state = AppState::init(&storage);

    let ctx = Context {
        paths: &paths,
        settings: &settings,
        storage: &storage,
    };

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&ctx, &mut state, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&ctx, &mut state, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&ctx, &mut state, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&ctx, &mut state, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&state, cmd)?,
        Some(Commands::Dashboard) => handle_dashboard(&ctx, &state)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&ctx, &mut state, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&state, args)?,
        None if state.is_signed_in() => handle_dashboard(&ctx, &state)?,
        None => {
            println!("Spendwise - personal finance tracker");
            println!();
            println!("Run 'spendwise account signup' to create an account,");
            println!("or 'spendwise account signin' to continue where you left off.");
            println!("Run 'spendwise --help' for usage information.");
        }
    }

    Ok(())
}

/// Diagnostic logging to stderr, filtered by `SPENDWISE_LOG` or the settings
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
