//! Settings CLI commands

use clap::Subcommand;

use super::Context;
use crate::display::{format_money, SUPPORTED_CURRENCIES};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CurrencyCode, Money, ThemeMode};
use crate::services::PreferenceService;
use crate::state::AppState;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings and paths
    Show,
    /// Change the base currency of the signed-in user
    Currency {
        /// Currency code, e.g. USD, EUR, JPY
        code: String,
    },
    /// Change the color theme (light, dark, system)
    Theme {
        /// light, dark or system
        mode: String,
    },
    /// Delete every user, session and record
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    ctx: &Context,
    state: &mut AppState,
    cmd: SettingsCommands,
) -> LedgerResult<()> {
    let service = PreferenceService::new(ctx.storage);

    match cmd {
        SettingsCommands::Show => {
            println!("Spendwise Configuration");
            println!("=======================");
            println!("Data directory: {}", ctx.paths.base_dir().display());
            println!("Theme:          {}", service.theme());
            match state.session() {
                Some(user) => {
                    println!("Signed in as:   {} ({})", user.name, user.email);
                    println!("Base currency:  {}", user.base_currency());
                }
                None => println!("Signed in as:   (nobody)"),
            }
            println!();
            println!("Supported currencies:");
            let sample = Money::from_cents(123456);
            for code in SUPPORTED_CURRENCIES {
                println!(
                    "  {}  {}",
                    code,
                    format_money(sample, &CurrencyCode::new(code))
                );
            }
        }

        SettingsCommands::Currency { code } => {
            let user = service.set_currency(state, &code)?;
            println!("Base currency set to {}", user.base_currency());
            if !user.base_currency().is_well_formed() {
                println!("Note: '{}' is not a recognised currency code", user.base_currency());
            }
        }

        SettingsCommands::Theme { mode } => {
            let theme = ThemeMode::parse(&mode).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid theme: '{}'. Use light, dark or system",
                    mode
                ))
            })?;
            service.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }

        SettingsCommands::Reset { yes } => {
            if !yes {
                println!("This deletes every account and record. Re-run with --yes to confirm.");
                return Ok(());
            }
            service.reset_all(state)?;
            println!("All data has been reset.");
        }

        SettingsCommands::Audit { limit } => {
            let Some(logger) = ctx.storage.audit_log() else {
                println!("Audit logging is disabled.");
                return Ok(());
            };

            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
