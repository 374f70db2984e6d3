//! Account CLI commands

use clap::Subcommand;

use super::{read_password, Context};
use crate::error::LedgerResult;
use crate::services::{AuthService, SignUpInput};
use crate::state::AppState;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create an account and sign in
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address (the account key, matched exactly)
        #[arg(short, long)]
        email: String,
        /// Password; prompted for when omitted
        #[arg(long, env = "SPENDWISE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Password confirmation; defaults to --password when that is given
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Sign in to an existing account
    Signin {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password; prompted for when omitted
        #[arg(long, env = "SPENDWISE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Sign out and forget the session
    Signout,
    /// Show the signed-in user
    Whoami,
}

/// Handle an account command
pub fn handle_account_command(
    ctx: &Context,
    state: &mut AppState,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    let service = AuthService::new(ctx.storage, ctx.settings);

    match cmd {
        AccountCommands::Signup {
            name,
            email,
            password,
            confirm,
        } => {
            let interactive = password.is_none();
            let password = read_password(password, "Password: ")?;
            let confirm_password = match confirm {
                Some(confirm) => read_password(Some(confirm), "")?,
                None if interactive => read_password(None, "Confirm password: ")?,
                None => password.clone(),
            };

            let user = service.sign_up(
                state,
                SignUpInput {
                    name,
                    email,
                    password,
                    confirm_password,
                },
            )?;

            println!("Account created. Welcome, {}!", user.name);
            println!("  Email:    {}", user.email);
            println!("  Currency: {}", user.base_currency());
        }

        AccountCommands::Signin { email, password } => {
            let password = read_password(password, "Password: ")?;
            let user = service.sign_in(state, &email, &password)?;
            println!("Signed in as {} ({})", user.name, user.email);
        }

        AccountCommands::Signout => {
            service.sign_out(state)?;
            println!("Signed out.");
        }

        AccountCommands::Whoami => match state.session() {
            Some(user) => {
                println!("{} ({})", user.name, user.email);
                println!("  Currency: {}", user.base_currency());
            }
            None => println!("Not signed in."),
        },
    }

    Ok(())
}
