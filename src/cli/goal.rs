//! Goal CLI commands

use clap::Subcommand;

use super::Context;
use crate::display::{format_goal_list, format_money};
use crate::error::LedgerResult;
use crate::reports::GoalProgress;
use crate::services::LedgerService;
use crate::state::AppState;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        #[arg(short, long)]
        target: String,
        /// Amount saved so far
        #[arg(short, long, default_value = "0")]
        current: String,
        /// Target date (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        date: String,
    },
    /// Show every goal with its progress
    List,
}

/// Handle a goal command
pub fn handle_goal_command(
    ctx: &Context,
    state: &mut AppState,
    cmd: GoalCommands,
) -> LedgerResult<()> {
    let currency = state.require_session()?.base_currency().clone();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            current,
            date,
        } => {
            let goal =
                LedgerService::new(ctx.storage, state).add_goal(&name, &target, &current, &date)?;
            let progress = GoalProgress::generate(&goal);
            println!(
                "Added goal: {} ({} of {}, {}%)",
                goal.name,
                format_money(goal.current, &currency),
                format_money(goal.target, &currency),
                progress.percent
            );
        }

        GoalCommands::List => {
            let progress: Vec<GoalProgress> =
                state.goals.iter().map(GoalProgress::generate).collect();
            println!("{}", format_goal_list(&progress, &currency));
        }
    }

    Ok(())
}
