//! Display formatting for terminal output
//!
//! Turns collections and report results into strings. Nothing here reads or
//! writes storage; callers decide when to refresh a view.

pub mod currency;
pub mod dashboard;
pub mod progress;
pub mod transaction;

pub use currency::{format_money, SUPPORTED_CURRENCIES};
pub use dashboard::{format_category_chart, format_dashboard, format_date_chart};
pub use progress::{format_budget_list, format_goal_list};
pub use transaction::{format_recent, format_transaction_table};
