//! Aggregation over the resident collections
//!
//! Pure functions: each report is computed from the transactions, budgets
//! and goals passed in and never touches storage.

pub mod history;
pub mod progress;
pub mod spending;
pub mod summary;

pub use history::DateSeries;
pub use progress::{BudgetProgress, GoalProgress, ProgressLevel};
pub use spending::{CategoryBreakdown, CategorySpend};
pub use summary::Totals;
