//! Service layer for Spendwise
//!
//! Services validate raw input, update the in-memory [`AppState`], persist
//! through [`Storage`] and write the audit trail. Rendering is left to the
//! caller.
//!
//! [`AppState`]: crate::state::AppState
//! [`Storage`]: crate::storage::Storage

pub mod auth;
pub mod ledger;
pub mod preferences;

pub use auth::{AuthService, SignUpInput};
pub use ledger::LedgerService;
pub use preferences::PreferenceService;
