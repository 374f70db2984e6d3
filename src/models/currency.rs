//! Currency codes
//!
//! A `CurrencyCode` is whatever the user picked for `settings.baseCurrency`.
//! Stored records may carry anything, so the type does not reject unknown or
//! malformed codes; formatting decides what to do with them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Code used when a record has no base currency
pub const DEFAULT_CURRENCY: &str = "USD";

/// An ISO 4217-style currency code such as `USD`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Three ASCII uppercase letters
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 3 && self.0.bytes().all(|b| b.is_ascii_uppercase())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
