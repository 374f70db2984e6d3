//! User account model
//!
//! A `UserRecord` lives in the credential collection; the active session keeps
//! its own copy of it.

use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// Per-user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default)]
    pub base_currency: CurrencyCode,
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique key, compared exactly as entered
    pub email: String,

    /// Argon2 PHC string, or a legacy encoded/plain value from older records
    #[serde(rename = "password")]
    pub password_hash: String,

    pub name: String,

    /// Missing settings are backfilled with the default currency
    #[serde(default)]
    pub settings: UserSettings,
}

impl UserRecord {
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
        base_currency: CurrencyCode,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            name: name.into(),
            settings: UserSettings { base_currency },
        }
    }

    pub fn base_currency(&self) -> &CurrencyCode {
        &self.settings.base_currency
    }
}
