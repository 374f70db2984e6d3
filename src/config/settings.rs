//! Application settings for Spendwise
//!
//! Loaded from `config.json` in the base directory. Every field has a serde
//! default so partial or older files keep working.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::crypto::password::HashParams;
use crate::error::LedgerError;
use crate::models::CurrencyCode;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base currency given to newly created accounts
    #[serde(default)]
    pub default_currency: CurrencyCode,

    /// Argon2id cost parameters for new password hashes
    #[serde(default)]
    pub password_hashing: HashParams,

    /// Number of rows in the "recent transactions" view
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// `tracing` filter used when `SPENDWISE_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_recent_limit() -> usize {
    5
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: CurrencyCode::default(),
            password_hashing: HashParams::default(),
            recent_limit: default_recent_limit(),
            log_filter: default_log_filter(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
