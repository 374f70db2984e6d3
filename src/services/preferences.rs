//! Preference service
//!
//! Per-user currency, the global theme and the reset-all-data switch.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CurrencyCode, ThemeMode, UserRecord};
use crate::state::AppState;
use crate::storage::{Storage, UserSnapshot};

pub struct PreferenceService<'a> {
    storage: &'a Storage,
}

impl<'a> PreferenceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Change the active user's base currency
    ///
    /// Both the session copy and the credential record are updated.
    pub fn set_currency(&self, state: &mut AppState, code: &str) -> LedgerResult<UserRecord> {
        let before = state.require_session()?.clone();
        let code = code.trim();
        if code.is_empty() {
            return Err(LedgerError::Validation("Please fill all fields".into()));
        }

        let mut after = before.clone();
        after.settings.base_currency = CurrencyCode::new(code);

        state.update_session(self.storage, after.clone())?;
        self.storage.users.update(&after)?;

        self.storage.log_update(
            EntityType::Settings,
            after.email.clone(),
            Some("baseCurrency".to_string()),
            &UserSnapshot::from(&before),
            &UserSnapshot::from(&after),
        )?;

        Ok(after)
    }

    pub fn theme(&self) -> ThemeMode {
        self.storage.preferences.theme()
    }

    pub fn set_theme(&self, theme: ThemeMode) -> LedgerResult<()> {
        let before = self.theme();
        self.storage.preferences.set_theme(theme)?;
        self.storage.log_update(
            EntityType::Settings,
            "theme",
            None,
            &before,
            &theme,
        )
    }

    /// Wipe every stored user, session, partition and preference
    pub fn reset_all(&self, state: &mut AppState) -> LedgerResult<()> {
        self.storage.reset_all()?;
        state.reset();
        info!("reset all data");
        Ok(())
    }
}
