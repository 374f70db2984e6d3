//! Global (not per-user) preferences

use std::sync::Arc;

use super::keys::THEME_KEY;
use super::kv::{write_value, KeyValueStore};
use crate::error::{LedgerError, LedgerResult};
use crate::models::ThemeMode;

pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored theme, `System` when absent or unreadable
    ///
    /// Accepts both a JSON string and the bare word older versions wrote.
    pub fn theme(&self) -> ThemeMode {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw)
                .ok()
                .or_else(|| ThemeMode::parse(&raw))
                .unwrap_or_default(),
            _ => ThemeMode::default(),
        }
    }

    pub fn set_theme(&self, theme: ThemeMode) -> LedgerResult<()> {
        write_value(self.store.as_ref(), THEME_KEY, &theme)
            .map_err(|e| LedgerError::unable_to_save("theme", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;

    #[test]
    fn test_default_and_round_trip() {
        let prefs = PreferenceStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.theme(), ThemeMode::System);

        prefs.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(prefs.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_reads_bare_word_and_ignores_garbage() {
        let kv = Arc::new(MemoryStore::new());
        let prefs = PreferenceStore::new(kv.clone());

        kv.set(THEME_KEY, "light").unwrap();
        assert_eq!(prefs.theme(), ThemeMode::Light);

        kv.set(THEME_KEY, "neon").unwrap();
        assert_eq!(prefs.theme(), ThemeMode::System);
    }
}
