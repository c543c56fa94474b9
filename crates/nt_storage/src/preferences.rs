use std::sync::Arc;

use nt_core::{KeyValueStore, Language, Result};

pub const DARK_MODE_KEY: &str = "darkMode";
pub const LANGUAGE_KEY: &str = "language";

/// Persisted, non-article user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: Language,
}

/// Reads and writes [`Preferences`] through the injected key/value store.
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Missing or unreadable values fall back to the defaults (light theme,
    /// English).
    pub fn load(&self) -> Preferences {
        let dark_mode = self.read(DARK_MODE_KEY).as_deref() == Some("true");
        let language = match self.read(LANGUAGE_KEY) {
            Some(code) => code.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "[Preferences] Ignoring stored language");
                Language::default()
            }),
            None => Language::default(),
        };
        Preferences {
            dark_mode,
            language,
        }
    }

    pub fn save_dark_mode(&self, dark_mode: bool) -> Result<()> {
        self.store
            .set(DARK_MODE_KEY, if dark_mode { "true" } else { "false" })
    }

    pub fn save_language(&self, language: Language) -> Result<()> {
        self.store.set(LANGUAGE_KEY, language.code())
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "[Preferences] Failed to read preference");
            None
        })
    }
}
