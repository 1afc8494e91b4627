//! Persisted user preferences: display language and color theme.
//!
//! The page root owns one [`PreferenceStore`] and threads the current
//! [`Preferences`] down as props. Startup reads both keys once; every change is
//! written back synchronously. Missing or unrecognised stored values are treated
//! as absent and never surface as errors.

use std::fmt;

use dioxus::logger::tracing::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::storage::PreferenceStorage;
use crate::i18n::Language;

pub const LANGUAGE_KEY: &str = "app_lang";
pub const THEME_KEY: &str = "app_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Theme used when nothing valid is persisted.
    pub fn system_default(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Snapshot of the active preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

pub struct PreferenceStore<S> {
    storage: S,
    current: Preferences,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Read persisted values, falling back to `es` and to the system theme.
    pub fn load(storage: S, system_prefers_dark: bool) -> Self {
        let language = read(&storage, LANGUAGE_KEY, Language::from_code).unwrap_or_default();
        let theme = read(&storage, THEME_KEY, Theme::from_code)
            .unwrap_or_else(|| Theme::system_default(system_prefers_dark));

        debug!("preferences loaded: lang={language} theme={theme}");

        Self {
            storage,
            current: Preferences { language, theme },
        }
    }

    pub fn preferences(&self) -> Preferences {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        self.current.language = language;
        self.persist(LANGUAGE_KEY, language.code());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current.theme = theme;
        self.persist(THEME_KEY, theme.code());
    }

    pub fn toggle_language(&mut self) -> Language {
        let next = self.current.language.toggle();
        self.set_language(next);
        next
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.theme.toggle();
        self.set_theme(next);
        next
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            warn!("preference not persisted: {err}");
        }
    }
}

fn read<S, T>(storage: &S, key: &str, parse: fn(&str) -> Option<T>) -> Option<T>
where
    S: PreferenceStorage,
{
    let raw = storage.get(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        debug!("ignoring unrecognised stored value for {key}: {raw:?}");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStorage, StorageError};

    #[test]
    fn missing_language_defaults_to_spanish() {
        let store = PreferenceStore::load(MemoryStorage::new(), false);
        assert_eq!(store.preferences().language, Language::Es);
        assert_eq!(store.preferences().theme, Theme::Light);
    }

    #[test]
    fn theme_falls_back_to_system_preference() {
        let store = PreferenceStore::load(MemoryStorage::new(), true);
        assert_eq!(store.preferences().theme, Theme::Dark);
    }

    #[test]
    fn persisted_values_win_over_defaults() {
        let storage = MemoryStorage::with_entries([(LANGUAGE_KEY, "en"), (THEME_KEY, "light")]);
        let store = PreferenceStore::load(storage, true);
        assert_eq!(
            store.preferences(),
            Preferences {
                language: Language::En,
                theme: Theme::Light,
            }
        );
    }

    #[test]
    fn dark_theme_survives_reload() {
        let storage = MemoryStorage::new();
        let mut store = PreferenceStore::load(storage.clone(), false);
        store.set_theme(Theme::Dark);

        let reloaded = PreferenceStore::load(storage, false);
        assert_eq!(reloaded.preferences().theme, Theme::Dark);
    }

    #[test]
    fn corrupted_theme_falls_back_without_error() {
        let storage = MemoryStorage::with_entries([(THEME_KEY, "sepia"), (LANGUAGE_KEY, "klingon")]);
        let store = PreferenceStore::load(storage, false);
        assert_eq!(store.preferences().theme, Theme::Light);
        assert_eq!(store.preferences().language, Language::Es);
    }

    #[test]
    fn toggling_from_stored_dark_persists_light() {
        let storage = MemoryStorage::with_entries([(THEME_KEY, "dark")]);
        let mut store = PreferenceStore::load(storage.clone(), false);
        assert_eq!(store.preferences().theme, Theme::Dark);

        assert_eq!(store.toggle_theme(), Theme::Light);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn every_language_change_is_written_back() {
        let storage = MemoryStorage::new();
        let mut store = PreferenceStore::load(storage.clone(), false);

        assert_eq!(store.toggle_language(), Language::En);
        assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("en"));
        assert_eq!(store.toggle_language(), Language::Es);
        assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("es"));
    }

    struct ReadOnly;

    impl PreferenceStorage for ReadOnly {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected {
                key: key.to_string(),
                reason: "quota exceeded".into(),
            })
        }
    }

    #[test]
    fn failed_write_still_changes_the_active_value() {
        let mut store = PreferenceStore::load(ReadOnly, false);
        store.set_theme(Theme::Dark);
        assert_eq!(store.preferences().theme, Theme::Dark);
    }
}
