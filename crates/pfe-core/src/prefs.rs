//! User preferences (theme and locale).
//!
//! Each preference resolves once at startup in this order:
//!
//! 1. an explicit value previously stored by the user,
//! 2. the environment signal (`prefers-color-scheme`, browser language),
//! 3. a static default.
//!
//! Later environment changes only apply while the user has not made an
//! explicit choice.

use crate::error::PreferenceError;

/// Storage key for the theme.
pub const THEME_KEY: &str = "theme";

/// Storage key for the locale.
pub const LOCALE_KEY: &str = "lang";

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Theme matching a `prefers-color-scheme: dark` result.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Parse a language tag, looking only at the primary subtag
    /// (`"en-US"` is English).
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        if primary.eq_ignore_ascii_case("fr") {
            Some(Self::Fr)
        } else if primary.eq_ignore_ascii_case("en") {
            Some(Self::En)
        } else {
            None
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }
}

/// A resolved preference and whether the user chose it explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice<T> {
    value: T,
    explicit: bool,
}

impl<T: Copy + PartialEq> Choice<T> {
    /// Resolve stored value, then environment, then default.
    pub fn resolve(stored: Option<T>, environment: Option<T>, default: T) -> Self {
        match stored {
            Some(value) => Self {
                value,
                explicit: true,
            },
            None => Self {
                value: environment.unwrap_or(default),
                explicit: false,
            },
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Record an explicit user choice.
    pub fn choose(&mut self, value: T) {
        self.value = value;
        self.explicit = true;
    }

    /// Apply an environment change unless the user already chose.
    ///
    /// Returns `true` if the value changed.
    pub fn follow_environment(&mut self, value: T) -> bool {
        if self.explicit || self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}

/// Key-value store backing explicit choices (localStorage in the browser).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Environment signals read once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvironmentPreferences {
    /// `prefers-color-scheme: dark`, if the query is supported.
    pub prefers_dark: Option<bool>,
    /// Browser language tag, e.g. `"fr-FR"`.
    pub language: Option<String>,
}

/// Theme and locale preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    theme: Choice<Theme>,
    locale: Choice<Locale>,
}

impl Preferences {
    /// Resolve both preferences from the store and the environment.
    pub fn load(store: &impl PreferenceStore, environment: &EnvironmentPreferences) -> Self {
        let stored_theme = store.load(THEME_KEY).as_deref().and_then(Theme::parse);
        let stored_locale = store.load(LOCALE_KEY).as_deref().and_then(Locale::parse);

        Self {
            theme: Choice::resolve(
                stored_theme,
                environment.prefers_dark.map(Theme::from_prefers_dark),
                Theme::default(),
            ),
            locale: Choice::resolve(
                stored_locale,
                environment.language.as_deref().and_then(Locale::parse),
                Locale::default(),
            ),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.value()
    }

    pub fn locale(&self) -> Locale {
        self.locale.value()
    }

    pub fn has_explicit_theme(&self) -> bool {
        self.theme.is_explicit()
    }

    /// Explicitly set and persist the theme.
    ///
    /// The in-memory value changes even if persisting fails.
    pub fn set_theme(
        &mut self,
        theme: Theme,
        store: &impl PreferenceStore,
    ) -> Result<(), PreferenceError> {
        self.theme.choose(theme);
        store.save(THEME_KEY, theme.as_str())
    }

    pub fn toggle_theme(&mut self, store: &impl PreferenceStore) -> Result<(), PreferenceError> {
        self.set_theme(self.theme().toggled(), store)
    }

    /// Explicitly set and persist the locale.
    pub fn set_locale(
        &mut self,
        locale: Locale,
        store: &impl PreferenceStore,
    ) -> Result<(), PreferenceError> {
        self.locale.choose(locale);
        store.save(LOCALE_KEY, locale.as_str())
    }

    pub fn toggle_locale(&mut self, store: &impl PreferenceStore) -> Result<(), PreferenceError> {
        self.set_locale(self.locale().toggled(), store)
    }

    /// Route a `prefers-color-scheme` change through the explicit-choice guard.
    pub fn observe_color_scheme(&mut self, prefers_dark: bool) -> bool {
        self.theme
            .follow_environment(Theme::from_prefers_dark(prefers_dark))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl MemoryStore {
        fn with(pairs: &[(&str, &str)]) -> Self {
            let store = Self::default();
            for (k, v) in pairs {
                store.0.borrow_mut().insert(k.to_string(), v.to_string());
            }
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::StorageUnavailable)
        }
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("fr"), Some(Locale::Fr));
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("EN_gb"), Some(Locale::En));
        assert_eq!(Locale::parse("ar"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_defaults_without_signals() {
        let prefs = Preferences::load(&MemoryStore::default(), &EnvironmentPreferences::default());
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.locale(), Locale::Fr);
        assert!(!prefs.has_explicit_theme());
    }

    #[test]
    fn test_environment_beats_default() {
        let env = EnvironmentPreferences {
            prefers_dark: Some(false),
            language: Some("en-US".into()),
        };
        let prefs = Preferences::load(&MemoryStore::default(), &env);
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.locale(), Locale::En);
    }

    #[test]
    fn test_stored_beats_environment() {
        let store = MemoryStore::with(&[("theme", "dark"), ("lang", "fr")]);
        let env = EnvironmentPreferences {
            prefers_dark: Some(false),
            language: Some("en".into()),
        };
        let prefs = Preferences::load(&store, &env);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.locale(), Locale::Fr);
        assert!(prefs.has_explicit_theme());
    }

    #[test]
    fn test_garbage_stored_value_is_ignored() {
        let store = MemoryStore::with(&[("theme", "sepia")]);
        let prefs = Preferences::load(&store, &EnvironmentPreferences::default());
        assert_eq!(prefs.theme(), Theme::Dark);
        assert!(!prefs.has_explicit_theme());
    }

    #[test]
    fn test_environment_updates_until_explicit_choice() {
        let store = MemoryStore::default();
        let mut prefs = Preferences::load(&store, &EnvironmentPreferences::default());

        assert!(prefs.observe_color_scheme(false));
        assert_eq!(prefs.theme(), Theme::Light);
        assert!(!prefs.observe_color_scheme(false));

        prefs.toggle_theme(&store).unwrap();
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("dark"));

        assert!(!prefs.observe_color_scheme(false));
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_locale_persists() {
        let store = MemoryStore::default();
        let mut prefs = Preferences::load(&store, &EnvironmentPreferences::default());
        prefs.toggle_locale(&store).unwrap();
        assert_eq!(prefs.locale(), Locale::En);
        assert_eq!(store.load(LOCALE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_failed_save_still_applies_choice() {
        let mut prefs = Preferences::load(&BrokenStore, &EnvironmentPreferences::default());
        assert!(prefs.set_theme(Theme::Light, &BrokenStore).is_err());
        assert_eq!(prefs.theme(), Theme::Light);
    }
}
