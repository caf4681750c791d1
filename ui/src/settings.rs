//! Process-wide settings: colour theme, language and the checkout-open flag.
//!
//! The three values live in one [`AppContext`] created at the composition
//! root (`use_app_context_provider`) and handed down through Dioxus context.
//! Components read them through the typed accessors below instead of
//! reaching for globals.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{platform, storage};
use crate::i18n::Locale;

/// Visual theme. Each theme also carries its own audience framing of the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_slug(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    /// Message key for the theme-specific wording of a section,
    /// e.g. `variant_key("hero", "headline")` → `hero-dark-headline`.
    pub fn variant_key(self, section: &str, name: &str) -> String {
        format!("{section}-{}-{name}", self.slug())
    }
}

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    De,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    pub fn toggle(self) -> Self {
        match self {
            Self::De => Self::En,
            Self::En => Self::De,
        }
    }

    /// Short code stored in preferences (`de` / `en`).
    pub fn slug(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Locale folder of the embedded Fluent catalogue.
    pub fn tag(self) -> &'static str {
        match self {
            Self::De => "de-DE",
            Self::En => "en-US",
        }
    }

    /// Uppercase code shown on the language toggle.
    pub fn code(self) -> &'static str {
        match self {
            Self::De => "DE",
            Self::En => "EN",
        }
    }

    /// Accepts bare codes and full tags (`de`, `de-AT`, `en_GB`).
    pub fn from_tag(raw: &str) -> Option<Self> {
        let primary = raw
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "de" => Some(Self::De),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

/// User preferences persisted on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Language,
}

impl Preferences {
    /// Defaults for a first visit: light theme, German when the host's
    /// preferred language is German, English otherwise.
    pub fn detect() -> Self {
        let language = platform::requested_language_tags()
            .first()
            .and_then(|tag| Language::from_tag(tag))
            .filter(|lang| *lang == Language::De)
            .unwrap_or(Language::En);
        Self {
            theme: Theme::Light,
            language,
        }
    }
}

/// Shared settings handle. Cheap to copy; every field is a signal.
#[derive(Clone, Copy, PartialEq)]
pub struct AppContext {
    theme: Signal<Theme>,
    language: Signal<Language>,
    checkout_open: Signal<bool>,
}

impl AppContext {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            theme: Signal::new(prefs.theme),
            language: Signal::new(prefs.language),
            checkout_open: Signal::new(false),
        }
    }

    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn language(&self) -> Language {
        (self.language)()
    }

    pub fn locale(&self) -> Locale {
        Locale::new(self.language())
    }

    pub fn is_checkout_open(&self) -> bool {
        (self.checkout_open)()
    }

    pub fn open_checkout(self) {
        let mut open = self.checkout_open;
        open.set(true);
    }

    pub fn close_checkout(self) {
        let mut open = self.checkout_open;
        open.set(false);
    }

    pub fn toggle_checkout(self) {
        let mut open = self.checkout_open;
        let next = !*open.peek();
        open.set(next);
    }

    pub fn set_theme(self, theme: Theme) {
        let mut signal = self.theme;
        signal.set(theme);
        self.persist();
    }

    pub fn toggle_theme(self) {
        let next = self.theme.peek().toggle();
        self.set_theme(next);
    }

    pub fn set_language(self, language: Language) {
        let mut signal = self.language;
        signal.set(language);
        self.persist();
    }

    pub fn toggle_language(self) {
        let next = self.language.peek().toggle();
        self.set_language(next);
    }

    fn persist(self) {
        let prefs = Preferences {
            theme: *self.theme.peek(),
            language: *self.language.peek(),
        };
        if let Err(err) = storage::save_preferences(&prefs) {
            tracing::warn!("could not persist preferences: {err}");
        }
    }
}

/// Create the [`AppContext`] from stored preferences and provide it to the tree.
pub fn use_app_context_provider() -> AppContext {
    use_context_provider(|| {
        let prefs = storage::load_preferences().unwrap_or_else(|err| {
            tracing::warn!("falling back to default preferences: {err}");
            Preferences::detect()
        });
        tracing::info!(
            platform = platform::Platform::current().as_str(),
            theme = prefs.theme.slug(),
            language = prefs.language.slug(),
            "preferences loaded"
        );
        AppContext::new(prefs)
    })
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_variant_keys_follow_section_theme_name() {
        assert_eq!(Theme::Light.variant_key("hero", "headline"), "hero-light-headline");
        assert_eq!(Theme::Dark.variant_key("benefits", "title"), "benefits-dark-title");
    }

    #[test]
    fn toggles_are_involutions() {
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Language::De.toggle(), Language::En);
        assert_eq!(Language::En.toggle(), Language::De);
    }

    #[test]
    fn language_tags_parse_leniently() {
        assert_eq!(Language::from_tag("de"), Some(Language::De));
        assert_eq!(Language::from_tag("de-AT"), Some(Language::De));
        assert_eq!(Language::from_tag("EN_gb"), Some(Language::En));
        assert_eq!(Language::from_tag("fr-FR"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn preferences_serialise_as_slugs() {
        let prefs = Preferences {
            theme: Theme::Dark,
            language: Language::De,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"theme":"dark","language":"de"}"#);
    }

    #[test]
    fn partial_preferences_fill_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::En);
    }
}
