//! Internationalization (i18n) support for `keefile-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/keefile-ui.ftl   (fallback/reference)
//!   de-DE/keefile-ui.ftl
//! ```
//!
//! Unlike a single global loader, each [`Language`] gets its own
//! `FluentLanguageLoader`, built once. The language in effect is never
//! global state: callers hold a [`Locale`] (usually from
//! `AppContext::locale()`) and look keys up through it.
//!
//! ```ignore
//! let locale = use_app_context().locale();
//! let title = t!(locale, "checkout-title");
//! let label = t!(locale, "set-label", index = 2);
//! ```
//!
//! Lookup order: the locale's own catalogue, then English, then the raw key.
//! Language-neutral strings (brand and payment provider names) only live in
//! the English file and reach German through that fallback.
use std::collections::HashMap;

use fluent::FluentValue;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::settings::Language;

/// Translation macro taking the [`Locale`] explicitly.
/// Examples:
///     t!(locale, "nav-faq")
///     t!(locale, "set-label", index = 2)
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $locale.t($key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $locale.t_args($key, &[ $( (stringify!($arg), ($value).to_string()) ),+ ])
    };
}

/// Fluent "domain" (matches the crate / the FTL filename).
const DOMAIN: &str = "keefile-ui";

/// Keys defined only in the English catalogue; other locales reach them
/// through the fallback.
pub const LANGUAGE_NEUTRAL_KEYS: &[&str] = &[
    "brand-name",
    "payment-method-paypal",
    "payment-method-apple-pay",
];

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

struct Catalog {
    german: FluentLanguageLoader,
    english: FluentLanguageLoader,
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    german: loader_for(Language::De),
    english: loader_for(Language::En),
});

impl Catalog {
    fn loader(&self, language: Language) -> &FluentLanguageLoader {
        match language {
            Language::De => &self.german,
            Language::En => &self.english,
        }
    }
}

fn loader_for(language: Language) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = Language::En
        .tag()
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);

    match language.tag().parse::<LanguageIdentifier>() {
        Ok(requested) => {
            if let Err(err) = i18n_embed::select(&loader, &Localizations, &[requested]) {
                tracing::warn!(
                    "[i18n] failed loading {} ({err}); continuing with fallback",
                    language.tag()
                );
            }
        }
        Err(err) => tracing::warn!("[i18n] invalid language tag {}: {err}", language.tag()),
    }
    // Only applies to bundles that are already loaded, so it must follow `select`.
    loader.set_use_isolating(false);
    loader
}

/// Handle for looking up messages in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up `key`; falls back to English, then to the key itself.
    pub fn t(&self, key: &str) -> String {
        match self.loader_with(key) {
            Some(loader) => loader.get(key),
            None => key.to_string(),
        }
    }

    /// Look up `key` and substitute Fluent placeables from `args`.
    pub fn t_args(&self, key: &str, args: &[(&str, String)]) -> String {
        let Some(loader) = self.loader_with(key) else {
            return key.to_string();
        };
        let values: HashMap<&str, FluentValue<'_>> = args
            .iter()
            .map(|(name, value)| (*name, FluentValue::from(value.as_str())))
            .collect();
        loader.get_args(key, values)
    }

    fn loader_with(&self, key: &str) -> Option<&'static FluentLanguageLoader> {
        let found = [self.language, Language::En]
            .into_iter()
            .map(|language| CATALOG.loader(language))
            .find(|loader| loader.has(key));
        if found.is_none() {
            tracing::debug!("[i18n] missing key {key}");
        }
        found
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "de-DE"));
    }

    #[test]
    fn lookups_follow_the_locale() {
        assert_eq!(Locale::new(Language::En).t("nav-faq"), "FAQ");
        assert_eq!(Locale::new(Language::En).t("nav-contact"), "Contact");
        assert_eq!(Locale::new(Language::De).t("nav-contact"), "Kontakt");
    }

    #[test]
    fn language_neutral_keys_fall_back_to_english() {
        assert_eq!(Locale::new(Language::De).t("brand-name"), "Keefile");
    }

    #[test]
    fn unknown_keys_come_back_verbatim() {
        assert_eq!(Locale::new(Language::De).t("no-such-key"), "no-such-key");
        assert_eq!(
            Locale::new(Language::En).t_args("no-such-key", &[("index", "1".into())]),
            "no-such-key"
        );
    }

    #[test]
    fn placeables_are_substituted() {
        let locale = Locale::new(Language::En);
        assert_eq!(t!(locale, "set-label", index = 3), "Set 3");
        assert_eq!(Locale::new(Language::De).t_args("set-label", &[("index", "2".into())]), "Set 2");
    }

    #[test]
    fn placeables_carry_no_bidi_isolation_marks() {
        for language in [Language::En, Language::De] {
            let text = t!(Locale::new(language), "step-counter", current = 2, total = 4);
            assert!(!text.contains(['\u{2068}', '\u{2069}']), "{text:?}");
            assert!(text.contains("2") && text.contains("4"), "{text:?}");
        }
        assert_eq!(
            t!(Locale::new(Language::De), "step-counter", current = 2, total = 4),
            "Schritt 2 von 4"
        );
    }
}
