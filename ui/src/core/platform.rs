//! Platform detection helpers and small bridges into the host document.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Language tags the host environment prefers, most preferred first.
#[cfg(target_arch = "wasm32")]
pub fn requested_language_tags() -> Vec<String> {
    i18n_embed::WebLanguageRequester::requested_languages()
        .into_iter()
        .map(|lang| lang.to_string())
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn requested_language_tags() -> Vec<String> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
        .into_iter()
        .map(|lang| lang.to_string())
        .collect()
}

/// Show a blocking `alert()` dialog in the host document.
pub fn alert(message: &str) {
    let literal = match serde_json::to_string(message) {
        Ok(literal) => literal,
        Err(err) => {
            tracing::warn!("alert message could not be encoded: {err}");
            return;
        }
    };
    let _ = document::eval(&format!("alert({literal});"));
}

/// Smoothly scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let Ok(literal) = serde_json::to_string(id) else {
        return;
    };
    let _ = document::eval(&format!(
        "document.getElementById({literal})?.scrollIntoView({{ behavior: 'smooth' }});"
    ));
}
