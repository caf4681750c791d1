//! Shared UI crate for the Keefile landing page. Views, the checkout wizard,
//! settings and translations live here; `web` and `desktop` only add routing
//! and the launch configuration.

use dioxus::prelude::*;

pub mod checkout;
pub mod core;
pub mod i18n;
pub mod settings;
pub mod views;

pub mod components {
    // Localized page header (components/app_header.rs)
    pub mod app_header;
    pub use app_header::register_nav;
    pub use app_header::AppHeader;
    pub use app_header::NavBuilder;
}

pub use settings::{use_app_context, use_app_context_provider, AppContext};

/// Shared theme stylesheet as a bundled asset (web).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The same stylesheet embedded at compile time (desktop).
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
