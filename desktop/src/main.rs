#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::Level;

use ui::checkout::CheckoutPanel;
use ui::components::{register_nav, AppHeader, NavBuilder};
use ui::views::{CheckoutPage, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/checkout")]
    CheckoutPage {},
}

const THEME_CSS_INLINE: &str = ui::THEME_CSS_INLINE;

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Keefile v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn init_logging() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "header__link", to: Route::Home {}, "{label}" })
}
fn nav_checkout(label: &str) -> Element {
    rsx!(Link { class: "header__link", to: Route::CheckoutPage {}, "{label}" })
}

#[component]
fn App() -> Element {
    let app = ui::use_app_context_provider();
    register_nav(NavBuilder {
        home: nav_home,
        checkout: nav_checkout,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    let shell_class = format!("app {}", app.theme().css_class());
    let lang = app.language().tag();

    rsx! {
        // No asset folder ships with the desktop app; the theme is compiled in.
        document::Style { "{THEME_CSS_INLINE}" }

        div { class: "{shell_class}", lang: "{lang}",
            Router::<Route> {}
            CheckoutPanel {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared header above the routed page.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}
