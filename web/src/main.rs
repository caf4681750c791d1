use dioxus::prelude::*;
use tracing::Level;

use ui::checkout::CheckoutPanel;
use ui::components::{register_nav, AppHeader, NavBuilder};
use ui::views::{CheckoutPage, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/checkout")]
    CheckoutPage {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "header__link",
        to: Route::Home {},
        "{label}"
    })
}

fn nav_checkout(label: &str) -> Element {
    rsx!(Link {
        class: "header__link",
        to: Route::CheckoutPage {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let app = ui::use_app_context_provider();
    register_nav(NavBuilder {
        home: nav_home,
        checkout: nav_checkout,
    });

    let shell_class = format!("app {}", app.theme().css_class());
    let lang = app.language().tag();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div { class: "{shell_class}", lang: "{lang}",
            Router::<Route> {}
            CheckoutPanel {}
        }
    }
}

/// Web layout: the shared header above the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}
