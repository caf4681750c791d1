use crate::core::platform;
use crate::settings::{use_app_context, Theme};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Router links supplied by the platform crate.
///
/// `ui` does not know the `Route` enum of `web` or `desktop`, so each
/// platform registers closures that build a `Link` around the given label.
/// Without a registration plain anchors are rendered instead.
///
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "header__link", to: Route::Home {}, "{label}" } ),
///     checkout: |label| rsx!( Link { class: "header__link", to: Route::CheckoutPage {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub checkout: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

pub(crate) fn home_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.home)(label),
        None => rsx! { a { class: "header__link", href: "/", "{label}" } },
    }
}

pub(crate) fn checkout_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.checkout)(label),
        None => rsx! { a { class: "header__link", href: "/checkout", "{label}" } },
    }
}

#[component]
pub fn AppHeader() -> Element {
    let app = use_app_context();
    let locale = app.locale();
    let language_code = app.language().code();
    let (theme_icon, theme_label) = match app.theme() {
        Theme::Light => ("☾", t!(locale, "nav-theme-dark")),
        Theme::Dark => ("☀", t!(locale, "nav-theme-light")),
    };

    rsx! {
        header { id: "header", class: "header",
            div { class: "header__inner",
                div { class: "header__brand",
                    span { class: "header__brand-mark", aria_hidden: "true" }
                    span { class: "header__brand-name", {t!(locale, "brand-name")} }
                }

                nav { class: "header__nav",
                    {home_link(&t!(locale, "nav-home"))}
                    button {
                        class: "header__link",
                        onclick: move |_| platform::scroll_to_section("faq"),
                        {t!(locale, "nav-faq")}
                    }
                    button {
                        class: "header__link",
                        onclick: move |_| platform::scroll_to_section("contact"),
                        {t!(locale, "nav-contact")}
                    }
                    {checkout_link(&t!(locale, "nav-checkout"))}
                }

                div { class: "header__actions",
                    button {
                        class: "header__toggle",
                        title: t!(locale, "nav-language-toggle"),
                        aria_label: t!(locale, "nav-language-toggle"),
                        onclick: move |_| app.toggle_language(),
                        "{language_code}"
                    }
                    button {
                        class: "header__toggle",
                        title: "{theme_label}",
                        aria_label: "{theme_label}",
                        onclick: move |_| app.toggle_theme(),
                        "{theme_icon}"
                    }
                    button {
                        class: "button button--primary header__cta",
                        onclick: move |_| app.open_checkout(),
                        {t!(locale, "nav-preorder")}
                    }
                }
            }
        }
    }
}
