use dioxus::prelude::*;

use crate::checkout::UNIT_PRICE;
use crate::core::platform;
use crate::i18n::Locale;
use crate::settings::{use_app_context, Theme};
use crate::t;

/// Number of numbered FAQ entries (`faq-<n>-question` / `faq-<n>-answer`).
pub const FAQ_COUNT: usize = 5;

/// Number of numbered benefit cards (`benefit-<n>-title` / `benefit-<n>-text`).
pub const BENEFIT_COUNT: usize = 3;

/// Hero lines that change with the theme's audience framing.
pub const HERO_VARIANT_NAMES: [&str; 3] = ["headline", "subheadline", "description"];

#[component]
pub fn Home() -> Element {
    let app = use_app_context();
    let locale = app.locale();
    let theme = app.theme();

    rsx! {
        div { class: "page page-home",
            Hero { locale, theme }
            Benefits { locale, theme }
            Faq { locale }
            section { id: "contact", class: "section contact",
                h2 { class: "section__title", {t!(locale, "contact-title")} }
                p { class: "section__lead", {t!(locale, "contact-lead")} }
                ContactForm {}
            }
            Footer { locale }
        }
    }
}

#[component]
fn Hero(locale: Locale, theme: Theme) -> Element {
    let app = use_app_context();
    let [headline, subheadline, description] =
        HERO_VARIANT_NAMES.map(|name| locale.t(&theme.variant_key("hero", name)));
    let price = UNIT_PRICE.to_string();

    rsx! {
        section { class: "hero",
            div { class: "hero__content",
                p { class: "hero__eyebrow", {t!(locale, "hero-eyebrow")} }
                h1 { class: "hero__headline", "{headline}" }
                p { class: "hero__subheadline", "{subheadline}" }
                p { class: "hero__description", "{description}" }
                div { class: "hero__actions",
                    button {
                        class: "button button--primary button--large",
                        onclick: move |_| app.open_checkout(),
                        {t!(locale, "hero-cta")}
                    }
                    span { class: "hero__price",
                        {t!(locale, "hero-price", price = price)}
                    }
                }
                p { class: "hero__note", {t!(locale, "hero-shipping-note")} }
            }
            div { class: "hero__visual", aria_hidden: "true",
                div { class: "hero__unit hero__unit--bronze" }
                div { class: "hero__unit hero__unit--black" }
            }
        }
    }
}

#[component]
fn Benefits(locale: Locale, theme: Theme) -> Element {
    let title = locale.t(&theme.variant_key("benefits", "title"));

    rsx! {
        section { class: "section benefits",
            h2 { class: "section__title", "{title}" }
            div { class: "benefits__grid",
                for n in 1..=BENEFIT_COUNT {
                    article { key: "{n}", class: "benefit",
                        h3 { class: "benefit__title", {locale.t(&format!("benefit-{n}-title"))} }
                        p { class: "benefit__text", {locale.t(&format!("benefit-{n}-text"))} }
                    }
                }
            }
        }
    }
}

/// Next open accordion item after `clicked` was pressed. At most one item
/// is open; pressing the open one closes it.
pub fn toggle_accordion(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
fn Faq(locale: Locale) -> Element {
    let mut open = use_signal(|| None::<usize>);

    rsx! {
        section { id: "faq", class: "section faq",
            h2 { class: "section__title", {t!(locale, "faq-title")} }
            div { class: "faq__items",
                for n in 1..=FAQ_COUNT {
                    div {
                        key: "{n}",
                        class: if open() == Some(n) { "faq__item faq__item--open" } else { "faq__item" },
                        button {
                            class: "faq__question",
                            aria_expanded: if open() == Some(n) { "true" } else { "false" },
                            onclick: move |_| {
                                let next = toggle_accordion(*open.peek(), n);
                                open.set(next);
                            },
                            span { {locale.t(&format!("faq-{n}-question"))} }
                            span { class: "faq__icon", aria_hidden: "true",
                                if open() == Some(n) { "−" } else { "+" }
                            }
                        }
                        if open() == Some(n) {
                            p { class: "faq__answer", {locale.t(&format!("faq-{n}-answer"))} }
                        }
                    }
                }
            }
        }
    }
}

/// Contact form. Nothing is sent: submitting thanks the visitor through a
/// blocking alert and clears the fields.
#[component]
pub fn ContactForm() -> Element {
    let locale = use_app_context().locale();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::info!(chars = message.peek().len(), "contact form submitted");
        platform::alert(&t!(locale, "contact-thanks", name = name.peek().trim().to_string()));
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    rsx! {
        form { class: "contact-form", onsubmit: on_submit,
            div { class: "form-row",
                div { class: "field",
                    label { class: "field__label", r#for: "contact-name", {t!(locale, "contact-name")} }
                    input {
                        id: "contact-name",
                        class: "field__input",
                        r#type: "text",
                        required: true,
                        value: "{name}",
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { class: "field__label", r#for: "contact-email", {t!(locale, "contact-email")} }
                    input {
                        id: "contact-email",
                        class: "field__input",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
            }
            div { class: "field",
                label { class: "field__label", r#for: "contact-message", {t!(locale, "contact-message")} }
                textarea {
                    id: "contact-message",
                    class: "field__input field__input--multiline",
                    rows: "5",
                    required: true,
                    value: "{message}",
                    oninput: move |evt: FormEvent| message.set(evt.value()),
                }
            }
            button { class: "button button--primary", r#type: "submit", {t!(locale, "contact-submit")} }
        }
    }
}

#[component]
fn Footer(locale: Locale) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                span { class: "footer__brand", {t!(locale, "brand-name")} }
                span { class: "footer__tagline", {t!(locale, "footer-tagline")} }
                span { class: "footer__legal", {t!(locale, "footer-rights")} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_keeps_at_most_one_item_open() {
        assert_eq!(toggle_accordion(None, 2), Some(2));
        assert_eq!(toggle_accordion(Some(2), 4), Some(4));
        assert_eq!(toggle_accordion(Some(4), 4), None);
    }

    #[test]
    fn hero_shipping_note_matches_free_shipping() {
        use crate::checkout::order::{shipping_cost, Cents};
        use crate::settings::Language;

        assert_eq!(shipping_cost(), Cents::ZERO);
        assert_eq!(t!(Locale::new(Language::En), "hero-shipping-note"), "Shipping is always free.");
        assert_eq!(t!(Locale::new(Language::De), "hero-shipping-note"), "Versand immer kostenlos.");
    }
}
