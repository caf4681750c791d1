use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::confirmation::ShareTarget;
use super::order::{unit_number, UnitColor, UnitSlot};
use super::payment::{CardField, PaymentMethod, PaymentPanel};
use super::scroll_lock::{DocumentScroll, ScrollLock};
use super::shipping::{ShippingField, COUNTRIES};
use super::validation::{FieldError, FormField};
use super::wizard::{CheckoutWizard, Step, Transition};
use crate::core::format::format_unit_number;
use crate::core::platform;
use crate::i18n::Locale;
use crate::settings::use_app_context;
use crate::t;

// Checkout stylesheet (linked for web/dev, inlined for release desktop)
const CHECKOUT_CSS: Asset = asset!("/assets/styling/checkout.css");
const CHECKOUT_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/checkout.css"
));

/// Anchor scrolled to whenever the wizard changes step.
const STEPS_ANCHOR: &str = "checkout-steps";

/// Overlay variant of the checkout.
///
/// Visibility is owned by [`AppContext`](crate::settings::AppContext); the
/// panel only reacts to it. The page scroll lock follows that flag and is
/// released again when the panel unmounts.
#[component]
pub fn CheckoutPanel() -> Element {
    let app = use_app_context();
    let locale = app.locale();
    let mut wizard = use_signal(CheckoutWizard::new);
    let lock = use_hook(|| Rc::new(RefCell::new(ScrollLock::new(DocumentScroll))));

    {
        let lock = lock.clone();
        use_effect(move || {
            let visible = app.is_checkout_open();
            lock.borrow_mut().sync(visible);
        });
    }
    use_drop(move || {
        lock.borrow_mut().release();
    });

    let title = t!(locale, "checkout-title");

    rsx! {
        document::Link { rel: "stylesheet", href: CHECKOUT_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{CHECKOUT_CSS_INLINE}" }
        }

        if app.is_checkout_open() {
            div { class: "checkout-overlay",
                div {
                    class: "checkout-overlay__backdrop",
                    onclick: move |_| app.close_checkout(),
                }
                aside {
                    class: "checkout-panel",
                    role: "dialog",
                    aria_modal: "true",
                    aria_label: "{title}",
                    header { class: "checkout-panel__header",
                        h2 { class: "checkout-panel__title", "{title}" }
                        button {
                            class: "checkout-panel__close",
                            aria_label: t!(locale, "checkout-close"),
                            onclick: move |_| app.close_checkout(),
                            "×"
                        }
                    }
                    WizardSteps {
                        wizard,
                        finish: rsx! {
                            button {
                                class: "button button--primary checkout-finish",
                                onclick: move |_| {
                                    wizard.write().continue_shopping();
                                    app.close_checkout();
                                },
                                {t!(locale, "button-continue-shopping")}
                            }
                        },
                    }
                }
            }
        }
    }
}

/// Numbered progress indicator for the standalone checkout page.
#[component]
pub fn Stepper(current: Step) -> Element {
    let locale = use_app_context().locale();

    rsx! {
        ol { class: "stepper",
            for step in Step::ALL {
                li {
                    class: format!(
                        "stepper__item {}",
                        step.status_relative_to(current).css_modifier()
                    ),
                    aria_current: if step == current { "step" } else { "false" },
                    span { class: "stepper__number", {step.number().to_string()} }
                    span { class: "stepper__title", {locale.t(step.title_key())} }
                }
            }
        }
    }
}

/// Renders the active step of `wizard` plus back/continue navigation.
/// `finish` is shown under the confirmation in place of the navigation.
#[component]
pub fn WizardSteps(mut wizard: Signal<CheckoutWizard>, finish: Element) -> Element {
    let locale = use_app_context().locale();
    let step = wizard.read().step();

    let body = match step {
        Step::Order => rsx! { OrderStep { wizard } },
        Step::Shipping => rsx! { ShippingStep { wizard } },
        Step::Payment => rsx! { PaymentStep { wizard } },
        Step::Confirmation => rsx! {
            ConfirmationStep { wizard }
            {finish}
        },
    };

    let next_label = if step == Step::Payment {
        t!(locale, "button-place-order")
    } else {
        t!(locale, "button-continue")
    };

    rsx! {
        div { id: STEPS_ANCHOR, class: "checkout-steps",
            p { class: "checkout-steps__counter",
                {t!(locale, "step-counter", current = step.number(), total = Step::ALL.len())}
            }
            {body}

            if step != Step::Confirmation {
                div { class: "checkout-nav",
                    if step != Step::Order {
                        button {
                            class: "button button--ghost",
                            onclick: move |_| {
                                if let Transition::Moved(_) = wizard.write().back() {
                                    platform::scroll_to_section(STEPS_ANCHOR);
                                }
                            },
                            {t!(locale, "button-back")}
                        }
                    }
                    button {
                        class: "button button--primary",
                        onclick: move |_| {
                            if let Transition::Moved(_) = wizard.write().next() {
                                platform::scroll_to_section(STEPS_ANCHOR);
                            }
                        },
                        "{next_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn OrderStep(mut wizard: Signal<CheckoutWizard>) -> Element {
    let locale = use_app_context().locale();
    let (quantity, sets, total, unit_price) = {
        let w = wizard.read();
        (
            w.order().quantity(),
            w.order().color_sets().to_vec(),
            w.total(),
            w.unit_price(),
        )
    };
    let count = quantity.get();

    rsx! {
        section { class: "checkout-step checkout-step--order",
            h3 { class: "checkout-step__title", {t!(locale, "order-heading")} }
            p { class: "checkout-step__lead", {t!(locale, "order-lead")} }

            div { class: "quantity",
                span { class: "quantity__label", {t!(locale, "order-quantity")} }
                div { class: "quantity__controls",
                    button {
                        class: "quantity__button",
                        disabled: quantity.is_min(),
                        aria_label: t!(locale, "order-decrease"),
                        onclick: move |_| wizard.write().decrement_quantity(),
                        "−"
                    }
                    span { class: "quantity__value", "{count}" }
                    button {
                        class: "quantity__button",
                        disabled: quantity.is_max(),
                        aria_label: t!(locale, "order-increase"),
                        onclick: move |_| wizard.write().increment_quantity(),
                        "+"
                    }
                }
            }

            ul { class: "color-sets",
                for (index, set) in sets.into_iter().enumerate() {
                    li { key: "{index}", class: "color-set",
                        span { class: "color-set__label", {t!(locale, "set-label", index = index + 1)} }
                        for slot in UnitSlot::ALL {
                            div { class: "color-set__unit",
                                span { class: "color-set__unit-label",
                                    {t!(locale, "unit-label", number = format_unit_number(unit_number(index, slot)))}
                                }
                                div { class: "swatches",
                                    for color in UnitColor::ALL {
                                        button {
                                            class: if set.get(slot) == color { "swatch swatch--selected" } else { "swatch" },
                                            style: format!("background-color: {}", color.swatch_hex()),
                                            title: locale.t(color.label_key()),
                                            aria_label: locale.t(color.label_key()),
                                            aria_pressed: if set.get(slot) == color { "true" } else { "false" },
                                            onclick: move |_| wizard.write().set_unit_color(index, slot, color),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            dl { class: "price-summary",
                div { class: "price-summary__row",
                    dt { {t!(locale, "order-unit-price")} }
                    dd { "{unit_price}" }
                }
                div { class: "price-summary__row",
                    dt { {t!(locale, "order-shipping")} }
                    dd { class: "price-summary__free", {t!(locale, "order-shipping-free")} }
                }
                div { class: "price-summary__row price-summary__row--total",
                    dt { {t!(locale, "order-total")} }
                    dd { "{total}" }
                }
            }
        }
    }
}

#[component]
fn ShippingStep(wizard: Signal<CheckoutWizard>) -> Element {
    let locale = use_app_context().locale();
    let (address, errors) = {
        let w = wizard.read();
        (w.shipping().clone(), w.shipping_errors().clone())
    };
    let input = |field: ShippingField| {
        form_input(
            locale,
            field,
            address.get(field),
            errors.get(field),
            move |value| {
                let mut wizard = wizard;
                wizard.write().update_shipping(field, value);
            },
        )
    };
    let country = address.country.clone();
    let country_error = errors
        .get(ShippingField::Country)
        .map(|err| locale.t(&err.message_key(ShippingField::Country)));
    let country_invalid = country_error.is_some();

    rsx! {
        section { class: "checkout-step checkout-step--shipping",
            h3 { class: "checkout-step__title", {t!(locale, "shipping-heading")} }
            div { class: "form-row",
                {input(ShippingField::FirstName)}
                {input(ShippingField::LastName)}
            }
            {input(ShippingField::Email)}
            {input(ShippingField::Street)}
            {input(ShippingField::Apt)}
            div { class: "form-row",
                {input(ShippingField::City)}
                {input(ShippingField::PostalCode)}
            }
            div { class: field_class(country_invalid),
                label { class: "field__label", r#for: "shipping-country",
                    {locale.t(ShippingField::Country.label_key())}
                    span { class: "field__required", aria_hidden: "true", " *" }
                }
                select {
                    id: "shipping-country",
                    class: "field__input",
                    value: "{country}",
                    onchange: move |evt: FormEvent| {
                        let mut wizard = wizard;
                        wizard.write().update_shipping(ShippingField::Country, evt.value());
                    },
                    for name in COUNTRIES.iter().copied() {
                        option { key: "{name}", value: "{name}", selected: name == country, "{name}" }
                    }
                }
                if let Some(message) = &country_error {
                    p { class: "field__error", role: "alert", "{message}" }
                }
            }
        }
    }
}

#[component]
fn PaymentStep(mut wizard: Signal<CheckoutWizard>) -> Element {
    let locale = use_app_context().locale();
    let mut summary_open = use_signal(|| false);
    let (selection, errors, total, sets, units) = {
        let w = wizard.read();
        (
            w.payment().clone(),
            w.payment_errors().clone(),
            w.total(),
            w.order().quantity().get(),
            w.order().unit_count(),
        )
    };

    // Single dispatch point for the method-specific fragment.
    let panel = match selection.method.panel() {
        PaymentPanel::CardForm => rsx! {
            div { class: "card-form",
                for field in CardField::ALL {
                    {form_input(
                        locale,
                        field,
                        selection.card.get(field),
                        errors.get(field),
                        move |value| {
                            let mut wizard = wizard;
                            wizard.write().update_card(field, value);
                        },
                    )}
                }
            }
        },
        PaymentPanel::Redirect { notice_key } => rsx! {
            p { class: "payment-notice", {locale.t(notice_key)} }
        },
    };

    rsx! {
        section { class: "checkout-step checkout-step--payment",
            h3 { class: "checkout-step__title", {t!(locale, "payment-heading")} }

            div { class: "order-summary",
                button {
                    class: "order-summary__toggle",
                    aria_expanded: if summary_open() { "true" } else { "false" },
                    onclick: move |_| summary_open.set(!summary_open()),
                    if summary_open() {
                        {t!(locale, "payment-summary-hide")}
                    } else {
                        {t!(locale, "payment-summary-show")}
                    }
                    span { class: "order-summary__total", "{total}" }
                }
                if summary_open() {
                    dl { class: "order-summary__details",
                        dt { {t!(locale, "confirmation-sets")} }
                        dd { "{sets}" }
                        dt { {t!(locale, "confirmation-units")} }
                        dd { "{units}" }
                        dt { {t!(locale, "order-total")} }
                        dd { "{total}" }
                    }
                }
            }

            div { class: "payment-methods", role: "radiogroup",
                for method in PaymentMethod::ALL {
                    button {
                        class: if method == selection.method { "payment-method payment-method--selected" } else { "payment-method" },
                        role: "radio",
                        aria_checked: if method == selection.method { "true" } else { "false" },
                        onclick: move |_| wizard.write().select_payment_method(method),
                        {locale.t(method.label_key())}
                    }
                }
            }

            {panel}

            p { class: "payment-trust", {t!(locale, "payment-trust")} }
        }
    }
}

#[component]
fn ConfirmationStep(wizard: Signal<CheckoutWizard>) -> Element {
    let locale = use_app_context().locale();
    let (summary, email) = {
        let w = wizard.read();
        (w.summary(), w.shipping().email.clone())
    };
    let Some(summary) = summary else {
        return rsx! {};
    };

    let order_number = summary.order_number.to_string();
    let unit_count = summary.unit_count;
    let total = summary.total;

    rsx! {
        section { class: "checkout-step checkout-step--confirmation",
            div { class: "confirmation__badge", aria_hidden: "true", "✓" }
            h3 { class: "checkout-step__title", {t!(locale, "confirmation-heading")} }
            p { class: "confirmation__thanks", {t!(locale, "confirmation-thanks", email = email)} }

            dl { class: "confirmation__details",
                dt { {t!(locale, "confirmation-order-number")} }
                dd { class: "confirmation__order-number", "{order_number}" }
                dt { {t!(locale, "confirmation-units")} }
                dd { "{unit_count}" }
                dt { {t!(locale, "confirmation-total")} }
                dd { "{total}" }
                dt { {t!(locale, "confirmation-delivery")} }
                dd { {locale.t(summary.delivery_key)} }
            }

            ul { class: "confirmation__sets",
                for (index, set) in summary.color_sets.iter().enumerate() {
                    li { key: "{index}",
                        {t!(locale, "set-label", index = index + 1)}
                        ": "
                        {locale.t(set.first.label_key())}
                        " / "
                        {locale.t(set.second.label_key())}
                    }
                }
            }

            div { class: "share",
                p { class: "share__heading", {t!(locale, "share-heading")} }
                div { class: "share__buttons",
                    for target in ShareTarget::ALL {
                        button {
                            r#type: "button",
                            class: "button button--ghost share__button",
                            {locale.t(target.label_key())}
                        }
                    }
                }
            }
        }
    }
}

fn field_class(invalid: bool) -> &'static str {
    if invalid {
        "field field--invalid"
    } else {
        "field"
    }
}

/// Text input bound to one field of a validated form.
fn form_input<F: InputField>(
    locale: Locale,
    field: F,
    value: &str,
    error: Option<FieldError>,
    on_edit: impl FnMut(String) + 'static,
) -> Element {
    rsx! {
        TextField {
            id: format!("field-{}", field.slug()),
            label: locale.t(field.label_key()),
            value: value.to_string(),
            placeholder: field.placeholder().to_string(),
            input_type: field.input_type().to_string(),
            required: field.is_required(),
            error: error.map(|err| locale.t(&err.message_key(field))),
            oninput: on_edit,
        }
    }
}

/// Presentation hooks shared by shipping and card fields.
trait InputField: FormField {
    fn label_key(self) -> &'static str;
    fn placeholder(self) -> &'static str;
    fn input_type(self) -> &'static str {
        "text"
    }
    fn is_required(self) -> bool {
        true
    }
}

impl InputField for ShippingField {
    fn label_key(self) -> &'static str {
        ShippingField::label_key(self)
    }
    fn placeholder(self) -> &'static str {
        ShippingField::placeholder(self)
    }
    fn input_type(self) -> &'static str {
        ShippingField::input_type(self)
    }
    fn is_required(self) -> bool {
        ShippingField::is_required(self)
    }
}

impl InputField for CardField {
    fn label_key(self) -> &'static str {
        CardField::label_key(self)
    }
    fn placeholder(self) -> &'static str {
        CardField::placeholder(self)
    }
    fn input_type(self) -> &'static str {
        match self {
            CardField::Number | CardField::Expiry | CardField::Cvc => "tel",
            CardField::Name => "text",
        }
    }
}

#[component]
fn TextField(
    id: String,
    label: String,
    value: String,
    placeholder: String,
    input_type: String,
    required: bool,
    #[props(!optional)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div { class: field_class(invalid),
            label { class: "field__label", r#for: "{id}",
                "{label}"
                if required {
                    span { class: "field__required", aria_hidden: "true", " *" }
                }
            }
            input {
                id: "{id}",
                class: "field__input",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                aria_invalid: if invalid { "true" } else { "false" },
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                p { class: "field__error", role: "alert", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::shipping::{validate, ShippingAddress};
    use crate::settings::Language;

    #[test]
    fn country_error_marks_field_invalid_and_keeps_message() {
        let locale = Locale::new(Language::En);
        let address = ShippingAddress {
            country: String::new(),
            ..ShippingAddress::default()
        };
        let errors = validate(&address, Default::default());
        let country_error = errors
            .get(ShippingField::Country)
            .map(|err| locale.t(&err.message_key(ShippingField::Country)));

        assert_eq!(field_class(country_error.is_some()), "field field--invalid");
        assert!(country_error.is_some_and(|message| !message.is_empty()));
        assert_eq!(field_class(false), "field");
    }
}
