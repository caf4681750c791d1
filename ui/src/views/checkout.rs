use dioxus::prelude::*;

use crate::checkout::{CheckoutWizard, Stepper, WizardSteps};
use crate::components::app_header::home_link;
use crate::settings::use_app_context;
use crate::t;

/// Standalone checkout at `/checkout`. Same wizard as the overlay, shown
/// inline with a progress stepper; the confirmation links back home
/// instead of restarting.
#[component]
pub fn CheckoutPage() -> Element {
    let locale = use_app_context().locale();
    let wizard = use_signal(CheckoutWizard::new);
    let step = wizard.read().step();

    rsx! {
        section { class: "page page-checkout",
            h1 { class: "page-checkout__title", {t!(locale, "checkout-title")} }
            Stepper { current: step }
            div { class: "page-checkout__card",
                WizardSteps {
                    wizard,
                    finish: rsx! {
                        div { class: "checkout-finish",
                            {home_link(&t!(locale, "button-back-home"))}
                        }
                    },
                }
            }
        }
    }
}
