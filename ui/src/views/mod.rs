mod checkout;
mod home;

pub use checkout::CheckoutPage;
pub use home::{toggle_accordion, ContactForm, Home, BENEFIT_COUNT, FAQ_COUNT, HERO_VARIANT_NAMES};
