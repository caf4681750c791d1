//! The four-step checkout controller.
//!
//! ```text
//!  Order --(always)--> Shipping --(shipping valid)--> Payment --(payment valid)--> Confirmation
//!    ^                    |                              |
//!    +-----(back)---------+                              |
//!                         ^-----------(back)-------------+
//! ```
//!
//! Only `next()` and `back()` move between steps; `continue_shopping()`
//! leaves the confirmation according to the configured [`ResetPolicy`].

use super::confirmation::{ConfirmationSummary, OrderNumber, DEFAULT_ORDER_PREFIX};
use super::order::{Cents, OrderConfig, UnitColor, UnitSlot, UNIT_PRICE};
use super::payment::{self, CardField, PaymentMethod, PaymentSelection};
use super::shipping::{self, ShippingAddress, ShippingField};
use super::validation::{EmailPolicy, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Order = 1,
    Shipping = 2,
    Payment = 3,
    Confirmation = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Order, Step::Shipping, Step::Payment, Step::Confirmation];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Self::Order => "step-order",
            Self::Shipping => "step-shipping",
            Self::Payment => "step-payment",
            Self::Confirmation => "step-confirmation",
        }
    }

    /// Where this step sits relative to `current`, for the progress stepper.
    pub fn status_relative_to(self, current: Step) -> StepStatus {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

impl StepStatus {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Completed => "stepper__item--completed",
            Self::Active => "stepper__item--active",
            Self::Upcoming => "stepper__item--upcoming",
        }
    }
}

/// What leaving the confirmation does to the entered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Start over with a fresh order.
    #[default]
    Full,
    /// Return to the first step but keep every field as entered.
    StepOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub unit_price: Cents,
    pub email_policy: EmailPolicy,
    pub reset_policy: ResetPolicy,
    pub order_prefix: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            unit_price: UNIT_PRICE,
            email_policy: EmailPolicy::default(),
            reset_policy: ResetPolicy::default(),
            order_prefix: DEFAULT_ORDER_PREFIX.to_string(),
        }
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved(Step),
    /// Validation failed; the error map of the current step is populated.
    Blocked,
    /// No edge leaves the current step in that direction.
    Stayed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutWizard {
    config: CheckoutConfig,
    step: Step,
    order: OrderConfig,
    shipping: ShippingAddress,
    shipping_errors: FieldErrors<ShippingField>,
    payment: PaymentSelection,
    payment_errors: FieldErrors<CardField>,
    order_number: Option<OrderNumber>,
}

impl Default for CheckoutWizard {
    fn default() -> Self {
        Self::with_config(CheckoutConfig::default())
    }
}

impl CheckoutWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CheckoutConfig) -> Self {
        Self {
            config,
            step: Step::Order,
            order: OrderConfig::default(),
            shipping: ShippingAddress::default(),
            shipping_errors: FieldErrors::new(),
            payment: PaymentSelection::default(),
            payment_errors: FieldErrors::new(),
            order_number: None,
        }
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn order(&self) -> &OrderConfig {
        &self.order
    }

    pub fn shipping(&self) -> &ShippingAddress {
        &self.shipping
    }

    pub fn shipping_errors(&self) -> &FieldErrors<ShippingField> {
        &self.shipping_errors
    }

    pub fn payment(&self) -> &PaymentSelection {
        &self.payment
    }

    pub fn payment_errors(&self) -> &FieldErrors<CardField> {
        &self.payment_errors
    }

    pub fn order_number(&self) -> Option<&OrderNumber> {
        self.order_number.as_ref()
    }

    pub fn total(&self) -> Cents {
        self.order.total(self.config.unit_price)
    }

    pub fn unit_price(&self) -> Cents {
        self.config.unit_price
    }

    /// Available once the confirmation step is reached.
    pub fn summary(&self) -> Option<ConfirmationSummary> {
        if self.step != Step::Confirmation {
            return None;
        }
        self.order_number
            .clone()
            .map(|number| ConfirmationSummary::new(number, &self.order, self.config.unit_price))
    }

    // --- step 1 -----------------------------------------------------------

    pub fn set_quantity(&mut self, n: i64) {
        self.order.set_quantity(n);
    }

    pub fn increment_quantity(&mut self) {
        self.order.increment();
    }

    pub fn decrement_quantity(&mut self) {
        self.order.decrement();
    }

    pub fn set_unit_color(&mut self, set_index: usize, slot: UnitSlot, color: UnitColor) {
        self.order.set_unit_color(set_index, slot, color);
    }

    // --- step 2 -----------------------------------------------------------

    /// Store a field value and drop any error currently shown on it.
    pub fn update_shipping(&mut self, field: ShippingField, value: impl Into<String>) {
        self.shipping.set(field, value);
        self.shipping_errors.clear(field);
    }

    /// Re-run the shipping rules and keep the resulting error map.
    pub fn validate_shipping(&mut self) -> bool {
        self.shipping_errors = shipping::validate(&self.shipping, self.config.email_policy);
        self.shipping_errors.is_empty()
    }

    // --- step 3 -----------------------------------------------------------

    /// Switch payment method. Card details survive; shown errors do not.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment.method = method;
        self.payment_errors.clear_all();
    }

    pub fn update_card(&mut self, field: CardField, value: impl Into<String>) {
        self.payment.card.set(field, value);
        self.payment_errors.clear(field);
    }

    pub fn validate_payment(&mut self) -> bool {
        self.payment_errors = payment::validate(&self.payment);
        self.payment_errors.is_empty()
    }

    // --- navigation -------------------------------------------------------

    pub fn next(&mut self) -> Transition {
        let target = match self.step {
            Step::Order => Step::Shipping,
            Step::Shipping => {
                if !self.validate_shipping() {
                    tracing::debug!(errors = self.shipping_errors.len(), "shipping step blocked");
                    return Transition::Blocked;
                }
                Step::Payment
            }
            Step::Payment => {
                if !self.validate_payment() {
                    tracing::debug!(errors = self.payment_errors.len(), "payment step blocked");
                    return Transition::Blocked;
                }
                Step::Confirmation
            }
            Step::Confirmation => return Transition::Stayed,
        };

        self.step = target;
        if target == Step::Confirmation {
            let prefix = self.config.order_prefix.clone();
            let number = self
                .order_number
                .get_or_insert_with(|| OrderNumber::generate(&prefix));
            tracing::info!(
                order = %number,
                sets = self.order.quantity().get(),
                method = self.payment.method.slug(),
                "order placed"
            );
        } else {
            tracing::debug!(step = target.number(), "checkout advanced");
        }
        Transition::Moved(target)
    }

    pub fn back(&mut self) -> Transition {
        let target = match self.step {
            Step::Shipping => Step::Order,
            Step::Payment => Step::Shipping,
            Step::Order | Step::Confirmation => return Transition::Stayed,
        };
        self.step = target;
        tracing::debug!(step = target.number(), "checkout went back");
        Transition::Moved(target)
    }

    /// Leave the confirmation for a new order.
    pub fn continue_shopping(&mut self) -> Transition {
        if self.step != Step::Confirmation {
            return Transition::Stayed;
        }
        match self.config.reset_policy {
            ResetPolicy::Full => {
                *self = Self::with_config(self.config.clone());
            }
            ResetPolicy::StepOnly => {
                self.step = Step::Order;
                self.order_number = None;
            }
        }
        tracing::debug!(policy = ?self.config.reset_policy, "checkout restarted");
        Transition::Moved(Step::Order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::validation::FieldError;

    fn fill_shipping(wizard: &mut CheckoutWizard) {
        wizard.update_shipping(ShippingField::FirstName, "Erika");
        wizard.update_shipping(ShippingField::LastName, "Mustermann");
        wizard.update_shipping(ShippingField::Email, "erika@example.com");
        wizard.update_shipping(ShippingField::Street, "Hauptstraße 1");
        wizard.update_shipping(ShippingField::City, "Berlin");
        wizard.update_shipping(ShippingField::PostalCode, "10115");
    }

    fn at_payment() -> CheckoutWizard {
        let mut wizard = CheckoutWizard::new();
        wizard.next();
        fill_shipping(&mut wizard);
        assert_eq!(wizard.next(), Transition::Moved(Step::Payment));
        wizard
    }

    #[test]
    fn order_step_has_no_gate() {
        let mut wizard = CheckoutWizard::new();
        assert_eq!(wizard.next(), Transition::Moved(Step::Shipping));
    }

    #[test]
    fn empty_shipping_blocks() {
        let mut wizard = CheckoutWizard::new();
        wizard.next();
        assert_eq!(wizard.next(), Transition::Blocked);
        assert_eq!(wizard.step(), Step::Shipping);
        assert!(!wizard.shipping_errors().is_empty());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut wizard = CheckoutWizard::new();
        wizard.next();
        wizard.next();
        assert!(wizard.shipping_errors().contains(ShippingField::City));

        wizard.update_shipping(ShippingField::City, "x");
        assert!(!wizard.shipping_errors().contains(ShippingField::City));
        assert!(wizard.shipping_errors().contains(ShippingField::Street));

        // Optimistic: a still-invalid edit is not re-checked until the next submit.
        wizard.update_shipping(ShippingField::Street, "   ");
        assert!(!wizard.shipping_errors().contains(ShippingField::Street));
    }

    #[test]
    fn back_edges_keep_entered_data() {
        let mut wizard = at_payment();
        wizard.update_card(CardField::Number, "4242");
        assert_eq!(wizard.back(), Transition::Moved(Step::Shipping));
        assert_eq!(wizard.back(), Transition::Moved(Step::Order));
        assert_eq!(wizard.back(), Transition::Stayed);
        assert_eq!(wizard.shipping().city, "Berlin");
        assert_eq!(wizard.payment().card.number, "4242");
    }

    #[test]
    fn card_payment_requires_every_field() {
        let mut wizard = at_payment();
        assert_eq!(wizard.next(), Transition::Blocked);
        assert_eq!(wizard.payment_errors().len(), 4);
        assert_eq!(
            wizard.payment_errors().get(CardField::Expiry),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn editing_a_card_field_clears_only_its_error() {
        let mut wizard = at_payment();
        assert_eq!(wizard.next(), Transition::Blocked);

        wizard.update_card(CardField::Cvc, "123");
        let remaining: Vec<_> = wizard.payment_errors().iter().map(|(field, _)| field).collect();
        assert!(!remaining.contains(&CardField::Cvc));
        assert_eq!(remaining.len(), 3);
        for field in [CardField::Number, CardField::Expiry, CardField::Name] {
            assert!(wizard.payment_errors().contains(field), "{field:?}");
        }
        assert_eq!(wizard.step(), Step::Payment);
    }

    #[test]
    fn switching_method_clears_payment_errors_but_keeps_card() {
        let mut wizard = at_payment();
        wizard.update_card(CardField::Name, "Erika");
        wizard.next();
        assert!(!wizard.payment_errors().is_empty());

        wizard.select_payment_method(PaymentMethod::ApplePay);
        assert!(wizard.payment_errors().is_empty());
        wizard.select_payment_method(PaymentMethod::CreditCard);
        assert_eq!(wizard.payment().card.name, "Erika");
    }

    #[test]
    fn order_number_is_generated_once_on_confirmation() {
        let mut wizard = at_payment();
        assert!(wizard.order_number().is_none());
        assert!(wizard.summary().is_none());

        wizard.select_payment_method(PaymentMethod::PayPal);
        assert_eq!(wizard.next(), Transition::Moved(Step::Confirmation));
        let first = wizard.order_number().cloned().unwrap();
        assert_eq!(wizard.next(), Transition::Stayed);
        assert_eq!(wizard.back(), Transition::Stayed);
        assert_eq!(wizard.order_number(), Some(&first));
        assert_eq!(wizard.summary().unwrap().order_number, first);
    }

    #[test]
    fn full_reset_starts_a_fresh_order() {
        let mut wizard = at_payment();
        wizard.select_payment_method(PaymentMethod::PayPal);
        wizard.next();

        assert_eq!(wizard.continue_shopping(), Transition::Moved(Step::Order));
        assert_eq!(wizard, CheckoutWizard::new());
    }

    #[test]
    fn step_only_reset_keeps_the_data() {
        let mut wizard = CheckoutWizard::with_config(CheckoutConfig {
            reset_policy: ResetPolicy::StepOnly,
            ..CheckoutConfig::default()
        });
        wizard.set_quantity(2);
        wizard.next();
        fill_shipping(&mut wizard);
        wizard.next();
        wizard.select_payment_method(PaymentMethod::PayPal);
        wizard.next();

        wizard.continue_shopping();
        assert_eq!(wizard.step(), Step::Order);
        assert_eq!(wizard.order().quantity().get(), 2);
        assert_eq!(wizard.shipping().first_name, "Erika");
        assert!(wizard.order_number().is_none());
    }

    #[test]
    fn continue_shopping_only_leaves_confirmation() {
        let mut wizard = CheckoutWizard::new();
        wizard.next();
        assert_eq!(wizard.continue_shopping(), Transition::Stayed);
        assert_eq!(wizard.step(), Step::Shipping);
    }

    #[test]
    fn strict_email_policy_is_honoured() {
        let mut wizard = CheckoutWizard::with_config(CheckoutConfig {
            email_policy: EmailPolicy::LocalAndDomain,
            ..CheckoutConfig::default()
        });
        wizard.next();
        fill_shipping(&mut wizard);
        wizard.update_shipping(ShippingField::Email, "a@b");
        assert_eq!(wizard.next(), Transition::Blocked);
        assert_eq!(
            wizard.shipping_errors().get(ShippingField::Email),
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn stepper_status_is_relative_to_the_current_step() {
        assert_eq!(Step::Order.status_relative_to(Step::Payment), StepStatus::Completed);
        assert_eq!(Step::Payment.status_relative_to(Step::Payment), StepStatus::Active);
        assert_eq!(Step::Confirmation.status_relative_to(Step::Payment), StepStatus::Upcoming);
        let numbers: Vec<u8> = Step::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn total_uses_the_configured_unit_price() {
        let mut wizard = CheckoutWizard::with_config(CheckoutConfig {
            unit_price: Cents(1000),
            ..CheckoutConfig::default()
        });
        wizard.set_quantity(3);
        assert_eq!(wizard.total(), Cents(3000));
    }
}
