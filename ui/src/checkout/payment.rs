//! Payment method selection and the card-details form.

use serde::{Deserialize, Serialize};

use super::validation::{FieldErrors, FormField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    ApplePay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::ApplePay,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::PayPal => "paypal",
            Self::ApplePay => "apple-pay",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::CreditCard => "payment-method-credit-card",
            Self::PayPal => "payment-method-paypal",
            Self::ApplePay => "payment-method-apple-pay",
        }
    }

    /// What the payment step shows below the method picker.
    pub fn panel(self) -> PaymentPanel {
        match self {
            Self::CreditCard => PaymentPanel::CardForm,
            Self::PayPal => PaymentPanel::Redirect {
                notice_key: "payment-paypal-notice",
            },
            Self::ApplePay => PaymentPanel::Redirect {
                notice_key: "payment-apple-pay-notice",
            },
        }
    }
}

/// Method-specific fragment of the payment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPanel {
    /// Editable card details, validated on submit.
    CardForm,
    /// Informational notice only; the provider takes over after submit.
    Redirect { notice_key: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardField {
    Number,
    Expiry,
    Cvc,
    Name,
}

impl CardField {
    pub const ALL: [CardField; 4] = [
        CardField::Number,
        CardField::Expiry,
        CardField::Cvc,
        CardField::Name,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Number => "card-number",
            Self::Expiry => "card-expiry",
            Self::Cvc => "card-cvc",
            Self::Name => "card-name",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Number => "4242 4242 4242 4242",
            Self::Expiry => "MM/YY",
            Self::Cvc => "123",
            Self::Name => "John Doe",
        }
    }
}

impl FormField for CardField {
    fn slug(self) -> &'static str {
        match self {
            Self::Number => "card-number",
            Self::Expiry => "card-expiry",
            Self::Cvc => "card-cvc",
            Self::Name => "card-name",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
    pub name: String,
}

impl CardDetails {
    pub fn get(&self, field: CardField) -> &str {
        match field {
            CardField::Number => &self.number,
            CardField::Expiry => &self.expiry,
            CardField::Cvc => &self.cvc,
            CardField::Name => &self.name,
        }
    }

    pub fn set(&mut self, field: CardField, value: impl Into<String>) {
        let slot = match field {
            CardField::Number => &mut self.number,
            CardField::Expiry => &mut self.expiry,
            CardField::Cvc => &mut self.cvc,
            CardField::Name => &mut self.name,
        };
        *slot = value.into();
    }
}

/// Chosen method plus card details. The card record is kept when the buyer
/// switches to another method and back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSelection {
    pub method: PaymentMethod,
    pub card: CardDetails,
}

/// Presence checks on the card fields; other methods always pass.
pub fn validate(selection: &PaymentSelection) -> FieldErrors<CardField> {
    let mut errors = FieldErrors::new();
    match selection.method.panel() {
        PaymentPanel::CardForm => {
            for field in CardField::ALL {
                errors.require(field, selection.card.get(field));
            }
        }
        PaymentPanel::Redirect { .. } => {}
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::validation::FieldError;

    #[test]
    fn paypal_passes_with_empty_card() {
        let selection = PaymentSelection {
            method: PaymentMethod::PayPal,
            card: CardDetails::default(),
        };
        assert!(validate(&selection).is_empty());
    }

    #[test]
    fn apple_pay_passes_with_empty_card() {
        let selection = PaymentSelection {
            method: PaymentMethod::ApplePay,
            ..Default::default()
        };
        assert!(validate(&selection).is_empty());
    }

    #[test]
    fn empty_card_reports_all_four_fields() {
        let errors = validate(&PaymentSelection::default());
        assert_eq!(errors.len(), 4);
        for field in CardField::ALL {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn card_checks_are_presence_only() {
        let selection = PaymentSelection {
            method: PaymentMethod::CreditCard,
            card: CardDetails {
                number: "1".into(),
                expiry: "13/99".into(),
                cvc: "x".into(),
                name: "  Jo ".into(),
            },
        };
        assert!(validate(&selection).is_empty());
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let mut selection = PaymentSelection::default();
        for field in CardField::ALL {
            selection.card.set(field, "ok");
        }
        selection.card.set(CardField::Cvc, "   ");
        let errors = validate(&selection);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(CardField::Cvc));
    }

    #[test]
    fn methods_serialise_as_slugs() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.slug()));
        }
    }

    #[test]
    fn only_card_payment_renders_a_form() {
        assert_eq!(PaymentMethod::CreditCard.panel(), PaymentPanel::CardForm);
        assert!(matches!(
            PaymentMethod::PayPal.panel(),
            PaymentPanel::Redirect { .. }
        ));
    }
}
