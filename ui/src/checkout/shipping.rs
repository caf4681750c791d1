//! Shipping address form and its validation rules.

use serde::{Deserialize, Serialize};

use super::validation::{EmailPolicy, FieldError, FieldErrors, FormField};

pub const COUNTRIES: &[&str] = &[
    "Germany",
    "Austria",
    "Switzerland",
    "France",
    "Netherlands",
    "Belgium",
    "Italy",
    "Spain",
    "Portugal",
    "United Kingdom",
    "Ireland",
    "Sweden",
    "Norway",
    "Denmark",
    "Finland",
    "Poland",
    "Czech Republic",
    "United States",
    "Canada",
    "Australia",
    "Other",
];

pub const DEFAULT_COUNTRY: &str = "Germany";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShippingField {
    FirstName,
    LastName,
    Email,
    Street,
    Apt,
    City,
    PostalCode,
    Country,
}

impl ShippingField {
    /// Every field except the optional apartment line.
    pub const REQUIRED: [ShippingField; 7] = [
        ShippingField::FirstName,
        ShippingField::LastName,
        ShippingField::Email,
        ShippingField::Street,
        ShippingField::City,
        ShippingField::PostalCode,
        ShippingField::Country,
    ];

    pub fn is_required(self) -> bool {
        self != Self::Apt
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::FirstName => "shipping-first-name",
            Self::LastName => "shipping-last-name",
            Self::Email => "shipping-email",
            Self::Street => "shipping-street",
            Self::Apt => "shipping-apt",
            Self::City => "shipping-city",
            Self::PostalCode => "shipping-postal-code",
            Self::Country => "shipping-country",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "John",
            Self::LastName => "Doe",
            Self::Email => "john@example.com",
            Self::Street => "123 Main Street",
            Self::Apt => "Apt 4B",
            Self::City => "Berlin",
            Self::PostalCode => "10115",
            Self::Country => DEFAULT_COUNTRY,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

impl FormField for ShippingField {
    fn slug(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Email => "email",
            Self::Street => "street",
            Self::Apt => "apt",
            Self::City => "city",
            Self::PostalCode => "postal-code",
            Self::Country => "country",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub apt: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for ShippingAddress {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            street: String::new(),
            apt: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl ShippingAddress {
    pub fn get(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::FirstName => &self.first_name,
            ShippingField::LastName => &self.last_name,
            ShippingField::Email => &self.email,
            ShippingField::Street => &self.street,
            ShippingField::Apt => &self.apt,
            ShippingField::City => &self.city,
            ShippingField::PostalCode => &self.postal_code,
            ShippingField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: ShippingField, value: impl Into<String>) {
        let slot = match field {
            ShippingField::FirstName => &mut self.first_name,
            ShippingField::LastName => &mut self.last_name,
            ShippingField::Email => &mut self.email,
            ShippingField::Street => &mut self.street,
            ShippingField::Apt => &mut self.apt,
            ShippingField::City => &mut self.city,
            ShippingField::PostalCode => &mut self.postal_code,
            ShippingField::Country => &mut self.country,
        };
        *slot = value.into();
    }
}

/// Check every required field independently; `apt` is never inspected.
pub fn validate(address: &ShippingAddress, email_policy: EmailPolicy) -> FieldErrors<ShippingField> {
    let mut errors = FieldErrors::new();

    errors.require(ShippingField::FirstName, &address.first_name);
    errors.require(ShippingField::LastName, &address.last_name);
    if errors.require(ShippingField::Email, &address.email) && !email_policy.accepts(&address.email)
    {
        errors.insert(ShippingField::Email, FieldError::InvalidEmail);
    }
    errors.require(ShippingField::Street, &address.street);
    errors.require(ShippingField::City, &address.city);
    errors.require(ShippingField::PostalCode, &address.postal_code);
    errors.require(ShippingField::Country, &address.country);

    errors
}
