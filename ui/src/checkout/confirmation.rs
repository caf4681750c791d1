//! Order number generation and the read-only confirmation summary.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use super::order::{Cents, ColorSet, OrderConfig};

pub const DEFAULT_ORDER_PREFIX: &str = "KF";

const ORDER_DIGITS_MIN: u32 = 10_000;
const ORDER_DIGITS_MAX: u32 = 99_999;

/// Message key of the static delivery estimate.
pub const DELIVERY_ESTIMATE_KEY: &str = "confirmation-delivery-value";

/// Client-side order reference, `PREFIX-XXXXX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderNumber {
    prefix: String,
    digits: u32,
}

impl OrderNumber {
    pub fn generate(prefix: &str) -> Self {
        Self::generate_with(prefix, &mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> Self {
        Self {
            prefix: prefix.to_string(),
            digits: rng.gen_range(ORDER_DIGITS_MIN..=ORDER_DIGITS_MAX),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:05}", self.prefix, self.digits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("order numbers look like PREFIX-12345")]
pub struct ParseOrderNumberError;

impl FromStr for OrderNumber {
    type Err = ParseOrderNumberError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (prefix, digits) = raw.rsplit_once('-').ok_or(ParseOrderNumberError)?;
        if prefix.is_empty() || digits.len() != 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseOrderNumberError);
        }
        let digits: u32 = digits.parse().map_err(|_| ParseOrderNumberError)?;
        if !(ORDER_DIGITS_MIN..=ORDER_DIGITS_MAX).contains(&digits) {
            return Err(ParseOrderNumberError);
        }
        Ok(Self {
            prefix: prefix.to_string(),
            digits,
        })
    }
}

/// Everything the confirmation step renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationSummary {
    pub order_number: OrderNumber,
    pub unit_count: usize,
    pub color_sets: Vec<ColorSet>,
    pub total: Cents,
    pub delivery_key: &'static str,
}

impl ConfirmationSummary {
    pub fn new(order_number: OrderNumber, order: &OrderConfig, unit_price: Cents) -> Self {
        Self {
            order_number,
            unit_count: order.unit_count(),
            color_sets: order.color_sets().to_vec(),
            total: order.total(unit_price),
            delivery_key: DELIVERY_ESTIMATE_KEY,
        }
    }
}

/// Share buttons shown under the confirmation. They are labels only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    WhatsApp,
    Twitter,
    CopyLink,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [
        ShareTarget::WhatsApp,
        ShareTarget::Twitter,
        ShareTarget::CopyLink,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            Self::WhatsApp => "share-whatsapp",
            Self::Twitter => "share-twitter",
            Self::CopyLink => "share-copy-link",
        }
    }
}
