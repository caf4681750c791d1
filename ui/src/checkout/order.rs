//! Order configuration: how many sets, and the colour of every unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::format;

pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 10;

/// Price of one set (two units, one of them free).
pub const UNIT_PRICE: Cents = Cents(5559);

/// Physical units contained in one set.
pub const UNITS_PER_SET: usize = 2;

/// Money in euro cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn as_euros(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format_eur(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitColor {
    Bronze,
    Black,
}

impl UnitColor {
    pub const ALL: [UnitColor; 2] = [UnitColor::Bronze, UnitColor::Black];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Black => "black",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Bronze => "color-bronze",
            Self::Black => "color-black",
        }
    }

    pub fn swatch_hex(self) -> &'static str {
        match self {
            Self::Bronze => "#C9A96E",
            Self::Black => "#1D1D1F",
        }
    }
}

/// Position of a unit inside its set: the buyer's own and the gift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSlot {
    First,
    Second,
}

impl UnitSlot {
    pub const ALL: [UnitSlot; 2] = [UnitSlot::First, UnitSlot::Second];

    fn offset(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    pub first: UnitColor,
    pub second: UnitColor,
}

impl Default for ColorSet {
    fn default() -> Self {
        Self {
            first: UnitColor::Bronze,
            second: UnitColor::Black,
        }
    }
}

impl ColorSet {
    pub fn get(&self, slot: UnitSlot) -> UnitColor {
        match slot {
            UnitSlot::First => self.first,
            UnitSlot::Second => self.second,
        }
    }

    pub fn set(&mut self, slot: UnitSlot, color: UnitColor) {
        match slot {
            UnitSlot::First => self.first = color,
            UnitSlot::Second => self.second = color,
        }
    }
}

/// Number of sets, always within `MIN_QUANTITY..=MAX_QUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: Quantity = Quantity(MIN_QUANTITY);
    pub const MAX: Quantity = Quantity(MAX_QUANTITY);

    pub fn clamped(n: i64) -> Self {
        Self(n.clamp(MIN_QUANTITY as i64, MAX_QUANTITY as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn is_min(self) -> bool {
        self == Self::MIN
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

/// `quantity × unit_price`. Shipping is never added.
pub fn compute_total(quantity: Quantity, unit_price: Cents) -> Cents {
    Cents(i64::from(quantity.get()) * unit_price.0)
}

/// Shipping is free on every order.
pub fn shipping_cost() -> Cents {
    Cents::ZERO
}

/// Quantity plus one colour pair per set; the two always have equal length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfig {
    quantity: Quantity,
    color_sets: Vec<ColorSet>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            quantity: Quantity::default(),
            color_sets: vec![ColorSet::default()],
        }
    }
}

impl OrderConfig {
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn color_sets(&self) -> &[ColorSet] {
        &self.color_sets
    }

    /// Clamp `n` into range and resize the colour sets to match. Existing
    /// pairs keep their index; new ones start as bronze/black.
    pub fn set_quantity(&mut self, n: i64) {
        self.quantity = Quantity::clamped(n);
        self.color_sets
            .resize(self.quantity.as_usize(), ColorSet::default());
    }

    pub fn increment(&mut self) {
        self.set_quantity(i64::from(self.quantity.get()) + 1);
    }

    pub fn decrement(&mut self) {
        self.set_quantity(i64::from(self.quantity.get()) - 1);
    }

    /// Recolour one unit. Indices outside the current quantity are ignored.
    pub fn set_unit_color(&mut self, set_index: usize, slot: UnitSlot, color: UnitColor) {
        if let Some(set) = self.color_sets.get_mut(set_index) {
            set.set(slot, color);
        }
    }

    pub fn total(&self, unit_price: Cents) -> Cents {
        compute_total(self.quantity, unit_price)
    }

    /// Physical units across all sets.
    pub fn unit_count(&self) -> usize {
        self.quantity.as_usize() * UNITS_PER_SET
    }
}

/// 1-based number of a unit across the whole order (`#1`, `#2`, `#3`, ...).
pub fn unit_number(set_index: usize, slot: UnitSlot) -> usize {
    set_index * UNITS_PER_SET + slot.offset() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_bronze_black_set() {
        let order = OrderConfig::default();
        assert_eq!(order.quantity().get(), 1);
        assert_eq!(order.color_sets(), &[ColorSet::default()]);
        assert_eq!(order.color_sets()[0].first, UnitColor::Bronze);
        assert_eq!(order.color_sets()[0].second, UnitColor::Black);
    }

    #[test]
    fn quantity_is_clamped_into_range() {
        let mut order = OrderConfig::default();
        order.set_quantity(0);
        assert_eq!(order.quantity().get(), 1);
        order.set_quantity(-4);
        assert_eq!(order.quantity().get(), 1);
        order.set_quantity(11);
        assert_eq!(order.quantity().get(), 10);
        assert_eq!(order.color_sets().len(), 10);
    }

    #[test]
    fn shrinking_then_growing_resets_dropped_sets() {
        let mut order = OrderConfig::default();
        order.set_quantity(3);
        order.set_unit_color(0, UnitSlot::First, UnitColor::Black);
        order.set_unit_color(1, UnitSlot::Second, UnitColor::Bronze);
        order.set_unit_color(2, UnitSlot::First, UnitColor::Black);

        order.set_quantity(1);
        order.set_quantity(3);

        let sets = order.color_sets();
        assert_eq!(sets[0].first, UnitColor::Black);
        assert_eq!(sets[1], ColorSet::default());
        assert_eq!(sets[2], ColorSet::default());
    }

    #[test]
    fn increment_and_decrement_stop_at_bounds() {
        let mut order = OrderConfig::default();
        order.decrement();
        assert!(order.quantity().is_min());
        for _ in 0..20 {
            order.increment();
        }
        assert!(order.quantity().is_max());
        assert_eq!(order.color_sets().len(), MAX_QUANTITY as usize);
    }

    #[test]
    fn out_of_range_colour_updates_are_ignored() {
        let mut order = OrderConfig::default();
        let before = order.clone();
        order.set_unit_color(5, UnitSlot::First, UnitColor::Black);
        assert_eq!(order, before);
    }

    #[test]
    fn totals_are_exact_in_cents() {
        assert_eq!(compute_total(Quantity::clamped(3), Cents(5559)), Cents(16677));
        assert_eq!(compute_total(Quantity::clamped(3), UNIT_PRICE).to_string(), "€166.77");
        assert_eq!(shipping_cost(), Cents::ZERO);
        assert!((Cents(16677).as_euros() - 166.77).abs() < 1e-9);
    }

    #[test]
    fn unit_numbers_count_across_sets() {
        assert_eq!(unit_number(0, UnitSlot::First), 1);
        assert_eq!(unit_number(0, UnitSlot::Second), 2);
        assert_eq!(unit_number(2, UnitSlot::First), 5);
        assert_eq!(unit_number(2, UnitSlot::Second), 6);
    }

    #[test]
    fn unit_count_is_two_per_set() {
        let mut order = OrderConfig::default();
        order.set_quantity(4);
        assert_eq!(order.unit_count(), 8);
    }
}
