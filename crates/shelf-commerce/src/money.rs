//! Money type for representing prices.
//!
//! Uses an integer count of minor units (paise) so cart totals never
//! accumulate floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency of every price in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
        }
    }

    /// Number of minor units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., paise).
    pub minor_units: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Create a Money value from a decimal amount of major units, rounding
    /// to the nearest minor unit.
    ///
    /// ```
    /// use shelf_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(37.99, Currency::INR);
    /// assert_eq!(price.minor_units, 3799);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let minor_units = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(minor_units, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    /// Convert to a decimal value in major units.
    pub fn to_decimal(&self) -> f64 {
        self.minor_units as f64 / self.currency.minor_per_major() as f64
    }

    /// Format as a display string (e.g., "₹37.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "37.99").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }

    /// Add another amount, saturating at the bounds of `i64`.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.minor_units.saturating_add(other.minor_units), self.currency)
    }

    /// Multiply by a quantity, saturating at the bounds of `i64`.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.minor_units.saturating_mul(factor), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
