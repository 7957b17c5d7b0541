//! Monetary amounts.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary amount stored in cents to avoid floating point drift.
///
/// On the wire a price is a plain JSON number in major units: whole
/// amounts serialize as integers (`10`), fractional ones as decimals
/// (`19.99`). Inputs with more than two decimal places are rounded to
/// the nearest cent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Creates a price from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a price from an amount in major units (e.g. `19.99`).
    ///
    /// Returns `None` for NaN, infinities, and amounts that do not fit in
    /// an `i64` number of cents.
    pub fn from_major(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self {
            cents: cents as i64,
        })
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the amount in major units.
    pub fn as_major(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    pub fn checked_multiply(&self, quantity: u32) -> Option<Price> {
        self.cents
            .checked_mul(i64::from(quantity))
            .map(Price::from_cents)
    }

    /// Adds another amount, returning `None` on overflow.
    pub fn checked_add(&self, other: Price) -> Option<Price> {
        self.cents.checked_add(other.cents).map(Price::from_cents)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents % 100 == 0 {
            serializer.serialize_i64(self.cents / 100)
        } else {
            serializer.serialize_f64(self.as_major())
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::from_major(amount).ok_or_else(|| D::Error::custom("price is out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_major_rounds_to_cents() {
        assert_eq!(Price::from_major(19.99).unwrap().cents(), 1999);
        assert_eq!(Price::from_major(0.005).unwrap().cents(), 1);
        assert_eq!(Price::from_major(10.0).unwrap().cents(), 1000);
    }

    #[test]
    fn test_from_major_rejects_non_finite() {
        assert!(Price::from_major(f64::NAN).is_none());
        assert!(Price::from_major(f64::INFINITY).is_none());
        assert!(Price::from_major(1e300).is_none());
    }

    #[test]
    fn test_whole_amounts_serialize_as_integers() {
        let value = serde_json::to_value(Price::from_cents(1000)).unwrap();
        assert_eq!(value, json!(10));
    }

    #[test]
    fn test_fractional_amounts_serialize_as_decimals() {
        let value = serde_json::to_value(Price::from_cents(1999)).unwrap();
        assert_eq!(value, json!(19.99));
    }

    #[test]
    fn test_deserialize_accepts_integers_and_decimals() {
        let whole: Price = serde_json::from_value(json!(5)).unwrap();
        let fractional: Price = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(whole.cents(), 500);
        assert_eq!(fractional.cents(), 250);
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Price::from_cents(500);
        assert_eq!(price.checked_multiply(2).unwrap().cents(), 1000);
        assert_eq!(
            price.checked_add(Price::from_cents(250)).unwrap().cents(),
            750
        );
        assert!(Price::from_cents(i64::MAX).checked_multiply(2).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::from_cents(-1234).to_string(), "-$12.34");
    }
}
