//! Money type for representing monetary values.
//!
//! The storefront prices everything in whole Indian rupees, so amounts are
//! plain integers. All arithmetic that can overflow has a checked `try_*`
//! form returning [`CommerceError::Overflow`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::error::CommerceError;

/// Currency symbol used for display.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

/// An amount of money in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new Money value from whole rupees.
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Zero rupees.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in whole rupees.
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add another Money value, failing on overflow.
    pub fn try_add(&self, other: Money) -> Result<Money, CommerceError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(CommerceError::Overflow)
    }

    /// Subtract another Money value, failing on overflow.
    pub fn try_subtract(&self, other: Money) -> Result<Money, CommerceError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(CommerceError::Overflow)
    }

    /// Multiply by a quantity, failing on overflow.
    pub fn try_multiply(&self, quantity: u32) -> Result<Money, CommerceError> {
        self.0
            .checked_mul(i64::from(quantity))
            .map(Money)
            .ok_or(CommerceError::Overflow)
    }

    /// Sum an iterator of Money values, failing on overflow.
    pub fn try_sum(iter: impl IntoIterator<Item = Money>) -> Result<Money, CommerceError> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }

    /// Calculate a percentage of this amount, rounded half up to the
    /// nearest rupee.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// assert_eq!(Money::new(5097).percentage(18), Money::new(917));
    /// assert_eq!(Money::new(2450).percentage(10), Money::new(245));
    /// ```
    pub fn percentage(&self, percent: u32) -> Money {
        let scaled = i128::from(self.0) * i128::from(percent);
        // floor((x + 50) / 100) rounds halves toward positive infinity.
        let rounded = (scaled + 50).div_euclid(100);
        Money(rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Format as a display string with thousands separators (e.g. "₹5,097").
    pub fn display(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}", sign, RUPEE_SYMBOL, grouped)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl From<i64> for Money {
    fn from(rupees: i64) -> Self {
        Money(rupees)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_rupees() {
        let m = Money::new(1299);
        assert_eq!(m.rupees(), 1299);
        assert!(!m.is_zero());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(0).display(), "\u{20b9}0");
        assert_eq!(Money::new(999).display(), "\u{20b9}999");
        assert_eq!(Money::new(5097).display(), "\u{20b9}5,097");
        assert_eq!(Money::new(1234567).display(), "\u{20b9}1,234,567");
        assert_eq!(Money::new(-245).display(), "-\u{20b9}245");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!(a.try_add(b).unwrap(), Money::new(1300));
        assert_eq!(a.try_subtract(b).unwrap(), Money::new(700));
        assert_eq!(a.try_multiply(3).unwrap(), Money::new(3000));
        assert_eq!(a + b, Money::new(1300));
    }

    #[test]
    fn test_money_overflow() {
        let max = Money::new(i64::MAX);
        assert_eq!(max.try_add(Money::new(1)), Err(CommerceError::Overflow));
        assert_eq!(max.try_multiply(2), Err(CommerceError::Overflow));
        assert_eq!(
            Money::try_sum([max, Money::new(1)]),
            Err(CommerceError::Overflow)
        );
    }

    #[test]
    fn test_money_sum() {
        let total = Money::try_sum([Money::new(2598), Money::new(2499)]).unwrap();
        assert_eq!(total, Money::new(5097));
        assert_eq!(Money::try_sum([]).unwrap(), Money::zero());
    }

    #[test]
    fn test_money_percentage_rounds_half_up() {
        assert_eq!(Money::new(5097).percentage(18), Money::new(917)); // 917.46
        assert_eq!(Money::new(4950).percentage(18), Money::new(891));
        assert_eq!(Money::new(25).percentage(10), Money::new(3)); // 2.5
        assert_eq!(Money::new(5097).percentage(5), Money::new(255)); // 254.85
        assert_eq!(Money::zero().percentage(20), Money::zero());
    }

    #[test]
    fn test_money_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Money::new(1299)).unwrap(), "1299");
        let m: Money = serde_json::from_str("2499").unwrap();
        assert_eq!(m, Money::new(2499));
    }
}
