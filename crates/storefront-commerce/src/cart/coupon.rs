//! Coupon codes.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Money;

/// A percentage-off coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coupon {
    /// Coupon code, stored uppercase.
    pub code: String,
    /// Percent off the subtotal (0-100).
    pub percent_off: u32,
}

impl Coupon {
    /// Create a coupon; the code is normalized to uppercase.
    pub fn new(code: impl AsRef<str>, percent_off: u32) -> Self {
        Self {
            code: normalize(code.as_ref()),
            percent_off: percent_off.min(100),
        }
    }

    /// Discount for a subtotal, rounded to the nearest rupee.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.percent_off)
    }

    /// Label shown next to an applied coupon (e.g. "SAVE10 (10% OFF)").
    pub fn label(&self) -> String {
        format!("{} ({}% OFF)", self.code, self.percent_off)
    }
}

/// The set of redeemable coupon codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CouponTable {
    coupons: Vec<Coupon>,
}

impl CouponTable {
    /// Create a table from coupons. Later entries win on duplicate codes.
    pub fn new(coupons: impl IntoIterator<Item = Coupon>) -> Self {
        let mut table = Self {
            coupons: Vec::new(),
        };
        for coupon in coupons {
            table.insert(coupon);
        }
        table
    }

    /// Add or replace a coupon.
    pub fn insert(&mut self, coupon: Coupon) {
        self.coupons.retain(|c| c.code != coupon.code);
        self.coupons.push(coupon);
    }

    /// Find a coupon by code, ignoring case and surrounding whitespace.
    pub fn lookup(&self, code: &str) -> Result<&Coupon, CommerceError> {
        let code = normalize(code);
        self.coupons
            .iter()
            .find(|c| c.code == code)
            .ok_or(CommerceError::InvalidCouponCode(code))
    }

    /// All coupons.
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }
}

impl Default for CouponTable {
    fn default() -> Self {
        Self::new([
            Coupon::new("SAVE10", 10),
            Coupon::new("WELCOME20", 20),
            Coupon::new("FREESHIP", 5),
        ])
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codes() {
        let table = CouponTable::default();
        assert_eq!(table.lookup("SAVE10").unwrap().percent_off, 10);
        assert_eq!(table.lookup("WELCOME20").unwrap().percent_off, 20);
        assert_eq!(table.lookup("FREESHIP").unwrap().percent_off, 5);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = CouponTable::default();
        let coupon = table.lookup(" welcome20 ").unwrap();
        assert_eq!(coupon.code, "WELCOME20");
    }

    #[test]
    fn test_unknown_code() {
        let table = CouponTable::default();
        assert_eq!(
            table.lookup("bogus"),
            Err(CommerceError::InvalidCouponCode("BOGUS".to_string()))
        );
    }

    #[test]
    fn test_discount_and_label() {
        let coupon = Coupon::new("save10", 10);
        assert_eq!(coupon.discount_for(Money::new(5097)), Money::new(510));
        assert_eq!(coupon.label(), "SAVE10 (10% OFF)");
    }

    #[test]
    fn test_insert_replaces_same_code() {
        let mut table = CouponTable::default();
        table.insert(Coupon::new("save10", 15));
        assert_eq!(table.coupons().len(), 3);
        assert_eq!(table.lookup("SAVE10").unwrap().percent_off, 15);
    }
}
