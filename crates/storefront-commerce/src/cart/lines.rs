//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
///
/// Holds at most one line per (product id, size) pair, in the order the
/// pairs were first added. Every line has a quantity of at least one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawCart")]
pub struct Cart {
    /// Lines in the cart.
    lines: Vec<CartLine>,
}

#[derive(Deserialize)]
struct RawCart {
    #[serde(default)]
    lines: Vec<CartLine>,
}

impl TryFrom<RawCart> for Cart {
    type Error = CommerceError;

    fn try_from(raw: RawCart) -> Result<Self, Self::Error> {
        for (i, line) in raw.lines.iter().enumerate() {
            let duplicate = raw.lines[..i]
                .iter()
                .any(|l| l.product.id == line.product.id && l.size == line.size);
            if duplicate {
                return Err(CommerceError::DuplicateCartLine {
                    product: line.product.id.to_string(),
                    size: line.size.clone(),
                });
            }
        }
        Ok(Self { lines: raw.lines })
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product in a size to the cart.
    ///
    /// Increments the existing line for the same (product, size) or appends a
    /// new one. The size is not checked against the product's size list.
    /// Returns the line's quantity after the add.
    ///
    /// Returns an error if:
    /// - Quantity is zero
    /// - The line would exceed MAX_QUANTITY_PER_ITEM
    pub fn add(
        &mut self,
        product: &Product,
        size: impl Into<String>,
        quantity: u32,
    ) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        let size = size.into();

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product.id && l.size == size)
        {
            let new_quantity = i64::from(existing.quantity) + i64::from(quantity);
            check_limit(new_quantity)?;
            existing.quantity = new_quantity as u32;
            return Ok(existing.quantity);
        }

        check_limit(i64::from(quantity))?;
        self.lines.push(CartLine {
            product: product.clone(),
            size,
            quantity,
        });
        Ok(quantity)
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Returns `false` when no
    /// line matches (product id, size).
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(product_id, size));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| &l.product.id == product_id && l.size == size)
        {
            check_limit(quantity)?;
            line.quantity = quantity as u32;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line from the cart.
    pub fn remove(&mut self, product_id: &ProductId, size: &str) -> bool {
        let len_before = self.lines.len();
        self.lines
            .retain(|l| !(&l.product.id == product_id && l.size == size));
        self.lines.len() < len_before
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a (product id, size) pair.
    pub fn get_line(&self, product_id: &ProductId, size: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|l| &l.product.id == product_id && l.size == size)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price times quantity over all lines.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(totals)
    }
}

/// One product in one size, with a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawCartLine")]
pub struct CartLine {
    /// Product snapshot taken when the line was created.
    pub product: Product,
    /// Chosen size.
    pub size: String,
    /// Quantity, at least one.
    pub quantity: u32,
}

#[derive(Deserialize)]
struct RawCartLine {
    product: Product,
    size: String,
    quantity: u32,
}

impl TryFrom<RawCartLine> for CartLine {
    type Error = CommerceError;

    fn try_from(raw: RawCartLine) -> Result<Self, Self::Error> {
        if raw.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        check_limit(i64::from(raw.quantity))?;
        Ok(Self {
            product: raw.product,
            size: raw.size,
            quantity: raw.quantity,
        })
    }
}

impl CartLine {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product.price.try_multiply(self.quantity)
    }
}

fn check_limit(quantity: i64) -> Result<(), CommerceError> {
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CommerceError::QuantityExceedsLimit(
            quantity,
            MAX_QUANTITY_PER_ITEM,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Product {
        Catalog::sample()
            .require(&ProductId::new(id))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal().unwrap(), Money::zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "M", 2).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.subtotal().unwrap(), Money::new(2598));
    }

    #[test]
    fn test_add_same_pair_increments() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "M", 2).unwrap();
        let quantity = cart.add(&product("1"), "M", 3).unwrap();

        assert_eq!(quantity, 5);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get_line(&ProductId::new("1"), "M").unwrap().quantity, 5);
    }

    #[test]
    fn test_different_size_is_separate_line() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "M", 1).unwrap();
        cart.add(&product("1"), "L", 1).unwrap();
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.lines()[0].size, "M");
        assert_eq!(cart.lines()[1].size, "L");
    }

    #[test]
    fn test_size_not_validated() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "XXXL", 1).unwrap();
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_zero_quantity() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add(&product("1"), "M", 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_exceeds_limit() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "M", 9998).unwrap();
        assert_eq!(
            cart.add(&product("1"), "M", 2),
            Err(CommerceError::QuantityExceedsLimit(10000, MAX_QUANTITY_PER_ITEM))
        );
        assert_eq!(cart.item_count(), 9998);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add(&product("3"), "32", 1).unwrap();

        assert!(cart.update_quantity(&ProductId::new("3"), "32", 4).unwrap());
        assert_eq!(cart.item_count(), 4);

        assert!(!cart.update_quantity(&ProductId::new("3"), "30", 4).unwrap());
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add(&product("3"), "32", 1).unwrap();
        cart.add(&product("1"), "M", 1).unwrap();

        assert!(cart.update_quantity(&ProductId::new("3"), "32", 0).unwrap());
        assert!(cart.update_quantity(&ProductId::new("1"), "M", -3).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_exceeds_limit() {
        let mut cart = Cart::new();
        cart.add(&product("3"), "32", 1).unwrap();
        assert!(matches!(
            cart.update_quantity(&ProductId::new("3"), "32", 10_000),
            Err(CommerceError::QuantityExceedsLimit(10_000, _))
        ));
    }

    #[test]
    fn test_update_missing_line_is_noop_even_above_limit() {
        let mut cart = Cart::new();
        cart.add(&product("3"), "32", 1).unwrap();
        assert_eq!(cart.update_quantity(&ProductId::new("1"), "M", 10_000), Ok(false));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_deserialize_rejects_bad_quantities() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "M", 2).unwrap();
        let mut json = serde_json::to_value(&cart).unwrap();

        json["lines"][0]["quantity"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Cart>(json.clone()).is_err());

        json["lines"][0]["quantity"] = serde_json::json!(10_000);
        assert!(serde_json::from_value::<Cart>(json.clone()).is_err());

        json["lines"][0]["quantity"] = serde_json::json!(3);
        let restored: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(restored.item_count(), 3);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_lines() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "M", 1).unwrap();
        let mut json = serde_json::to_value(&cart).unwrap();
        let line = json["lines"][0].clone();
        json["lines"].as_array_mut().unwrap().push(line);

        let err = serde_json::from_value::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate cart line"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "M", 1).unwrap();
        cart.add(&product("2"), "L", 1).unwrap();

        assert!(cart.remove(&ProductId::new("1"), "M"));
        assert!(!cart.remove(&ProductId::new("1"), "M"));
        assert_eq!(cart.line_count(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_example() {
        let mut cart = Cart::new();
        cart.add(&product("1"), "M", 2).unwrap();
        cart.add(&product("3"), "32", 1).unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal().unwrap(), Money::new(5097));
    }

    #[test]
    fn test_subtotal_overflow() {
        let mut expensive = product("1");
        expensive.price = Money::new(i64::MAX / 2);
        let mut cart = Cart::new();
        cart.add(&expensive, "M", 3).unwrap();
        assert_eq!(cart.subtotal(), Err(CommerceError::Overflow));
    }
}
