//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Add-to-cart attempted without choosing a size.
    #[error("Please select a size for {0}")]
    SizeNotSelected(String),

    /// Two cart lines share a (product, size) pair.
    #[error("Duplicate cart line: {product} in size {size}")]
    DuplicateCartLine { product: String, size: String },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Coupon code not in the coupon table.
    #[error("Invalid coupon code: {0}")]
    InvalidCouponCode(String),

    /// Price range with min above max.
    #[error("Invalid price range: min {min} is above max {max}")]
    InvalidPriceRange { min: i64, max: i64 },

    /// Invalid checkout step transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Required checkout fields are missing.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Checkout action sent while no checkout is in progress.
    #[error("Checkout has not been started")]
    CheckoutNotStarted,

    /// Order placement attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Unrecognized sort key.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Unrecognized category tag.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unrecognized badge tag.
    #[error("Unknown badge: {0}")]
    UnknownBadge(String),

    /// Unrecognized payment method.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
