//! Store state and environment.

use serde::{Deserialize, Serialize};

use crate::account::Customer;
use crate::cart::{Cart, Coupon, CouponTable, OrderSummary, PricingPolicy};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::checkout::{CheckoutFlow, ContactInfo, PaymentMethod, ShippingAddress};
use crate::ids::OrderNumber;
use crate::navigation::Navigation;
use crate::wishlist::Wishlist;

/// Message shown once an order is placed.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";

/// Read-only inputs the reducer prices and validates against.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEnv {
    pub catalog: Catalog,
    pub coupons: CouponTable,
    pub pricing: PricingPolicy,
}

impl StoreEnv {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            coupons: CouponTable::default(),
            pricing: PricingPolicy::default(),
        }
    }

    pub fn with_coupons(mut self, coupons: CouponTable) -> Self {
        self.coupons = coupons;
        self
    }

    pub fn with_pricing(mut self, pricing: PricingPolicy) -> Self {
        self.pricing = pricing;
        self
    }
}

impl Default for StoreEnv {
    fn default() -> Self {
        Self::new(Catalog::sample())
    }
}

/// Everything that changes while a shopper uses the storefront.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreState {
    pub cart: Cart,
    pub wishlist: Wishlist,
    pub navigation: Navigation,
    /// At most one coupon at a time.
    pub applied_coupon: Option<Coupon>,
    pub customer: Option<Customer>,
    /// In-progress checkout, if the checkout page was opened.
    pub checkout: Option<CheckoutFlow>,
    /// Confirmation of the most recently placed order.
    pub last_order: Option<OrderConfirmation>,
}

impl StoreState {
    /// Check a state built outside the reducer against the environment.
    ///
    /// Cart and wishlist entries must name catalog products and an applied
    /// coupon must be in the coupon table. Cart quantities are checked when
    /// the cart is deserialized.
    pub fn validate(&self, env: &StoreEnv) -> Result<(), CommerceError> {
        for line in self.cart.lines() {
            env.catalog.require(&line.product.id)?;
        }
        for id in self.wishlist.ids() {
            env.catalog.require(id)?;
        }
        if let Some(ref coupon) = self.applied_coupon {
            env.coupons.lookup(&coupon.code)?;
        }
        Ok(())
    }
}

/// Mock confirmation produced when checkout completes. No order record is
/// kept beyond this value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_number: OrderNumber,
    pub summary: OrderSummary,
    pub contact: ContactInfo,
    pub shipping: ShippingAddress,
    pub payment: PaymentMethod,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_validate_accepts_reducer_state() {
        let env = StoreEnv::default();
        let mut state = StoreState::default();
        state.wishlist.toggle(&ProductId::new("5"));
        state.applied_coupon = Some(Coupon::new("save10", 10));
        assert_eq!(state.validate(&env), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unknown_wishlist_id() {
        let mut state = StoreState::default();
        state.wishlist.toggle(&ProductId::new("99"));
        assert_eq!(
            state.validate(&StoreEnv::default()),
            Err(CommerceError::ProductNotFound("99".into()))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_coupon() {
        let mut state = StoreState::default();
        state.applied_coupon = Some(Coupon::new("GONE", 30));
        assert!(matches!(
            state.validate(&StoreEnv::default()),
            Err(CommerceError::InvalidCouponCode(_))
        ));
    }

    #[test]
    fn test_state_json_rejects_zero_quantity_line() {
        let env = StoreEnv::default();
        let mut state = StoreState::default();
        let tee = env.catalog.require(&ProductId::new("1")).unwrap();
        state.cart.add(tee, "M", 1).unwrap();

        let mut json = serde_json::to_value(&state).unwrap();
        json["cart"]["lines"][0]["quantity"] = serde_json::json!(0);
        let err = serde_json::from_value::<StoreState>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid quantity"));
    }
}
