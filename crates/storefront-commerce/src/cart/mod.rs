//! Shopping cart module.
//!
//! Contains types for the cart, coupon codes, and order summary pricing.

mod coupon;
mod lines;
mod pricing;

pub use coupon::{Coupon, CouponTable};
pub use lines::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
pub use pricing::{OrderSummary, PricingPolicy};
