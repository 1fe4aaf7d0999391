//! Checkout module.
//!
//! Contains the three-step checkout flow and its form sections.

mod flow;
mod form;

pub use flow::{CheckoutFlow, CheckoutProgress, CheckoutStep};
pub use form::{is_valid_email, ContactInfo, PaymentMethod, ShippingAddress, STATE_OPTIONS};
