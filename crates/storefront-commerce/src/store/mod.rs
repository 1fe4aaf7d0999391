//! Store module.
//!
//! All state changes go through [`Action`]s applied by [`reduce`]; the
//! [`Store`] container owns the state and logs every dispatch.

mod action;
mod container;
mod notification;
mod reducer;
mod state;

pub use action::Action;
pub use container::Store;
pub use notification::{Notification, NotificationKind};
pub use reducer::{
    add_to_cart, apply_coupon, checkout_continue, reduce, start_checkout, toggle_wishlist,
    ADDED_TO_CART_MESSAGE,
};
pub use state::{OrderConfirmation, StoreEnv, StoreState, ORDER_PLACED_MESSAGE};
