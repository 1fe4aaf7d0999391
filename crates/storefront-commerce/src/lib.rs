//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront UI needs beneath its views:
//!
//! - **Catalog**: Products, categories, badges, the built-in sample catalog
//! - **Cart**: Cart lines keyed by (product, size), coupons, order summaries
//! - **Wishlist**: Toggle-only set of product ids
//! - **Search**: Filter criteria, sort keys, listings with facets
//! - **Checkout**: Three-step contact / shipping / payment form flow
//! - **Navigation**: Current page plus selected product, category and search
//! - **Store**: Action reducer and the injectable state container
//! - **Tracking**: Order tracking behind an async trait
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut store = Store::sample();
//! store
//!     .dispatch(Action::AddToCart {
//!         product_id: ProductId::new("1"),
//!         size: Some("M".to_string()),
//!         quantity: 2,
//!     })
//!     .unwrap();
//!
//! assert_eq!(store.cart_item_count(), 2);
//! assert_eq!(store.subtotal().unwrap(), Money::new(2598));
//! ```

pub mod account;
pub mod error;
pub mod ids;
pub mod money;
pub mod navigation;
pub mod wishlist;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod store;
pub mod tracking;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::account::Customer;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::navigation::{Navigation, Page};
    pub use crate::wishlist::{Wishlist, WishlistChange};

    // Catalog
    pub use crate::catalog::{Badge, Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, Coupon, CouponTable, OrderSummary, PricingPolicy};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutProgress, CheckoutStep, ContactInfo, PaymentMethod, ShippingAddress,
    };

    // Search
    pub use crate::search::{
        filter_and_sort, FilterCriteria, Listing, ListingQuery, PriceRange, SortKey,
    };

    // Store
    pub use crate::store::{
        Action, Notification, NotificationKind, OrderConfirmation, Store, StoreEnv, StoreState,
    };

    // Tracking
    pub use crate::tracking::{
        OrderTracker, SimulatedOrderTracker, TrackingError, TrackingInfo, TrackingRequest,
    };
}
