//! Store actions.

use serde::{Deserialize, Serialize};

use crate::account::Customer;
use crate::catalog::Category;
use crate::checkout::{ContactInfo, PaymentMethod, ShippingAddress};
use crate::ids::ProductId;
use crate::navigation::Page;

fn one() -> u32 {
    1
}

/// Every change the storefront can make to its state.
///
/// Actions serialize as JSON objects tagged by `type`, so a list of them
/// can be stored and replayed:
///
/// ```json
/// {"type": "add_to_cart", "product_id": "1", "size": "M", "quantity": 2}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Add a product in a size; quantity defaults to one.
    AddToCart {
        product_id: ProductId,
        #[serde(default)]
        size: Option<String>,
        #[serde(default = "one")]
        quantity: u32,
    },
    /// Set a line's quantity; zero or less removes it.
    UpdateCartQuantity {
        product_id: ProductId,
        size: String,
        quantity: i64,
    },
    RemoveFromCart {
        product_id: ProductId,
        size: String,
    },
    ClearCart,
    ToggleWishlist {
        product_id: ProductId,
    },
    ApplyCoupon {
        code: String,
    },
    RemoveCoupon,
    Navigate {
        page: Page,
    },
    /// Select a product and open its detail page.
    SelectProduct {
        product_id: ProductId,
    },
    /// Choose a category; absent means all.
    SelectCategory {
        #[serde(default)]
        category: Option<Category>,
    },
    /// Show a page with a category and clear the search text.
    CategoryNavigate {
        page: Page,
        #[serde(default)]
        category: Option<Category>,
    },
    SetSearch {
        query: String,
    },
    SignIn {
        customer: Customer,
    },
    SignOut,
    /// Open the checkout page on its first step.
    StartCheckout,
    CheckoutSetContact {
        contact: ContactInfo,
    },
    CheckoutSetShipping {
        address: ShippingAddress,
    },
    CheckoutSetPayment {
        method: PaymentMethod,
    },
    /// Validate the current step and move on; places the order from the
    /// payment step.
    CheckoutContinue,
    CheckoutBack,
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddToCart { .. } => "add_to_cart",
            Action::UpdateCartQuantity { .. } => "update_cart_quantity",
            Action::RemoveFromCart { .. } => "remove_from_cart",
            Action::ClearCart => "clear_cart",
            Action::ToggleWishlist { .. } => "toggle_wishlist",
            Action::ApplyCoupon { .. } => "apply_coupon",
            Action::RemoveCoupon => "remove_coupon",
            Action::Navigate { .. } => "navigate",
            Action::SelectProduct { .. } => "select_product",
            Action::SelectCategory { .. } => "select_category",
            Action::CategoryNavigate { .. } => "category_navigate",
            Action::SetSearch { .. } => "set_search",
            Action::SignIn { .. } => "sign_in",
            Action::SignOut => "sign_out",
            Action::StartCheckout => "start_checkout",
            Action::CheckoutSetContact { .. } => "checkout_set_contact",
            Action::CheckoutSetShipping { .. } => "checkout_set_shipping",
            Action::CheckoutSetPayment { .. } => "checkout_set_payment",
            Action::CheckoutContinue => "checkout_continue",
            Action::CheckoutBack => "checkout_back",
        }
    }

    /// Parse a JSON array of actions.
    pub fn parse_script(json: &str) -> Result<Vec<Action>, crate::CommerceError> {
        Ok(serde_json::from_str(json)?)
    }
}
