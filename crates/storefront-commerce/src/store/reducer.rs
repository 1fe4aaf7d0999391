//! The store reducer.
//!
//! Each function validates before it mutates, so a rejected action leaves
//! the state exactly as it was.

use crate::checkout::{CheckoutFlow, CheckoutProgress};
use crate::error::CommerceError;
use crate::ids::{OrderNumber, ProductId};
use crate::navigation::Page;
use crate::store::{
    Action, Notification, OrderConfirmation, StoreEnv, StoreState, ORDER_PLACED_MESSAGE,
};
use crate::wishlist::WishlistChange;

/// Message shown when a product is added to the cart.
pub const ADDED_TO_CART_MESSAGE: &str = "Product added to cart!";

/// Apply one action to the state.
///
/// Returns the notification the action produces, if any.
pub fn reduce(
    state: &mut StoreState,
    env: &StoreEnv,
    action: Action,
) -> Result<Option<Notification>, CommerceError> {
    match action {
        Action::AddToCart {
            product_id,
            size,
            quantity,
        } => add_to_cart(state, env, &product_id, size.as_deref(), quantity).map(Some),
        Action::UpdateCartQuantity {
            product_id,
            size,
            quantity,
        } => {
            state.cart.update_quantity(&product_id, &size, quantity)?;
            Ok(None)
        }
        Action::RemoveFromCart { product_id, size } => {
            state.cart.remove(&product_id, &size);
            Ok(None)
        }
        Action::ClearCart => {
            state.cart.clear();
            Ok(None)
        }
        Action::ToggleWishlist { product_id } => {
            let change = toggle_wishlist(state, env, &product_id)?;
            Ok(Some(Notification::success(change.message())))
        }
        Action::ApplyCoupon { code } => apply_coupon(state, env, &code).map(Some),
        Action::RemoveCoupon => {
            state.applied_coupon = None;
            Ok(None)
        }
        Action::Navigate { page } => {
            state.navigation.navigate(page);
            Ok(None)
        }
        Action::SelectProduct { product_id } => {
            env.catalog.require(&product_id)?;
            state.navigation.open_product(product_id);
            Ok(None)
        }
        Action::SelectCategory { category } => {
            state.navigation.select_category(category);
            Ok(None)
        }
        Action::CategoryNavigate { page, category } => {
            state.navigation.category_navigate(page, category);
            Ok(None)
        }
        Action::SetSearch { query } => {
            state.navigation.set_search(query);
            Ok(None)
        }
        Action::SignIn { customer } => {
            let greeting = format!("Welcome, {}!", customer.name);
            state.customer = Some(customer);
            Ok(Some(Notification::success(greeting)))
        }
        Action::SignOut => {
            state.customer = None;
            Ok(None)
        }
        Action::StartCheckout => start_checkout(state).map(|_| None),
        Action::CheckoutSetContact { contact } => {
            checkout_mut(state)?.set_contact(contact);
            Ok(None)
        }
        Action::CheckoutSetShipping { address } => {
            checkout_mut(state)?.set_shipping(address);
            Ok(None)
        }
        Action::CheckoutSetPayment { method } => {
            checkout_mut(state)?.set_payment(method);
            Ok(None)
        }
        Action::CheckoutContinue => checkout_continue(state, env),
        Action::CheckoutBack => {
            checkout_mut(state)?.go_back()?;
            Ok(None)
        }
    }
}

/// Add a catalog product to the cart.
///
/// A missing size is rejected with `SizeNotSelected`; the size itself is
/// not checked against the product's sizes.
pub fn add_to_cart(
    state: &mut StoreState,
    env: &StoreEnv,
    product_id: &ProductId,
    size: Option<&str>,
    quantity: u32,
) -> Result<Notification, CommerceError> {
    let product = env.catalog.require(product_id)?;
    let size = size
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| CommerceError::SizeNotSelected(product.name.clone()))?;

    state.cart.add(product, size, quantity)?;
    Ok(Notification::success(ADDED_TO_CART_MESSAGE))
}

/// Toggle a catalog product on the wishlist.
pub fn toggle_wishlist(
    state: &mut StoreState,
    env: &StoreEnv,
    product_id: &ProductId,
) -> Result<WishlistChange, CommerceError> {
    env.catalog.require(product_id)?;
    Ok(state.wishlist.toggle(product_id))
}

/// Apply a coupon code, replacing any coupon already applied.
pub fn apply_coupon(
    state: &mut StoreState,
    env: &StoreEnv,
    code: &str,
) -> Result<Notification, CommerceError> {
    let coupon = env.coupons.lookup(code)?.clone();
    let message = format!("{} applied", coupon.label());
    state.applied_coupon = Some(coupon);
    Ok(Notification::success(message))
}

/// Open the checkout page, keeping any checkout already in progress.
pub fn start_checkout(state: &mut StoreState) -> Result<(), CommerceError> {
    if state.cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    if state.checkout.is_none() {
        state.checkout = Some(CheckoutFlow::new());
    }
    state.navigation.navigate(Page::Checkout);
    Ok(())
}

fn checkout_mut(state: &mut StoreState) -> Result<&mut CheckoutFlow, CommerceError> {
    state
        .checkout
        .as_mut()
        .ok_or(CommerceError::CheckoutNotStarted)
}

/// Continue from the current checkout step, placing the order from the
/// payment step.
pub fn checkout_continue(
    state: &mut StoreState,
    env: &StoreEnv,
) -> Result<Option<Notification>, CommerceError> {
    if state.cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    // Work on a copy so a failed submission leaves the flow untouched.
    let mut flow = state
        .checkout
        .clone()
        .ok_or(CommerceError::CheckoutNotStarted)?;

    match flow.advance()? {
        CheckoutProgress::Step(_) => {
            state.checkout = Some(flow);
            Ok(None)
        }
        CheckoutProgress::Submitted => {
            let summary = env
                .pricing
                .checkout_summary(&state.cart, state.applied_coupon.as_ref())?;

            state.last_order = Some(OrderConfirmation {
                order_number: OrderNumber::generate(),
                summary,
                contact: flow.contact,
                shipping: flow.shipping,
                payment: flow.payment,
                message: ORDER_PLACED_MESSAGE.to_string(),
            });
            state.checkout = None;
            state.navigation.navigate(Page::Home);
            Ok(Some(Notification::success(ORDER_PLACED_MESSAGE)))
        }
    }
}
