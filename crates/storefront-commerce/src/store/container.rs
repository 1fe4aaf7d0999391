//! The store container.

use storefront_observability::{SessionId, StructuredLogger};

use crate::account::Customer;
use crate::cart::OrderSummary;
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::money::Money;
use crate::navigation::ListingScope;
use crate::search::{Listing, ListingQuery};
use crate::store::{reduce, Action, Notification, OrderConfirmation, StoreEnv, StoreState};

/// Owns the environment, the state and a logger, and applies actions.
///
/// Every dispatched action is logged at debug level; rejected actions are
/// logged at warn level and leave the state unchanged.
#[derive(Debug, Clone)]
pub struct Store {
    env: StoreEnv,
    state: StoreState,
    logger: StructuredLogger,
}

impl Store {
    /// Create a store with empty state.
    pub fn new(env: StoreEnv) -> Self {
        Self {
            env,
            state: StoreState::default(),
            logger: StructuredLogger::new(SessionId::generate()).with_component("store"),
        }
    }

    /// A store over the built-in sample catalog.
    pub fn sample() -> Self {
        Self::new(StoreEnv::default())
    }

    /// Start from an existing state, such as one saved from an earlier session.
    ///
    /// The state is rejected when it names products missing from the catalog
    /// or a coupon missing from the coupon table.
    pub fn try_with_state(mut self, state: StoreState) -> Result<Self, CommerceError> {
        state.validate(&self.env)?;
        self.state = state;
        Ok(self)
    }

    /// Use a specific logger; the component is set to `store`.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger.for_component("store");
        self
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Notification>, CommerceError> {
        let name = action.name();
        self.logger
            .debug_builder("dispatch")
            .field("action", name)
            .emit();

        let had_order = self.state.last_order.clone();
        match reduce(&mut self.state, &self.env, action) {
            Ok(notification) => {
                if self.state.last_order != had_order {
                    if let Some(order) = &self.state.last_order {
                        self.logger
                            .info_builder("order placed")
                            .field("order_number", order.order_number.as_str())
                            .field_i64("total", order.summary.total.rupees())
                            .field_i64("items", order.summary.item_count as i64)
                            .emit();
                    }
                }
                Ok(notification)
            }
            Err(err) => {
                self.logger
                    .warn_builder("action rejected")
                    .field("action", name)
                    .field("error", err.to_string())
                    .emit();
                Err(err)
            }
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn env(&self) -> &StoreEnv {
        &self.env
    }

    pub fn catalog(&self) -> &Catalog {
        &self.env.catalog
    }

    /// Sum of cart quantities.
    pub fn cart_item_count(&self) -> u64 {
        self.state.cart.item_count()
    }

    /// Sum of price times quantity over the cart.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.state.cart.subtotal()
    }

    /// Cart page summary.
    pub fn cart_summary(&self) -> Result<OrderSummary, CommerceError> {
        self.env
            .pricing
            .cart_summary(&self.state.cart, self.state.applied_coupon.as_ref())
    }

    /// Checkout page summary, including GST.
    pub fn checkout_summary(&self) -> Result<OrderSummary, CommerceError> {
        self.env
            .pricing
            .checkout_summary(&self.state.cart, self.state.applied_coupon.as_ref())
    }

    /// Wishlisted products, in catalog order.
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.state.wishlist.products(&self.env.catalog)
    }

    pub fn wishlist_count(&self) -> usize {
        self.state.wishlist.len()
    }

    /// The product shown on the detail page, if any.
    pub fn current_product(&self) -> Option<&Product> {
        self.state.navigation.current_product(&self.env.catalog)
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.state.customer.as_ref()
    }

    pub fn last_order(&self) -> Option<&OrderConfirmation> {
        self.state.last_order.as_ref()
    }

    /// Candidate products for a listing scope.
    pub fn candidates(&self, scope: ListingScope) -> Vec<&Product> {
        let catalog = &self.env.catalog;
        match scope {
            ListingScope::All => catalog.products().iter().collect(),
            ListingScope::NewArrivals => catalog.new_arrivals(),
            ListingScope::Category(category) => catalog.in_category(category),
            ListingScope::Bestsellers => catalog.bestsellers(),
            ListingScope::Wishlist => self.wishlist_products(),
        }
    }

    /// The listing for the current page, or `None` when the page does not
    /// list products.
    ///
    /// On the products page the selected menu category applies when the
    /// query names none, and the header search text narrows pages that
    /// show a search box.
    pub fn listing(&self, query: &ListingQuery) -> Option<Listing<'_>> {
        let nav = &self.state.navigation;
        let scope = nav.page.listing_scope()?;
        let mut query = query.clone();

        if scope == ListingScope::All && query.criteria.category.is_none() {
            query.criteria.category = nav.selected_category;
        }
        if scope.uses_search() && !nav.search.trim().is_empty() {
            query.criteria.query = Some(nav.search.clone());
        }

        let candidates = self.candidates(scope);
        Some(query.run(&candidates))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;
    use crate::navigation::Page;
    use crate::search::{FilterCriteria, SortKey};

    fn add(id: &str, size: &str, quantity: u32) -> Action {
        Action::AddToCart {
            product_id: ProductId::new(id),
            size: Some(size.to_string()),
            quantity,
        }
    }

    #[test]
    fn test_selectors() {
        let mut store = Store::sample();
        store.dispatch(add("1", "M", 2)).unwrap();
        store.dispatch(add("3", "32", 1)).unwrap();

        assert_eq!(store.cart_item_count(), 3);
        assert_eq!(store.subtotal().unwrap(), Money::new(5097));
        assert_eq!(store.cart_summary().unwrap().total, Money::new(5097));
        assert_eq!(store.checkout_summary().unwrap().tax, Money::new(917));
    }

    #[test]
    fn test_rejected_action_leaves_state() {
        let mut store = Store::sample();
        store.dispatch(add("1", "M", 1)).unwrap();
        let before = store.state().clone();

        assert!(store.dispatch(add("1", "M", 0)).is_err());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_with_state_injects() {
        let mut state = StoreState::default();
        state.navigation.navigate(Page::Cart);
        let store = Store::sample().try_with_state(state).unwrap();
        assert_eq!(store.state().navigation.page, Page::Cart);
    }

    #[test]
    fn test_try_with_state_rejects_unknown_wishlist_product() {
        let mut state = StoreState::default();
        state.wishlist.toggle(&ProductId::new("99"));

        let err = Store::sample().try_with_state(state).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("99".into()));
    }

    #[test]
    fn test_listing_uses_navigation() {
        let mut store = Store::sample();
        assert!(store.listing(&ListingQuery::new()).is_none());

        store
            .dispatch(Action::CategoryNavigate {
                page: Page::Products,
                category: Some(Category::Tees),
            })
            .unwrap();
        let listing = store.listing(&ListingQuery::new()).unwrap();
        assert_eq!(listing.ids(), ["1", "6"]);
        assert_eq!(listing.total, 6);

        store
            .dispatch(Action::SetSearch {
                query: "polo".into(),
            })
            .unwrap();
        let listing = store.listing(&ListingQuery::new()).unwrap();
        assert_eq!(listing.ids(), ["6"]);
    }

    #[test]
    fn test_listing_scopes() {
        let mut store = Store::sample();

        store.dispatch(Action::Navigate { page: Page::NewArrivals }).unwrap();
        let query = ListingQuery::new().with_sort(SortKey::PriceHighToLow);
        assert_eq!(store.listing(&query).unwrap().ids(), ["2", "6"]);

        store.dispatch(Action::Navigate { page: Page::CoOrds }).unwrap();
        assert_eq!(store.listing(&query).unwrap().ids(), ["4"]);

        store
            .dispatch(Action::ToggleWishlist {
                product_id: ProductId::new("5"),
            })
            .unwrap();
        store.dispatch(Action::Navigate { page: Page::Wishlist }).unwrap();
        let query = ListingQuery::new().with_criteria(FilterCriteria::new().in_stock_only());
        assert_eq!(store.listing(&query).unwrap().ids(), ["5"]);
    }

    #[test]
    fn test_current_product() {
        let mut store = Store::sample();
        store.dispatch(Action::Navigate { page: Page::ProductDetail }).unwrap();
        assert!(store.current_product().is_none());

        store
            .dispatch(Action::SelectProduct {
                product_id: ProductId::new("2"),
            })
            .unwrap();
        assert_eq!(store.current_product().unwrap().id.as_str(), "2");
    }
}
