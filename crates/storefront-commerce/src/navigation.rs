//! Page navigation and selection.
//!
//! Tracks which page is showing plus the product, category and search text
//! the pages read from. Informational pages only exist here as ids; nothing
//! in this crate renders them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Category, Product};
use crate::ids::ProductId;

/// A storefront page.
///
/// Deserializing never fails: unknown ids become [`Page::Home`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Page {
    #[default]
    Home,
    Products,
    ProductDetail,
    Cart,
    Checkout,
    Wishlist,
    NewArrivals,
    CoOrds,
    Bestsellers,
    About,
    Contact,
    SizeGuide,
    ShippingReturns,
    TrackOrder,
    Admin,
}

impl Page {
    pub const ALL: [Page; 15] = [
        Page::Home,
        Page::Products,
        Page::ProductDetail,
        Page::Cart,
        Page::Checkout,
        Page::Wishlist,
        Page::NewArrivals,
        Page::CoOrds,
        Page::Bestsellers,
        Page::About,
        Page::Contact,
        Page::SizeGuide,
        Page::ShippingReturns,
        Page::TrackOrder,
        Page::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Products => "products",
            Page::ProductDetail => "product-detail",
            Page::Cart => "cart",
            Page::Checkout => "checkout",
            Page::Wishlist => "wishlist",
            Page::NewArrivals => "new-arrivals",
            Page::CoOrds => "co-ords",
            Page::Bestsellers => "bestsellers",
            Page::About => "about",
            Page::Contact => "contact",
            Page::SizeGuide => "size-guide",
            Page::ShippingReturns => "shipping-returns",
            Page::TrackOrder => "track-order",
            Page::Admin => "admin",
        }
    }

    /// Resolve a page id; unknown ids fall back to the home page.
    pub fn from_id(id: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|p| p.as_str() == id.trim())
            .unwrap_or_default()
    }

    /// The product set a listing page draws from, if this page lists
    /// products.
    pub fn listing_scope(&self) -> Option<ListingScope> {
        match self {
            Page::Products => Some(ListingScope::All),
            Page::NewArrivals => Some(ListingScope::NewArrivals),
            Page::CoOrds => Some(ListingScope::Category(Category::CoOrds)),
            Page::Bestsellers => Some(ListingScope::Bestsellers),
            Page::Wishlist => Some(ListingScope::Wishlist),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Page {
    fn from(id: String) -> Self {
        Page::from_id(&id)
    }
}

impl FromStr for Page {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Page::from_id(s))
    }
}

/// Which products a listing page starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "scope", content = "category")]
pub enum ListingScope {
    /// The whole catalog.
    All,
    /// Products flagged new.
    NewArrivals,
    /// One category.
    Category(Category),
    /// Products flagged bestseller.
    Bestsellers,
    /// Wishlisted products.
    Wishlist,
}

impl ListingScope {
    /// Whether the header search narrows this listing.
    pub fn uses_search(&self) -> bool {
        matches!(
            self,
            ListingScope::All | ListingScope::NewArrivals | ListingScope::Category(_)
        )
    }
}

/// Current page and selection state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Navigation {
    /// Page being shown.
    pub page: Page,
    /// Product chosen for the detail page.
    pub selected_product: Option<ProductId>,
    /// Category chosen in menus; `None` means all categories.
    pub selected_category: Option<Category>,
    /// Header search text.
    pub search: String,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a page.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Remember a product without changing page.
    pub fn select_product(&mut self, id: ProductId) {
        self.selected_product = Some(id);
    }

    /// Select a product and show its detail page.
    pub fn open_product(&mut self, id: ProductId) {
        self.selected_product = Some(id);
        self.page = Page::ProductDetail;
    }

    /// Choose a category; `None` selects all.
    pub fn select_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    /// Menu navigation: show a page with a category and clear the search.
    pub fn category_navigate(&mut self, page: Page, category: Option<Category>) {
        self.page = page;
        self.selected_category = category;
        self.search.clear();
    }

    /// Update the header search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// The product the detail page shows, or `None` when the page is not
    /// the detail page or nothing valid is selected.
    pub fn current_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        if self.page != Page::ProductDetail {
            return None;
        }
        self.selected_product
            .as_ref()
            .and_then(|id| catalog.get(id))
    }
}

/// Parse a menu category argument, where `all` means no category.
pub fn parse_category_selection(value: &str) -> Result<Option<Category>, crate::CommerceError> {
    if value.trim().eq_ignore_ascii_case("all") || value.trim().is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.as_str()), page);
        }
        assert_eq!(Page::from_id("nowhere"), Page::Home);
        let page: Page = serde_json::from_str("\"nowhere\"").unwrap();
        assert_eq!(page, Page::Home);
        assert_eq!(
            serde_json::to_string(&Page::ShippingReturns).unwrap(),
            "\"shipping-returns\""
        );
    }

    #[test]
    fn test_open_product() {
        let catalog = Catalog::sample();
        let mut nav = Navigation::new();
        assert_eq!(nav.page, Page::Home);

        nav.open_product(ProductId::new("5"));
        assert_eq!(nav.page, Page::ProductDetail);
        assert_eq!(nav.current_product(&catalog).unwrap().name, "Denim Jacket - Light Blue");
    }

    #[test]
    fn test_detail_without_selection_has_no_content() {
        let catalog = Catalog::sample();
        let mut nav = Navigation::new();
        nav.navigate(Page::ProductDetail);
        assert!(nav.current_product(&catalog).is_none());

        nav.select_product(ProductId::new("404"));
        assert!(nav.current_product(&catalog).is_none());
    }

    #[test]
    fn test_category_navigate_clears_search() {
        let mut nav = Navigation::new();
        nav.set_search("denim");
        nav.select_category(Some(Category::Tees));

        nav.category_navigate(Page::CoOrds, Some(Category::CoOrds));
        assert_eq!(nav.page, Page::CoOrds);
        assert_eq!(nav.selected_category, Some(Category::CoOrds));
        assert!(nav.search.is_empty());
    }

    #[test]
    fn test_parse_category_selection() {
        assert_eq!(parse_category_selection("all").unwrap(), None);
        assert_eq!(
            parse_category_selection("jackets").unwrap(),
            Some(Category::Jackets)
        );
        assert!(parse_category_selection("hats").is_err());
    }

    #[test]
    fn test_listing_scopes() {
        assert_eq!(Page::Products.listing_scope(), Some(ListingScope::All));
        assert_eq!(
            Page::CoOrds.listing_scope(),
            Some(ListingScope::Category(Category::CoOrds))
        );
        assert_eq!(Page::About.listing_scope(), None);
    }
}
