//! Listing filter criteria.

use crate::catalog::{Badge, Category, Product};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sizes offered in the filter panel, in display order.
pub const SIZE_OPTIONS: [&str; 12] = [
    "XS", "S", "M", "L", "XL", "XXL", "28", "30", "32", "34", "36", "38",
];

/// Upper bound of the default price range.
pub const DEFAULT_MAX_PRICE: Money = Money::new(10_000);

/// An inclusive price range with `min <= max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    min: Money,
    max: Money,
}

#[derive(Deserialize)]
struct RawPriceRange {
    min: Money,
    max: Money,
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = CommerceError;

    fn try_from(raw: RawPriceRange) -> Result<Self, Self::Error> {
        PriceRange::new(raw.min, raw.max)
    }
}

impl PriceRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: Money, max: Money) -> Result<Self, CommerceError> {
        if min > max {
            return Err(CommerceError::InvalidPriceRange {
                min: min.rupees(),
                max: max.rupees(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Money {
        self.min
    }

    pub fn max(&self) -> Money {
        self.max
    }

    /// Check whether a price falls inside the range (both ends inclusive).
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Money::zero(),
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// One kind of filter criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criterion {
    Category,
    PriceRange,
    Sizes,
    InStock,
    Badges,
    Query,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::Category => "category",
            Criterion::PriceRange => "price range",
            Criterion::Sizes => "sizes",
            Criterion::InStock => "in stock",
            Criterion::Badges => "badges",
            Criterion::Query => "search",
        };
        write!(f, "{}", name)
    }
}

/// Filter criteria for a product listing.
///
/// Criteria are ANDed together; the size and badge sets match when the
/// product has any of the selected values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterCriteria {
    /// Only this category.
    pub category: Option<Category>,
    /// Inclusive price range.
    pub price_range: PriceRange,
    /// Selected sizes; empty means any.
    pub sizes: Vec<String>,
    /// Only in-stock products.
    pub in_stock_only: bool,
    /// Selected badges; empty means any.
    pub badges: Vec<Badge>,
    /// Free-text search over name, description and category.
    pub query: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to a price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Restrict to in-stock products.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Add a size to the size set.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        let size = size.into();
        if !self.sizes.contains(&size) {
            self.sizes.push(size);
        }
        self
    }

    /// Add a badge to the badge set.
    pub fn with_badge(mut self, badge: Badge) -> Self {
        if !self.badges.contains(&badge) {
            self.badges.push(badge);
        }
        self
    }

    /// Set the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Select or deselect a size.
    pub fn toggle_size(&mut self, size: &str) {
        if let Some(pos) = self.sizes.iter().position(|s| s == size) {
            self.sizes.remove(pos);
        } else {
            self.sizes.push(size.to_string());
        }
    }

    /// Select or deselect a badge.
    pub fn toggle_badge(&mut self, badge: Badge) {
        if let Some(pos) = self.badges.iter().position(|b| *b == badge) {
            self.badges.remove(pos);
        } else {
            self.badges.push(badge);
        }
    }

    /// Reset the panel filters. The search text is not part of the panel
    /// and is kept.
    pub fn clear(&mut self) {
        let query = self.query.take();
        *self = Self {
            query,
            ..Self::default()
        };
    }

    /// Number of active panel selections, shown on the filter button.
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_some())
            + usize::from(self.price_range != PriceRange::default())
            + self.sizes.len()
            + usize::from(self.in_stock_only)
            + self.badges.len()
    }

    /// The normalized search text, if any.
    pub fn search_text(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Active criteria the product does not satisfy, in evaluation order.
    pub fn failed_criteria(&self, product: &Product) -> Vec<Criterion> {
        let mut failed = Vec::new();

        if let Some(category) = self.category {
            if product.category != category {
                failed.push(Criterion::Category);
            }
        }

        if !self.price_range.contains(product.price) {
            failed.push(Criterion::PriceRange);
        }

        if !self.sizes.is_empty() && !self.sizes.iter().any(|s| product.has_size(s)) {
            failed.push(Criterion::Sizes);
        }

        if self.in_stock_only && !product.in_stock {
            failed.push(Criterion::InStock);
        }

        if !self.badges.is_empty() {
            let selected = product
                .badge
                .map(|b| self.badges.contains(&b))
                .unwrap_or(false);
            if !selected {
                failed.push(Criterion::Badges);
            }
        }

        if let Some(text) = self.search_text() {
            if !product.search_haystack().iter().any(|h| h.contains(&text)) {
                failed.push(Criterion::Query);
            }
        }

        failed
    }

    /// Check if the product satisfies every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.failed_criteria(product).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    fn product(id: &str) -> Product {
        Catalog::sample()
            .require(&ProductId::new(id))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_price_range_validation() {
        assert!(PriceRange::new(Money::new(100), Money::new(100)).is_ok());
        assert_eq!(
            PriceRange::new(Money::new(200), Money::new(100)),
            Err(CommerceError::InvalidPriceRange { min: 200, max: 100 })
        );
    }

    #[test]
    fn test_price_range_deserialize_validates() {
        let ok: PriceRange = serde_json::from_str(r#"{"min":0,"max":2000}"#).unwrap();
        assert_eq!(ok.max(), Money::new(2000));
        assert!(serde_json::from_str::<PriceRange>(r#"{"min":5,"max":1}"#).is_err());
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::new(Money::new(1299), Money::new(2499)).unwrap();
        assert!(range.contains(Money::new(1299)));
        assert!(range.contains(Money::new(2499)));
        assert!(!range.contains(Money::new(2500)));
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::new();
        assert!(Catalog::sample().products().iter().all(|p| criteria.matches(p)));
        assert_eq!(criteria.active_count(), 0);
    }

    #[test]
    fn test_failed_criteria_names_each_failure() {
        let criteria = FilterCriteria::new()
            .with_category(Category::Tees)
            .with_price_range(PriceRange::new(Money::zero(), Money::new(1000)).unwrap())
            .with_size("32");

        let failed = criteria.failed_criteria(&product("1"));
        assert_eq!(
            failed,
            vec![Criterion::PriceRange, Criterion::Sizes]
        );

        let failed = criteria.failed_criteria(&product("3"));
        assert_eq!(
            failed,
            vec![Criterion::Category, Criterion::PriceRange]
        );
    }

    #[test]
    fn test_sizes_are_ored() {
        let criteria = FilterCriteria::new().with_size("XXL").with_size("32");
        assert!(criteria.matches(&product("1")));
        assert!(criteria.matches(&product("3")));
        assert!(!criteria.matches(&product("2")));
    }

    #[test]
    fn test_badge_filter_excludes_badgeless_products() {
        let criteria = FilterCriteria::new().with_badge(Badge::New);
        assert!(criteria.matches(&product("2")));
        assert!(!criteria.matches(&product("1")));
        assert_eq!(criteria.failed_criteria(&product("3")), vec![Criterion::Badges]);
    }

    #[test]
    fn test_in_stock_only() {
        let criteria = FilterCriteria::new().in_stock_only();
        assert!(criteria.matches(&product("1")));
        assert!(!criteria.matches(&product("1").with_in_stock(false)));
    }

    #[test]
    fn test_query_searches_name_description_and_category() {
        assert!(FilterCriteria::new().with_query("DENIM").matches(&product("5")));
        assert!(FilterCriteria::new().with_query("pockets").matches(&product("3")));
        assert!(FilterCriteria::new().with_query("co-ord").matches(&product("4")));
        assert!(!FilterCriteria::new().with_query("linen").matches(&product("1")));
    }

    #[test]
    fn test_blank_query_is_inactive() {
        let criteria = FilterCriteria::new().with_query("   ");
        assert_eq!(criteria.search_text(), None);
        assert!(criteria.matches(&product("1")));
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut criteria = FilterCriteria::new()
            .with_category(Category::Shirts)
            .with_query("linen");
        criteria.toggle_size("M");
        criteria.toggle_size("L");
        criteria.toggle_size("M");
        criteria.toggle_badge(Badge::Limited);
        assert_eq!(criteria.sizes, vec!["L".to_string()]);
        assert_eq!(criteria.active_count(), 3);

        criteria.clear();
        assert_eq!(criteria.active_count(), 0);
        assert_eq!(criteria.query.as_deref(), Some("linen"));
    }
}
