//! Listing sort keys.

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    /// Sort by price, low to high.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Sort by price, high to low.
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Sort by highest rated.
    #[serde(rename = "rating")]
    Rating,
    /// Sort by name A-Z.
    #[serde(rename = "name")]
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
        SortKey::Rating,
        SortKey::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLowToHigh => "price-low",
            SortKey::PriceHighToLow => "price-high",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Name => "Name: A to Z",
        }
    }

    /// Compare two products under this key. `Newest` treats every pair as
    /// equal so a stable sort keeps catalog order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Newest => Ordering::Equal,
            SortKey::PriceLowToHigh => a.price.cmp(&b.price),
            SortKey::PriceHighToLow => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Name => compare_names(&a.name, &b.name),
        }
    }

    /// Stable in-place sort.
    pub fn sort(&self, products: &mut [&Product]) {
        if *self == SortKey::Newest {
            return;
        }
        products.sort_by(|a, b| self.compare(a, b));
    }
}

/// Case-insensitive ordering; on a tie lowercase sorts before uppercase.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::money::Money;

    fn sorted_ids(key: SortKey) -> Vec<String> {
        let catalog = Catalog::sample();
        let mut products: Vec<&Product> = catalog.products().iter().collect();
        key.sort(&mut products);
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLowToHigh);
        assert_eq!("NAME".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!(
            "popular".parse::<SortKey>(),
            Err(CommerceError::UnknownSortKey("popular".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_tags() {
        assert_eq!(
            serde_json::to_string(&SortKey::PriceHighToLow).unwrap(),
            "\"price-high\""
        );
    }

    #[test]
    fn test_newest_keeps_catalog_order() {
        assert_eq!(sorted_ids(SortKey::Newest), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_price_sorts() {
        assert_eq!(sorted_ids(SortKey::PriceLowToHigh), ["1", "6", "2", "3", "4", "5"]);
        assert_eq!(sorted_ids(SortKey::PriceHighToLow), ["5", "4", "3", "2", "6", "1"]);
    }

    #[test]
    fn test_rating_sort() {
        assert_eq!(sorted_ids(SortKey::Rating), ["5", "3", "4", "1", "6", "2"]);
    }

    #[test]
    fn test_name_sort() {
        // Cargo, Casual, Co-ord, Denim, Oversized, Polo
        assert_eq!(sorted_ids(SortKey::Name), ["3", "2", "4", "5", "1", "6"]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive_with_lowercase_first() {
        let a = Product::new("a", "apple", Money::new(1), Category::Tees);
        let b = Product::new("b", "Apple", Money::new(1), Category::Tees);
        let c = Product::new("c", "banana", Money::new(1), Category::Tees);
        let d = Product::new("d", "Avocado", Money::new(1), Category::Tees);
        let mut products = vec![&c, &b, &d, &a];
        SortKey::Name.sort(&mut products);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["apple", "Apple", "Avocado", "banana"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let a = Product::new("a", "A", Money::new(500), Category::Tees);
        let b = Product::new("b", "B", Money::new(500), Category::Tees);
        let c = Product::new("c", "C", Money::new(100), Category::Tees);
        let mut products = vec![&a, &b, &c];
        SortKey::PriceLowToHigh.sort(&mut products);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}
