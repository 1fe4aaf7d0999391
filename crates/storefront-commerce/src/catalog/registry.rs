//! The immutable product catalog.

use std::collections::HashSet;

use crate::catalog::{sample_products, Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Minimum rating for the "top rated" shelf.
pub const TOP_RATED_MIN_RATING: f64 = 4.5;

/// Number of products on the "most reviewed" shelf.
pub const MOST_REVIEWED_LIMIT: usize = 4;

/// An ordered, read-only list of products with unique ids.
///
/// Catalog order is the storefront's "newest" order; listings that do not
/// sort keep it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            products: sample_products(),
        }
    }

    /// Load a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Products flagged as new arrivals.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Products flagged as bestsellers.
    pub fn bestsellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_bestseller).collect()
    }

    /// Products in one category.
    pub fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}

/// Products rated at least [`TOP_RATED_MIN_RATING`], in input order.
pub fn top_rated<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|p| p.rating >= TOP_RATED_MIN_RATING)
        .collect()
}

/// The [`MOST_REVIEWED_LIMIT`] products with the most reviews.
pub fn most_reviewed<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
    let mut products: Vec<&Product> = products.into_iter().collect();
    products.sort_by(|a, b| b.reviews.cmp(&a.reviews));
    products.truncate(MOST_REVIEWED_LIMIT);
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Product::new("1", "A", Money::new(100), Category::Tees);
        let b = Product::new("1", "B", Money::new(200), Category::Shirts);
        assert_eq!(
            Catalog::new(vec![a, b]),
            Err(CommerceError::DuplicateProduct("1".to_string()))
        );
    }

    #[test]
    fn test_require() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog.require(&ProductId::new("3")).unwrap().name,
            "Cargo Joggers - Olive"
        );
        assert_eq!(
            catalog.require(&ProductId::new("99")),
            Err(CommerceError::ProductNotFound("99".to_string()))
        );
    }

    #[test]
    fn test_shelves() {
        let catalog = Catalog::sample();
        let ids = |ps: Vec<&Product>| ps.iter().map(|p| p.id.to_string()).collect::<Vec<_>>();

        assert_eq!(ids(catalog.new_arrivals()), ["2", "6"]);
        assert_eq!(ids(catalog.in_category(Category::CoOrds)), ["4"]);

        let best = catalog.bestsellers();
        assert_eq!(ids(top_rated(best.iter().copied())), ["1", "5"]);
        assert_eq!(ids(top_rated(catalog.products())), ["1", "3", "4", "5"]);
        assert_eq!(ids(most_reviewed(catalog.products())), ["4", "3", "1", "5"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "id": "10",
            "name": "Bomber Jacket",
            "price": 4599,
            "image": "a.jpg",
            "hoverImage": "b.jpg",
            "category": "jackets",
            "sizes": ["M", "L"],
            "inStock": false,
            "rating": 4.1,
            "reviews": 12,
            "badge": "NEW"
        }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let p = catalog.require(&ProductId::new("10")).unwrap();
        assert_eq!(p.price, Money::new(4599));
        assert!(!p.in_stock);
        assert!(!p.is_new);
        assert_eq!(p.original_price, None);
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = r#"[{"id":"1","name":"x","price":1,"image":"","hoverImage":"",
            "category":"hats","sizes":[],"inStock":true,"rating":0,"reviews":0}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CommerceError::Serialization(_))
        ));
    }
}
