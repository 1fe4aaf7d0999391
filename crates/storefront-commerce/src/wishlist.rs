//! Wishlist of saved products.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;

/// What a toggle did to the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishlistChange {
    Added,
    Removed,
}

impl WishlistChange {
    /// Notification text announcing the change.
    pub fn message(&self) -> &'static str {
        match self {
            WishlistChange::Added => "Added to wishlist!",
            WishlistChange::Removed => "Removed from wishlist!",
        }
    }
}

/// A set of product ids.
///
/// Membership is all that matters: toggling an id twice restores the
/// previous wishlist exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Wishlist {
    ids: BTreeSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the id if present, otherwise add it.
    pub fn toggle(&mut self, id: &ProductId) -> WishlistChange {
        if self.ids.remove(id) {
            WishlistChange::Removed
        } else {
            self.ids.insert(id.clone());
            WishlistChange::Added
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Ids in id order.
    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wishlisted products, in catalog order.
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .iter()
            .filter(|p| self.contains(&p.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new("2");

        assert_eq!(wishlist.toggle(&id), WishlistChange::Added);
        assert!(wishlist.contains(&id));
        assert_eq!(wishlist.toggle(&id), WishlistChange::Removed);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_double_toggle_of_existing_id_restores() {
        let mut wishlist = Wishlist::new();
        for id in ["5", "6"] {
            wishlist.toggle(&ProductId::new(id));
        }
        let before = wishlist.clone();

        let id = ProductId::new("5");
        assert_eq!(wishlist.toggle(&id), WishlistChange::Removed);
        assert_eq!(wishlist.toggle(&id), WishlistChange::Added);
        assert_eq!(wishlist, before);
        assert_eq!(
            wishlist.ids().map(ProductId::as_str).collect::<Vec<_>>(),
            ["5", "6"]
        );
    }

    #[test]
    fn test_duplicate_ids_collapse_on_deserialize() {
        let wishlist: Wishlist = serde_json::from_str(r#"["3","1","3"]"#).unwrap();
        assert_eq!(wishlist.len(), 2);
        assert!(wishlist.contains(&ProductId::new("3")));
    }

    #[test]
    fn test_messages() {
        assert_eq!(WishlistChange::Added.message(), "Added to wishlist!");
        assert_eq!(WishlistChange::Removed.message(), "Removed from wishlist!");
    }

    #[test]
    fn test_products_in_catalog_order() {
        let catalog = Catalog::sample();
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&ProductId::new("5"));
        wishlist.toggle(&ProductId::new("2"));

        let names: Vec<&str> = wishlist
            .products(&catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Casual Linen Shirt - White", "Denim Jacket - Light Blue"]);
    }
}
