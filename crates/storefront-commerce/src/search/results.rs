//! Listing results and facets.

use serde::Serialize;

use crate::catalog::{Category, Product};

/// A filtered, sorted view over a set of candidate products.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Listing<'a> {
    /// Matching products in display order.
    pub products: Vec<&'a Product>,
    /// Number of candidate products before filtering.
    pub total: usize,
    /// Facets computed over the candidate set.
    pub facets: Vec<Facet>,
}

impl<'a> Listing<'a> {
    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Result count line (e.g. "Showing 2 of 6 products").
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.products.len(), self.total)
    }

    /// Ids of the matching products, in order.
    pub fn ids(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.id.as_str()).collect()
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Facet {
    /// Facet name (e.g., "Category").
    pub name: String,
    /// Field this facet filters on.
    pub field: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty facet.
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(
        &mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        count: usize,
        selected: bool,
    ) {
        self.values.push(FacetValue {
            value: value.into(),
            label: label.into(),
            count,
            selected,
        });
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Label shown in the panel.
    pub label: String,
    /// Number of candidate products with this value.
    pub count: usize,
    /// Whether this value is currently selected.
    pub selected: bool,
}

/// Per-category counts over the candidate set, in menu order.
pub fn category_facet<'a>(
    candidates: impl IntoIterator<Item = &'a Product>,
    selected: Option<Category>,
) -> Facet {
    let mut counts = [0usize; Category::ALL.len()];
    for product in candidates {
        if let Some(idx) = Category::ALL.iter().position(|c| *c == product.category) {
            counts[idx] += 1;
        }
    }

    let mut facet = Facet::new("Category", "category");
    for (category, count) in Category::ALL.iter().zip(counts) {
        facet.add_value(
            category.as_str(),
            category.label(),
            count,
            selected == Some(*category),
        );
    }
    facet
}
