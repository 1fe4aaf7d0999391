//! Listing queries.

use crate::catalog::Product;
use crate::search::{category_facet, FilterCriteria, Listing, SortKey};
use serde::{Deserialize, Serialize};

/// Filter then sort a product list.
///
/// A non-empty `search` replaces `criteria.query`; filtering runs first and
/// the sort is stable.
pub fn filter_and_sort<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    criteria: &FilterCriteria,
    sort: SortKey,
    search: &str,
) -> Vec<&'a Product> {
    let effective;
    let criteria = if search.trim().is_empty() {
        criteria
    } else {
        effective = FilterCriteria {
            query: Some(search.to_string()),
            ..criteria.clone()
        };
        &effective
    };

    let mut matched: Vec<&Product> = products
        .into_iter()
        .filter(|p| criteria.matches(p))
        .collect();
    sort.sort(&mut matched);
    matched
}

/// A listing query: filter criteria plus a sort key.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListingQuery {
    /// Filters to apply.
    pub criteria: FilterCriteria,
    /// Sort order.
    pub sort: SortKey,
}

impl ListingQuery {
    /// Create a query that lists everything in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter criteria.
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query over a candidate set.
    pub fn run<'a>(&self, candidates: &[&'a Product]) -> Listing<'a> {
        let products = filter_and_sort(candidates.iter().copied(), &self.criteria, self.sort, "");
        Listing {
            products,
            total: candidates.len(),
            facets: vec![category_facet(
                candidates.iter().copied(),
                self.criteria.category,
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    #[test]
    fn test_query_builder() {
        let query = ListingQuery::new()
            .with_criteria(FilterCriteria::new().with_category(Category::Tees))
            .with_sort(SortKey::PriceHighToLow);

        assert_eq!(query.criteria.category, Some(Category::Tees));
        assert_eq!(query.sort, SortKey::PriceHighToLow);
    }

    #[test]
    fn test_run_filters_sorts_and_counts() {
        let catalog = Catalog::sample();
        let candidates: Vec<&Product> = catalog.products().iter().collect();
        let listing = ListingQuery::new()
            .with_criteria(FilterCriteria::new().with_category(Category::Tees))
            .with_sort(SortKey::PriceHighToLow)
            .run(&candidates);

        assert_eq!(listing.ids(), ["6", "1"]);
        assert_eq!(listing.total, 6);
        assert_eq!(listing.facets.len(), 1);
    }

    #[test]
    fn test_search_overrides_criteria_query() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::new().with_query("linen");

        let by_criteria = filter_and_sort(catalog.products(), &criteria, SortKey::Newest, "");
        assert_eq!(by_criteria.len(), 1);

        let by_search = filter_and_sort(catalog.products(), &criteria, SortKey::Newest, "black");
        let ids: Vec<&str> = by_search.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "6"]);
    }

    #[test]
    fn test_no_matches_is_empty_listing() {
        let catalog = Catalog::sample();
        let candidates: Vec<&Product> = catalog.products().iter().collect();
        let listing = ListingQuery::new()
            .with_criteria(FilterCriteria::new().with_query("sneakers"))
            .run(&candidates);
        assert!(listing.is_empty());
        assert_eq!(listing.summary(), "Showing 0 of 6 products");
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: ListingQuery = serde_json::from_str(r#"{"sort":"rating"}"#).unwrap();
        assert_eq!(query.sort, SortKey::Rating);
        assert_eq!(query.criteria, FilterCriteria::default());
    }
}
