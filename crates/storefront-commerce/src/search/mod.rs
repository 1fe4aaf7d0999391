//! Listing query engine.
//!
//! Contains filter criteria, sort keys, and listings with facets.

mod filter;
mod query;
mod results;
mod sort;

pub use filter::{Criterion, FilterCriteria, PriceRange, DEFAULT_MAX_PRICE, SIZE_OPTIONS};
pub use query::{filter_and_sort, ListingQuery};
pub use results::{category_facet, Facet, FacetValue, Listing};
pub use sort::SortKey;
