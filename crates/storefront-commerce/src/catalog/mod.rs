//! Product catalog module.
//!
//! Contains the product type, the fixed category and badge sets, and the
//! immutable catalog the rest of the storefront reads from.

mod category;
mod product;
mod registry;
mod sample;

pub use category::Category;
pub use product::{Badge, Product};
pub use registry::{most_reviewed, top_rated, Catalog, MOST_REVIEWED_LIMIT, TOP_RATED_MIN_RATING};
pub use sample::sample_products;
