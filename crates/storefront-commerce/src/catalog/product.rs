//! Product and badge types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Promotional badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Badge {
    New,
    Bestseller,
    Limited,
    Trending,
}

impl Badge {
    /// Every badge, in filter panel order.
    pub const ALL: [Badge; 4] = [Badge::New, Badge::Bestseller, Badge::Limited, Badge::Trending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::New => "NEW",
            Badge::Bestseller => "BESTSELLER",
            Badge::Limited => "LIMITED",
            Badge::Trending => "TRENDING",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Badge {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Badge::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownBadge(s.to_string()))
    }
}

/// A product in the catalog.
///
/// Field names serialize in camelCase so catalog files use the same keys
/// as the storefront's product data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before markdown, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Primary image URL.
    pub image: String,
    /// Image shown on hover.
    pub hover_image: String,
    /// Gallery image URLs for the detail page.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category tag.
    pub category: Category,
    /// Available sizes, in display order.
    pub sizes: Vec<String>,
    /// Whether the product can be bought.
    pub in_stock: bool,
    /// Average rating from 0 to 5.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fabric composition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric: Option<String>,
    /// Care instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care: Option<String>,
    /// Promotional badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Listed under new arrivals.
    #[serde(default)]
    pub is_new: bool,
    /// Listed under bestsellers.
    #[serde(default)]
    pub is_bestseller: bool,
}

impl Product {
    /// Create a new in-stock product with no sizes or extras.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            hover_image: String::new(),
            images: Vec::new(),
            category,
            sizes: Vec::new(),
            in_stock: true,
            rating: 0.0,
            reviews: 0,
            description: None,
            fabric: None,
            care: None,
            badge: None,
            is_new: false,
            is_bestseller: false,
        }
    }

    /// Set the original (pre-sale) price.
    pub fn with_original_price(mut self, price: Money) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set the available sizes.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the primary and hover images.
    pub fn with_images(mut self, image: impl Into<String>, hover: impl Into<String>) -> Self {
        self.image = image.into();
        self.hover_image = hover.into();
        self
    }

    /// Set the detail page gallery.
    pub fn with_gallery<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Set description, fabric and care text.
    pub fn with_details(
        mut self,
        description: impl Into<String>,
        fabric: impl Into<String>,
        care: impl Into<String>,
    ) -> Self {
        self.description = Some(description.into());
        self.fabric = Some(fabric.into());
        self.care = Some(care.into());
        self
    }

    /// Set the badge.
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Set stock status.
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Mark as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Mark as a bestseller.
    pub fn bestseller(mut self) -> Self {
        self.is_bestseller = true;
        self
    }

    /// Check if the product is marked down from its original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig > self.price)
            .unwrap_or(false)
    }

    /// Rounded percentage off the original price, if on sale.
    pub fn discount_percent(&self) -> Option<u32> {
        let orig = self.original_price?.rupees();
        if orig <= 0 || orig <= self.price.rupees() {
            return None;
        }
        let off = (orig - self.price.rupees()) as f64 / orig as f64 * 100.0;
        Some(off.round() as u32)
    }

    /// Check whether a size is offered.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Images for the detail page; falls back to the primary image.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Lowercased text searched by free-text queries.
    pub(crate) fn search_haystack(&self) -> [String; 3] {
        [
            self.name.to_lowercase(),
            self.description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            self.category.as_str().to_string(),
        ]
    }
}
