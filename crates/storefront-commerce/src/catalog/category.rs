//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// The fixed set of storefront categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Tees,
    Shirts,
    Bottoms,
    CoOrds,
    Jackets,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Tees,
        Category::Shirts,
        Category::Bottoms,
        Category::CoOrds,
        Category::Jackets,
    ];

    /// The category tag used in data and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tees => "tees",
            Category::Shirts => "shirts",
            Category::Bottoms => "bottoms",
            Category::CoOrds => "co-ords",
            Category::Jackets => "jackets",
        }
    }

    /// Human-readable label shown in filter panels.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Tees => "T-Shirts & Tees",
            Category::Shirts => "Shirts",
            Category::Bottoms => "Bottoms",
            Category::CoOrds => "Co-ord Sets",
            Category::Jackets => "Jackets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_through_tag() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_serde_uses_tags() {
        assert_eq!(
            serde_json::to_string(&Category::CoOrds).unwrap(),
            "\"co-ords\""
        );
        let c: Category = serde_json::from_str("\"tees\"").unwrap();
        assert_eq!(c, Category::Tees);
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(
            "hats".parse::<Category>(),
            Err(CommerceError::UnknownCategory("hats".to_string()))
        );
    }
}
