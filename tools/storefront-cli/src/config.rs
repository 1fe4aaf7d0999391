//! CLI configuration.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::{Coupon, CouponTable, PricingPolicy};
use storefront_commerce::search::{PriceRange, SortKey, DEFAULT_MAX_PRICE};
use storefront_commerce::Money;
use storefront_observability::LogFormat;

/// Names searched for, in order, in each directory up the tree.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Store identity and catalog source.
    #[serde(default)]
    pub store: StoreConfig,

    /// Shipping and tax.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Redeemable coupon codes.
    #[serde(default = "default_coupons")]
    pub coupons: Vec<CouponConfig>,

    /// Listing defaults.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Simulated service delays.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            pricing: PricingConfig::default(),
            coupons: default_coupons(),
            listing: ListingConfig::default(),
            simulation: SimulationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            free_shipping_threshold: Money::new(self.pricing.free_shipping_threshold),
            shipping_fee: Money::new(self.pricing.shipping_fee),
            tax_percent: self.pricing.tax_percent,
        }
    }

    pub fn coupon_table(&self) -> CouponTable {
        CouponTable::new(
            self.coupons
                .iter()
                .map(|c| Coupon::new(&c.code, c.percent)),
        )
    }

    /// Default price filter; fails when the configured maximum is negative.
    pub fn default_price_range(&self) -> Result<PriceRange> {
        Ok(PriceRange::new(
            Money::zero(),
            Money::new(self.listing.default_max_price),
        )?)
    }

    /// Fail with every error when the config cannot be used to run a store.
    pub fn ensure_usable(&self) -> Result<()> {
        let errors = self.errors();
        if !errors.is_empty() {
            bail!(
                "Invalid configuration ({} error(s)): {}",
                errors.len(),
                errors.join("; ")
            );
        }
        Ok(())
    }

    /// Problems that make the config unusable.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.store.name.trim().is_empty() {
            errors.push("store.name is required".to_string());
        }
        if self.pricing.free_shipping_threshold < 0 {
            errors.push("pricing.free_shipping_threshold must not be negative".to_string());
        }
        if self.pricing.shipping_fee < 0 {
            errors.push("pricing.shipping_fee must not be negative".to_string());
        }
        if self.pricing.tax_percent > 100 {
            errors.push("pricing.tax_percent must be 0-100".to_string());
        }
        for (i, coupon) in self.coupons.iter().enumerate() {
            if coupon.code.trim().is_empty() {
                errors.push(format!("coupons[{}].code is required", i));
            }
            if coupon.percent > 100 {
                errors.push(format!("coupons[{}].percent must be 0-100", i));
            }
        }
        if self.listing.default_max_price < 0 {
            errors.push("listing.default_max_price must not be negative".to_string());
        }

        errors
    }

    /// Suspicious but usable settings.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(ref path) = self.store.catalog {
            if !std::path::Path::new(path).exists() {
                warnings.push(format!("store.catalog '{}' does not exist", path));
            }
        }
        if self.coupons.is_empty() {
            warnings.push("no coupons configured".to_string());
        }
        if self.simulation.auth_latency_ms > 10_000 || self.simulation.tracking_latency_ms > 10_000
        {
            warnings.push("simulated latency above 10 seconds".to_string());
        }

        warnings
    }
}

/// Store metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Catalog JSON file replacing the built-in sample catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_store_name() -> String {
    "BLUETHROATS".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            catalog: None,
        }
    }
}

/// Pricing rules, in whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: i64,

    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: i64,

    #[serde(default = "default_tax_percent")]
    pub tax_percent: u32,
}

fn default_free_shipping_threshold() -> i64 {
    1999
}

fn default_shipping_fee() -> i64 {
    99
}

fn default_tax_percent() -> u32 {
    18
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            shipping_fee: default_shipping_fee(),
            tax_percent: default_tax_percent(),
        }
    }
}

/// A coupon code entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouponConfig {
    pub code: String,
    pub percent: u32,
}

fn default_coupons() -> Vec<CouponConfig> {
    CouponTable::default()
        .coupons()
        .iter()
        .map(|c| CouponConfig {
            code: c.code.clone(),
            percent: c.percent_off,
        })
        .collect()
}

/// Listing defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingConfig {
    #[serde(default)]
    pub default_sort: SortKey,

    #[serde(default = "default_max_price")]
    pub default_max_price: i64,
}

fn default_max_price() -> i64 {
    DEFAULT_MAX_PRICE.rupees()
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            default_max_price: default_max_price(),
        }
    }
}

/// Delays for the simulated services, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    #[serde(default = "default_auth_latency_ms")]
    pub auth_latency_ms: u64,

    #[serde(default = "default_tracking_latency_ms")]
    pub tracking_latency_ms: u64,
}

fn default_auth_latency_ms() -> u64 {
    1000
}

fn default_tracking_latency_ms() -> u64 {
    1500
}

impl SimulationConfig {
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    pub fn tracking_latency(&self) -> Duration {
        Duration::from_millis(self.tracking_latency_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            auth_latency_ms: default_auth_latency_ms(),
            tracking_latency_ms: default_tracking_latency_ms(),
        }
    }
}

/// Log settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default storefront.toml.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Storefront configuration

[store]
name = "{name}"
# catalog = "catalog.json"

[pricing]
free_shipping_threshold = 1999
shipping_fee = 99
tax_percent = 18

[[coupons]]
code = "SAVE10"
percent = 10

[[coupons]]
code = "WELCOME20"
percent = 20

[[coupons]]
code = "FREESHIP"
percent = 5

[listing]
default_sort = "newest"
default_max_price = 10000

[simulation]
auth_latency_ms = 1000
tracking_latency_ms = 1500

[logging]
format = "human"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config("BLUETHROATS")).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert!(config.errors().is_empty());
    }

    #[test]
    fn test_empty_file_gets_defaults() {
        let config: StorefrontConfig = toml::from_str("").unwrap();
        assert_eq!(config.pricing_policy(), PricingPolicy::default());
        assert_eq!(config.coupon_table(), CouponTable::default());
        assert_eq!(config.simulation.tracking_latency(), Duration::from_millis(1500));
    }

    #[test]
    fn test_coupon_codes_normalized() {
        let config: StorefrontConfig = toml::from_str(
            r#"
[[coupons]]
code = "diwali"
percent = 30
"#,
        )
        .unwrap();
        let table = config.coupon_table();
        assert_eq!(table.lookup("DIWALI").unwrap().percent_off, 30);
        assert!(table.lookup("SAVE10").is_err());
    }

    #[test]
    fn test_errors_reported() {
        let mut config = StorefrontConfig::default();
        config.pricing.tax_percent = 150;
        config.coupons.push(CouponConfig {
            code: " ".into(),
            percent: 10,
        });
        let errors = config.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("tax_percent"));

        let message = config.ensure_usable().unwrap_err().to_string();
        assert!(message.contains("2 error(s)"));
        assert!(message.contains("coupons[3].code is required"));
        assert!(StorefrontConfig::default().ensure_usable().is_ok());
    }

    #[test]
    fn test_listing_sort_parses() {
        let config: StorefrontConfig = toml::from_str(
            r#"
[listing]
default_sort = "price-high"
"#,
        )
        .unwrap();
        assert_eq!(config.listing.default_sort, SortKey::PriceHighToLow);
        assert_eq!(config.default_price_range().unwrap(), PriceRange::default());
    }
}
