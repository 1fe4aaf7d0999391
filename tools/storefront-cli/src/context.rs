//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_auth::SimulatedAuthenticator;
use storefront_commerce::catalog::Catalog;
use storefront_commerce::store::{Store, StoreEnv};
use storefront_commerce::tracking::SimulatedOrderTracker;
use storefront_observability::{SessionId, StructuredLogger};

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Loaded configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Session logger shared by every command.
    pub logger: StructuredLogger,
    /// Catalog file given on the command line.
    catalog_override: Option<String>,
}

impl Context {
    /// Load context from a config file, or search for one.
    ///
    /// A config with errors is refused unless `allow_invalid` is set, which
    /// only the `config` commands do so they can show and validate it.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<String>,
        output: Output,
        allow_invalid: bool,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        if !allow_invalid {
            config.ensure_usable().with_context(|| match config_path {
                Some(ref path) => format!("Refusing to use {}", path.display()),
                None => "Refusing to use the default configuration".to_string(),
            })?;
        }

        let logger = StructuredLogger::new(SessionId::generate())
            .with_component("cli")
            .with_format(config.logging.format);

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            logger,
            catalog_override,
        })
    }

    /// The catalog: a JSON file if one is configured, else the sample.
    pub fn catalog(&self) -> Result<Catalog> {
        let path = self
            .catalog_override
            .as_deref()
            .or(self.config.store.catalog.as_deref());

        match path {
            Some(path) => {
                let path = self.resolve_path(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                let catalog = Catalog::from_json(&json)
                    .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
                self.output
                    .debug(&format!("Loaded {} products from {}", catalog.len(), path.display()));
                Ok(catalog)
            }
            None => Ok(Catalog::sample()),
        }
    }

    /// A fresh store wired to the configured catalog, coupons and pricing.
    pub fn store(&self) -> Result<Store> {
        let env = StoreEnv::new(self.catalog()?)
            .with_coupons(self.config.coupon_table())
            .with_pricing(self.config.pricing_policy());
        Ok(Store::new(env).with_logger(self.logger.clone()))
    }

    pub fn authenticator(&self) -> SimulatedAuthenticator {
        SimulatedAuthenticator::new().with_latency(self.config.simulation.auth_latency())
    }

    pub fn tracker(&self) -> SimulatedOrderTracker {
        SimulatedOrderTracker::new().with_latency(self.config.simulation.tracking_latency())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<(StorefrontConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = StorefrontConfig::load(config_path.to_str()?) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
