//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StorefrontConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force, json } => init_config(force, json, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv(
        "catalog",
        config.store.catalog.as_deref().unwrap_or("(built-in sample)"),
    );

    ctx.output.info("");
    ctx.output.info("[pricing]");
    let policy = config.pricing_policy();
    ctx.output.kv(
        "free_shipping_threshold",
        &policy.free_shipping_threshold.display(),
    );
    ctx.output.kv("shipping_fee", &policy.shipping_fee.display());
    ctx.output.kv("tax_percent", &format!("{}%", policy.tax_percent));

    ctx.output.info("");
    ctx.output.info("[[coupons]]");
    for coupon in config.coupon_table().coupons() {
        ctx.output.list_item(&coupon.label());
    }

    ctx.output.info("");
    ctx.output.info("[listing]");
    ctx.output.kv("default_sort", config.listing.default_sort.as_str());
    ctx.output.kv(
        "default_max_price",
        &config.listing.default_max_price.to_string(),
    );

    ctx.output.info("");
    ctx.output.info("[simulation]");
    ctx.output.kv(
        "auth_latency_ms",
        &config.simulation.auth_latency_ms.to_string(),
    );
    ctx.output.kv(
        "tracking_latency_ms",
        &config.simulation.tracking_latency_ms.to_string(),
    );

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

async fn init_config(force: bool, json: bool, ctx: &Context) -> Result<()> {
    let file_name = if json { "storefront.json" } else { "storefront.toml" };
    let config_path = ctx.cwd.join(file_name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| StorefrontConfig::default().store.name);

    if json {
        let mut config = StorefrontConfig::default();
        config.store.name = name;
        config.save(&config_path.to_string_lossy())?;
    } else {
        std::fs::write(&config_path, generate_default_config(&name))?;
    }

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.errors();
    let mut warnings = ctx.config.warnings();

    if let Err(e) = ctx.catalog() {
        warnings.push(format!("catalog could not be loaded: {:#}", e));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
