//! Product details.

use anyhow::Result;
use storefront_commerce::catalog::top_rated;
use storefront_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{price_label, rating_label, stock_badge};

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(&ProductId::new(args.id.trim()))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Price", &price_label(product));
    ctx.output.kv("Category", product.category.label());
    ctx.output.kv("Rating", &rating_label(product));
    ctx.output.kv("Availability", &stock_badge(product.in_stock));
    if let Some(badge) = product.badge {
        ctx.output.kv("Badge", badge.as_str());
    }
    if !product.sizes.is_empty() {
        ctx.output.kv("Sizes", &product.sizes.join(" "));
    }
    if let Some(ref description) = product.description {
        ctx.output.kv("Description", description);
    }
    if let Some(ref fabric) = product.fabric {
        ctx.output.kv("Fabric", fabric);
    }
    if let Some(ref care) = product.care {
        ctx.output.kv("Care", care);
    }

    let gallery = product.gallery();
    if !gallery.is_empty() {
        ctx.output.info("");
        ctx.output.info("Images");
        for url in gallery {
            ctx.output.list_item(url);
        }
    }

    let related: Vec<_> = top_rated(catalog.in_category(product.category))
        .into_iter()
        .filter(|p| p.id != product.id)
        .collect();
    if !related.is_empty() {
        ctx.output.info("");
        ctx.output.info("You may also like");
        for p in related {
            ctx.output
                .list_item(&format!("{} {} ({})", p.id, p.name, p.price.display()));
        }
    }

    Ok(())
}
