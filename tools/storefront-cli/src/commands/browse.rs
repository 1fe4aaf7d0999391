//! Product listings.

use anyhow::{bail, Result};
use storefront_commerce::catalog::{most_reviewed, top_rated, Badge, Product};
use storefront_commerce::navigation::{parse_category_selection, ListingScope, Page};
use storefront_commerce::search::{FilterCriteria, ListingQuery, PriceRange, SortKey};
use storefront_commerce::store::Action;
use storefront_commerce::Money;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{price_label, rating_label, stock_badge};

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let (page, scope) = listing_page(&args.page)?;

    let query = build_query(&args, ctx)?;

    let mut store = ctx.store()?;
    store.dispatch(Action::Navigate { page })?;
    if let Some(search) = args.search.as_deref() {
        if !scope.uses_search() {
            ctx.output
                .warn(&format!("Search is not available on {}; ignoring it", page));
        }
        store.dispatch(Action::SetSearch {
            query: search.to_string(),
        })?;
    }

    let Some(listing) = store.listing(&query) else {
        bail!("'{}' does not list products", page);
    };

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&format!("{} - {}", ctx.config.store.name, page_title(page)));
    ctx.output.info(&listing.summary());
    if query.criteria.active_count() > 0 {
        ctx.output.debug(&format!(
            "{} active filters, sorted by {}",
            query.criteria.active_count(),
            query.sort.display_name()
        ));
    }
    println!();

    for product in &listing.products {
        let badge = product.badge.map(|b| b.as_str()).unwrap_or("");
        let price = price_label(product);
        let rating = rating_label(product);
        let stock = stock_badge(product.in_stock);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &price,
                &rating,
                &stock,
                badge,
            ],
            &[4, 32, 12, 12, 12, 10],
        );
    }

    if listing.is_empty() {
        ctx.output.warn("No products match these filters");
    }

    if scope == ListingScope::Bestsellers {
        print_shelf(ctx, "Top Rated", &top_rated(listing.products.iter().copied()));
        print_shelf(ctx, "Most Reviewed", &most_reviewed(listing.products.iter().copied()));
    }

    if let Some(facet) = listing.facets.first() {
        ctx.output.info("");
        ctx.output.info(&facet.name);
        for value in &facet.values {
            let marker = if value.selected { "*" } else { " " };
            ctx.output
                .list_item(&format!("{} {} ({})", marker, value.label, value.count));
        }
    }

    Ok(())
}

/// Resolve a page id to a page this command can list.
///
/// The wishlist is excluded: every run starts from an empty store, so it
/// would always be empty.
fn listing_page(id: &str) -> Result<(Page, ListingScope)> {
    let page = Page::from_id(id);
    match page.listing_scope() {
        Some(ListingScope::Wishlist) | None => bail!(
            "'{}' is not a listing page (try products, new-arrivals, co-ords, bestsellers)",
            id
        ),
        Some(scope) => Ok((page, scope)),
    }
}

fn print_shelf(ctx: &Context, title: &str, products: &[&Product]) {
    if products.is_empty() {
        return;
    }
    ctx.output.info("");
    ctx.output.info(title);
    for product in products {
        ctx.output.list_item(&format!(
            "{} {} ({}, {} reviews)",
            product.id,
            product.name,
            rating_label(product),
            product.reviews
        ));
    }
}

fn build_query(args: &BrowseArgs, ctx: &Context) -> Result<ListingQuery> {
    let mut criteria = FilterCriteria::new();

    if let Some(category) = args.category.as_deref() {
        criteria.category = parse_category_selection(category)?;
    }

    let defaults = ctx.config.default_price_range()?;
    if args.min_price.is_some() || args.max_price.is_some() {
        let min = args.min_price.map(Money::new).unwrap_or(defaults.min());
        let max = args.max_price.map(Money::new).unwrap_or(defaults.max());
        criteria = criteria.with_price_range(PriceRange::new(min, max)?);
    } else {
        criteria = criteria.with_price_range(defaults);
    }

    for size in &args.sizes {
        criteria = criteria.with_size(size.trim());
    }
    for badge in &args.badges {
        criteria = criteria.with_badge(badge.parse::<Badge>()?);
    }
    if args.in_stock {
        criteria = criteria.in_stock_only();
    }

    let sort = match args.sort.as_deref() {
        Some(key) => key.parse::<SortKey>()?,
        None => ctx.config.listing.default_sort,
    };

    Ok(ListingQuery::new().with_criteria(criteria).with_sort(sort))
}

fn page_title(page: Page) -> &'static str {
    match page {
        Page::NewArrivals => "New Arrivals",
        Page::CoOrds => "Co-ords",
        Page::Bestsellers => "Bestsellers",
        Page::Wishlist => "Wishlist",
        _ => "All Products",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_pages() {
        assert_eq!(
            listing_page("co-ords").unwrap(),
            (Page::CoOrds, ListingScope::CoOrds)
        );
        assert_eq!(
            listing_page("bestsellers").unwrap().1,
            ListingScope::Bestsellers
        );
    }

    #[test]
    fn test_wishlist_and_content_pages_rejected() {
        assert!(listing_page("wishlist").is_err());
        assert!(listing_page("about").is_err());
    }
}
