//! Order tracking.

use anyhow::Result;
use console::style;
use storefront_commerce::tracking::{OrderTracker, TrackingRequest};

use super::TrackArgs;
use crate::context::Context;

/// Run the track command.
pub async fn run(args: TrackArgs, ctx: &Context) -> Result<()> {
    let request = TrackingRequest::new(args.order_number, args.email);
    // Blank fields are rejected before waiting on the tracker
    request.validate()?;

    let tracker = ctx.tracker();
    let spinner = ctx.output.spinner("Tracking order...");
    let result = tracker.track(&request).await;
    spinner.finish_and_clear();
    let info = result?;

    ctx.logger
        .debug_builder("order tracked")
        .field("order_number", info.order_number.as_str())
        .field("status", info.status.as_str())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&info);
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", info.order_number));
    ctx.output.kv("Status", &style(&info.status).yellow().to_string());
    ctx.output.kv("Current location", &info.current_location);
    ctx.output.kv(
        "Estimated delivery",
        &info.estimated_delivery.format("%d %b %Y").to_string(),
    );

    ctx.output.info("");
    ctx.output.info("Items");
    for item in &info.items {
        ctx.output.list_item(&format!(
            "{} (Size {}) x{}",
            item.name, item.size, item.quantity
        ));
    }

    ctx.output.info("");
    ctx.output.info("Timeline");
    for event in &info.timeline {
        let marker = if event.completed {
            style("●").green()
        } else {
            style("○").dim()
        };
        println!(
            "  {} {:<18} {} {}",
            marker,
            event.status,
            style(event.date.format("%d %b")).dim(),
            style(&event.time).dim()
        );
        ctx.output.debug(&event.description);
    }

    Ok(())
}
