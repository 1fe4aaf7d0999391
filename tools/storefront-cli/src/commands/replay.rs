//! Replay action scripts against a store.

use std::fs;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use storefront_commerce::cart::OrderSummary;
use storefront_commerce::store::{Action, Notification, OrderConfirmation, StoreState};

use super::ReplayArgs;
use crate::context::Context;

/// Outcome of one scripted action.
#[derive(Debug, Serialize)]
struct StepResult {
    index: usize,
    action: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<Notification>,
}

/// Everything `--json` prints after a replay.
#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    steps: Vec<StepResult>,
    rejected: usize,
    cart: OrderSummary,
    wishlist: usize,
    page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<&'a OrderConfirmation>,
}

/// Run the replay command.
pub async fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let script_path = ctx.resolve_path(&args.script);
    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script: {}", script_path.display()))?;
    let actions = Action::parse_script(&script)
        .with_context(|| format!("Failed to parse script: {}", script_path.display()))?;

    let mut store = ctx.store()?;
    if let Some(ref path) = args.load_state {
        let path = ctx.resolve_path(path);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read state: {}", path.display()))?;
        let state: StoreState = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse state: {}", path.display()))?;
        store = store
            .try_with_state(state)
            .with_context(|| format!("Saved state does not fit this store: {}", path.display()))?;
    }

    ctx.output.header(&format!(
        "Replaying {} actions from {}",
        actions.len(),
        script_path.display()
    ));

    let total = actions.len();
    let mut steps = Vec::with_capacity(total);
    let mut rejected = 0;

    for (i, action) in actions.into_iter().enumerate() {
        let name = action.name();
        ctx.output.step(i + 1, total, name);

        match store.dispatch(action) {
            Ok(notification) => {
                if let Some(ref note) = notification {
                    ctx.output.notification(note);
                }
                steps.push(StepResult {
                    index: i,
                    action: name,
                    ok: true,
                    notification,
                });
            }
            Err(err) => {
                rejected += 1;
                let note = Notification::from_error(&err);
                ctx.output.notification(&note);
                steps.push(StepResult {
                    index: i,
                    action: name,
                    ok: false,
                    notification: Some(note),
                });
                if args.strict {
                    bail!("Action {} ({}) rejected: {}", i + 1, name, err);
                }
            }
        }
    }

    if let Some(ref path) = args.save_state {
        let path = ctx.resolve_path(path);
        let json = serde_json::to_string_pretty(store.state())?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write state: {}", path.display()))?;
        ctx.output.debug(&format!("State written to {}", path.display()));
    }

    let report = ReplayReport {
        steps,
        rejected,
        cart: store.cart_summary()?,
        wishlist: store.wishlist_count(),
        page: store.state().navigation.page.to_string(),
        order: store.last_order(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Result");
    ctx.output.kv("Page", &report.page);
    ctx.output.kv("Wishlist", &report.wishlist.to_string());
    ctx.output.summary(&report.cart);
    if let Some(order) = report.order {
        ctx.output.info("");
        ctx.output
            .success(&format!("Order {} placed", order.order_number));
        ctx.output.summary(&order.summary);
    }

    if rejected > 0 {
        ctx.output
            .warn(&format!("{} of {} actions rejected", rejected, total));
    } else {
        ctx.output.success(&format!("All {} actions applied", total));
    }

    Ok(())
}
