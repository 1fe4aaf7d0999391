//! Interactive checkout.

use anyhow::{bail, Context as _, Result};
use dialoguer::{Confirm, Input, Select};
use storefront_commerce::checkout::{
    CheckoutStep, ContactInfo, PaymentMethod, ShippingAddress, STATE_OPTIONS,
};
use storefront_commerce::store::{Action, Notification, Store};
use storefront_commerce::ProductId;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.store()?;

    for item in &args.items {
        let (product_id, size, quantity) = parse_item(item)?;
        let note = store.dispatch(Action::AddToCart {
            product_id,
            size: Some(size),
            quantity,
        })?;
        if let Some(note) = note {
            ctx.output.debug(&note.message);
        }
    }

    if let Some(code) = args.coupon {
        match store.dispatch(Action::ApplyCoupon { code }) {
            Ok(Some(note)) => ctx.output.notification(&note),
            Ok(None) => {}
            Err(err) => ctx.output.notification(&Notification::from_error(&err)),
        }
    }

    ctx.output.header("Your Cart");
    for line in store.state().cart.lines() {
        let total = line.line_total()?;
        ctx.output.table_row(
            &[
                &line.product.name,
                &format!("Size {}", line.size),
                &format!("x{}", line.quantity),
                &total.display(),
            ],
            &[32, 8, 5, 10],
        );
    }
    ctx.output.summary(&store.cart_summary()?);

    store.dispatch(Action::StartCheckout)?;

    while let Some(step) = store.state().checkout.as_ref().map(|flow| flow.step) {
        ctx.output.header(&format!("Checkout - {}", step.display_name()));
        ctx.output.step(
            usize::from(step.number()),
            CheckoutStep::ALL.len(),
            step.heading(),
        );

        let action = match step {
            CheckoutStep::Information => Action::CheckoutSetContact {
                contact: prompt_contact(&store)?,
            },
            CheckoutStep::Shipping => Action::CheckoutSetShipping {
                address: prompt_shipping(&store)?,
            },
            CheckoutStep::Payment => Action::CheckoutSetPayment {
                method: prompt_payment(&store)?,
            },
        };
        store.dispatch(action)?;

        if step == CheckoutStep::Payment {
            ctx.output.header("Order Summary");
            ctx.output.summary(&store.checkout_summary()?);
            if !args.yes {
                let confirmed = Confirm::new()
                    .with_prompt("Place order?")
                    .default(true)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Checkout cancelled");
                    return Ok(());
                }
            }
        }

        match store.dispatch(Action::CheckoutContinue) {
            Ok(Some(note)) => ctx.output.notification(&note),
            Ok(None) => {}
            Err(err) => ctx.output.notification(&Notification::from_error(&err)),
        }
    }

    let Some(order) = store.last_order() else {
        bail!("Checkout ended without an order");
    };

    if ctx.output.is_json() {
        ctx.output.json(order);
        return Ok(());
    }

    ctx.output.header("Order Confirmed");
    ctx.output.kv("Order number", order.order_number.as_str());
    ctx.output.kv("Name", &order.contact.full_name());
    ctx.output.kv("Ship to", &order.shipping.one_line());
    ctx.output.kv("Payment", order.payment.label());
    ctx.output.summary(&order.summary);

    Ok(())
}

/// Parse `ID:SIZE[:QTY]`.
fn parse_item(item: &str) -> Result<(ProductId, String, u32)> {
    let parts: Vec<&str> = item.split(':').map(str::trim).collect();
    match parts.as_slice() {
        [id, size] if !id.is_empty() => Ok((ProductId::new(*id), size.to_string(), 1)),
        [id, size, qty] if !id.is_empty() => {
            let quantity = qty
                .parse()
                .with_context(|| format!("Invalid quantity in '{}'", item))?;
            Ok((ProductId::new(*id), size.to_string(), quantity))
        }
        _ => bail!("Expected ID:SIZE[:QTY], got '{}'", item),
    }
}

fn ask(prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_contact(store: &Store) -> Result<ContactInfo> {
    let mut current = store
        .state()
        .checkout
        .as_ref()
        .map(|flow| flow.contact.clone())
        .unwrap_or_default();

    // Prefill from the signed-in customer
    if let Some(customer) = store.customer() {
        if current.email.is_empty() {
            current.email = customer.email.clone();
        }
    }

    Ok(ContactInfo::new(
        ask("First name", &current.first_name)?,
        ask("Last name", &current.last_name)?,
        ask("Email", &current.email)?,
        ask("Phone", &current.phone)?,
    ))
}

fn prompt_shipping(store: &Store) -> Result<ShippingAddress> {
    let current = store
        .state()
        .checkout
        .as_ref()
        .map(|flow| flow.shipping.clone())
        .unwrap_or_default();

    let address = ask("Address", &current.address)?;
    let city = ask("City", &current.city)?;
    let default_state = STATE_OPTIONS
        .iter()
        .position(|s| *s == current.state)
        .unwrap_or(0);
    let state = Select::new()
        .with_prompt("State")
        .items(&STATE_OPTIONS)
        .default(default_state)
        .interact()?;
    let pincode = ask("PIN code", &current.pincode)?;

    Ok(ShippingAddress::new(
        address,
        city,
        STATE_OPTIONS[state],
        pincode,
    ))
}

fn prompt_payment(store: &Store) -> Result<PaymentMethod> {
    let current = store
        .state()
        .checkout
        .as_ref()
        .map(|flow| flow.payment)
        .unwrap_or_default();

    let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
    let default = PaymentMethod::ALL
        .iter()
        .position(|m| *m == current)
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Payment method")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(PaymentMethod::ALL[selection])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let (id, size, qty) = parse_item("1:M").unwrap();
        assert_eq!(id.as_str(), "1");
        assert_eq!(size, "M");
        assert_eq!(qty, 1);

        let (_, size, qty) = parse_item(" 3 : 32 : 2 ").unwrap();
        assert_eq!(size, "32");
        assert_eq!(qty, 2);
    }

    #[test]
    fn test_parse_item_rejects_garbage() {
        assert!(parse_item("1").is_err());
        assert!(parse_item(":M").is_err());
        assert!(parse_item("1:M:many").is_err());
    }
}
