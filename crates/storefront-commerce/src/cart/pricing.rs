//! Order summary pricing.

use crate::cart::{Cart, Coupon};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping and tax rules applied to a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Shipping is free when the subtotal is strictly above this amount.
    pub free_shipping_threshold: Money,
    /// Flat shipping fee below the threshold.
    pub shipping_fee: Money,
    /// GST percentage charged at checkout.
    pub tax_percent: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::new(1999),
            shipping_fee: Money::new(99),
            tax_percent: 18,
        }
    }
}

impl PricingPolicy {
    /// Shipping charged for a subtotal. An empty cart ships nothing.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.is_zero() || subtotal > self.free_shipping_threshold {
            Money::zero()
        } else {
            self.shipping_fee
        }
    }

    /// Tax on a taxable amount, rounded to the nearest rupee.
    pub fn tax_for(&self, taxable: Money) -> Money {
        taxable.percentage(self.tax_percent)
    }

    /// Summary shown on the cart page: subtotal - discount + shipping.
    pub fn cart_summary(
        &self,
        cart: &Cart,
        coupon: Option<&Coupon>,
    ) -> Result<OrderSummary, CommerceError> {
        self.summarize(cart, coupon, false)
    }

    /// Summary shown at checkout: the cart summary plus GST on the
    /// discounted subtotal.
    pub fn checkout_summary(
        &self,
        cart: &Cart,
        coupon: Option<&Coupon>,
    ) -> Result<OrderSummary, CommerceError> {
        self.summarize(cart, coupon, true)
    }

    fn summarize(
        &self,
        cart: &Cart,
        coupon: Option<&Coupon>,
        with_tax: bool,
    ) -> Result<OrderSummary, CommerceError> {
        let subtotal = cart.subtotal()?;
        let discount = coupon
            .map(|c| c.discount_for(subtotal))
            .unwrap_or_default();
        let discounted = subtotal.try_subtract(discount)?;
        let shipping = self.shipping_for(subtotal);
        let tax = if with_tax {
            self.tax_for(discounted)
        } else {
            Money::zero()
        };
        let total = discounted.try_add(shipping)?.try_add(tax)?;

        Ok(OrderSummary {
            item_count: cart.item_count(),
            subtotal,
            discount,
            coupon_code: coupon.map(|c| c.code.clone()),
            shipping,
            tax,
            total,
        })
    }
}

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of price times quantity.
    pub subtotal: Money,
    /// Coupon discount.
    pub discount: Money,
    /// Applied coupon code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// Shipping charge.
    pub shipping: Money,
    /// GST; zero on the cart page.
    pub tax: Money,
    /// Final total (subtotal - discount + shipping + tax).
    pub total: Money,
}

impl OrderSummary {
    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Check if a discount was applied.
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }
}
