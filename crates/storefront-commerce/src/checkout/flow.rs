//! Checkout flow state machine.

use crate::checkout::{ContactInfo, PaymentMethod, ShippingAddress};
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Contact information.
    #[default]
    Information,
    /// Shipping address.
    Shipping,
    /// Payment method.
    Payment,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Information,
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Information => "information",
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Information => "Information",
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
        }
    }

    /// Heading shown above the step's form.
    pub fn heading(&self) -> &'static str {
        match self {
            CheckoutStep::Information => "Contact Information",
            CheckoutStep::Shipping => "Shipping Address",
            CheckoutStep::Payment => "Payment Method",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Information => 1,
            CheckoutStep::Shipping => 2,
            CheckoutStep::Payment => 3,
        }
    }

    fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Information => Some(CheckoutStep::Shipping),
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => None,
        }
    }

    fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Information => None,
            CheckoutStep::Shipping => Some(CheckoutStep::Information),
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
        }
    }
}

/// Result of continuing from the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutProgress {
    /// Moved to the given step.
    Step(CheckoutStep),
    /// The payment step was completed and the order should be placed.
    Submitted,
}

/// Checkout flow state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Contact details.
    pub contact: ContactInfo,
    /// Delivery address.
    pub shipping: ShippingAddress,
    /// Payment method.
    pub payment: PaymentMethod,
}

impl CheckoutFlow {
    /// Create a new checkout flow on the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current step and move forward.
    ///
    /// On the payment step this reports [`CheckoutProgress::Submitted`] and
    /// leaves the step unchanged; the caller places the order. Submission
    /// checks every step, since earlier sections may have been edited.
    pub fn advance(&mut self) -> Result<CheckoutProgress, CommerceError> {
        let missing = if self.is_final_step() {
            CheckoutStep::ALL
                .iter()
                .flat_map(|s| self.missing_for_step(*s))
                .collect()
        } else {
            self.missing_for_step(self.step)
        };
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(CheckoutProgress::Step(next))
            }
            None => Ok(CheckoutProgress::Submitted),
        }
    }

    /// Go back to the previous step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = self
            .step
            .previous()
            .ok_or_else(|| CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "none".to_string(),
            })?;

        self.step = prev;
        Ok(prev)
    }

    /// Required fields of a step that are blank or invalid.
    pub fn missing_for_step(&self, step: CheckoutStep) -> Vec<&'static str> {
        match step {
            CheckoutStep::Information => self.contact.missing_fields(),
            CheckoutStep::Shipping => self.shipping.missing_fields(),
            // Always has a value
            CheckoutStep::Payment => Vec::new(),
        }
    }

    /// Required fields of the current step that are blank or invalid.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.missing_for_step(self.step)
    }

    /// Replace the contact details.
    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    /// Replace the delivery address.
    pub fn set_shipping(&mut self, shipping: ShippingAddress) {
        self.shipping = shipping;
    }

    /// Choose the payment method.
    pub fn set_payment(&mut self, payment: PaymentMethod) {
        self.payment = payment;
    }

    /// Check if the flow is on its final step.
    pub fn is_final_step(&self) -> bool {
        self.step == CheckoutStep::Payment
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 3.0) * 100.0) as u8
    }
}
