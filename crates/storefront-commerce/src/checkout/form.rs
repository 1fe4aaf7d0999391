//! Checkout form sections.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// States offered in the address form.
pub const STATE_OPTIONS: [&str; 4] = ["Maharashtra", "Delhi", "Karnataka", "Tamil Nadu"];

/// Loose email check: a non-empty local part and a non-empty domain around
/// a single `@`, with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Contact details from the first checkout step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Required fields that are blank or invalid.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.first_name) {
            missing.push("first name");
        }
        if is_blank(&self.last_name) {
            missing.push("last name");
        }
        if !is_valid_email(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.phone) {
            missing.push("phone");
        }
        missing
    }
}

/// Delivery address from the second checkout step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    /// One of [`STATE_OPTIONS`].
    pub state: String,
    pub pincode: String,
}

impl ShippingAddress {
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            state: state.into(),
            pincode: pincode.into(),
        }
    }

    /// Required fields that are blank or invalid.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.address) {
            missing.push("address");
        }
        if is_blank(&self.city) {
            missing.push("city");
        }
        if !STATE_OPTIONS.contains(&self.state.trim()) {
            missing.push("state");
        }
        if is_blank(&self.pincode) {
            missing.push("pincode");
        }
        missing
    }

    /// Format as a single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.pincode.trim()
        )
    }
}

/// Payment method chosen in the last checkout step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Cod,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Upi, PaymentMethod::Cod];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Cod => "cod",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI Payment",
            PaymentMethod::Cod => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownPaymentMethod(s.to_string()))
    }
}
