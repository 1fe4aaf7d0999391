//! User-facing notifications.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A short message shown after an action, like a toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    /// Notification for a rejected action.
    pub fn from_error(err: &CommerceError) -> Self {
        match err {
            CommerceError::SizeNotSelected(_) => Self::error("Please select a size"),
            CommerceError::InvalidCouponCode(_) => Self::error("Invalid coupon code"),
            other => Self::error(other.to_string()),
        }
    }
}
