//! Tracking request and result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::OrderNumber;
use crate::tracking::TrackingError;

/// What the shopper enters on the track-order page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRequest {
    pub order_number: String,
    pub email: String,
}

impl TrackingRequest {
    pub fn new(order_number: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            order_number: order_number.into(),
            email: email.into(),
        }
    }

    /// Reject blank fields; returns the trimmed order number.
    pub fn validate(&self) -> Result<OrderNumber, TrackingError> {
        let order_number = self.order_number.trim();
        if order_number.is_empty() {
            return Err(TrackingError::MissingField("order number"));
        }
        if self.email.trim().is_empty() {
            return Err(TrackingError::MissingField("email"));
        }
        Ok(OrderNumber::new(order_number))
    }
}

/// A line of the tracked order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackedItem {
    pub name: String,
    pub size: String,
    pub quantity: u32,
}

/// One step of the delivery timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingEvent {
    /// Step label, e.g. "Shipped".
    pub status: String,
    pub date: NaiveDate,
    /// Clock time, or "Expected" for steps still ahead.
    pub time: String,
    pub description: String,
    pub completed: bool,
}

/// Tracking details for one order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub order_number: OrderNumber,
    pub status: String,
    pub estimated_delivery: NaiveDate,
    pub current_location: String,
    pub items: Vec<TrackedItem>,
    /// Events in chronological order.
    pub timeline: Vec<TrackingEvent>,
}

impl TrackingInfo {
    /// The most recent completed event.
    pub fn latest_event(&self) -> Option<&TrackingEvent> {
        self.timeline.iter().rev().find(|e| e.completed)
    }

    pub fn completed_steps(&self) -> usize {
        self.timeline.iter().filter(|e| e.completed).count()
    }

    pub fn is_delivered(&self) -> bool {
        self.timeline.last().is_some_and(|e| e.completed)
    }
}
