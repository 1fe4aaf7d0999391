//! Order tracking.
//!
//! Lookups go through the [`OrderTracker`] trait so a real carrier backend
//! can stand in for [`SimulatedOrderTracker`] without touching callers.

mod model;
mod simulated;

pub use model::{TrackedItem, TrackingEvent, TrackingInfo, TrackingRequest};
pub use simulated::{SimulatedOrderTracker, DEFAULT_TRACKING_LATENCY};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from an order lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackingError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Looks up the shipping status of an order.
#[async_trait]
pub trait OrderTracker: Send + Sync {
    /// Fetch tracking details for an order.
    async fn track(&self, request: &TrackingRequest) -> Result<TrackingInfo, TrackingError>;
}
