//! Simulated order tracker.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};

use crate::ids::OrderNumber;
use crate::tracking::{
    OrderTracker, TrackedItem, TrackingError, TrackingEvent, TrackingInfo, TrackingRequest,
};

/// Delay before a simulated lookup resolves.
pub const DEFAULT_TRACKING_LATENCY: Duration = Duration::from_millis(1500);

const CURRENT_STATUS: &str = "In Transit";
const CURRENT_LOCATION: &str = "Mumbai Distribution Center";

/// Returns the same in-transit shipment for any order number, after a
/// fixed delay. Timeline dates are laid out around `today`.
#[derive(Debug, Clone)]
pub struct SimulatedOrderTracker {
    latency: Duration,
    today: Option<NaiveDate>,
}

impl SimulatedOrderTracker {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_TRACKING_LATENCY,
            today: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Pin the reference date instead of using the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Build the record without waiting.
    pub fn record_for(&self, order_number: OrderNumber) -> TrackingInfo {
        let today = self.today();
        let before = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(today);
        let eta = today.checked_add_days(Days::new(2)).unwrap_or(today);

        let event = |status: &str, date, time: &str, description: &str, completed| TrackingEvent {
            status: status.to_string(),
            date,
            time: time.to_string(),
            description: description.to_string(),
            completed,
        };

        let timeline = vec![
            event(
                "Order Placed",
                before(3),
                "10:30 AM",
                "Your order has been confirmed and is being processed",
                true,
            ),
            event(
                "Order Processed",
                before(2),
                "2:15 PM",
                "Your order has been packed and ready for shipment",
                true,
            ),
            event(
                "Shipped",
                before(1),
                "9:00 AM",
                "Your order has been shipped and is on its way",
                true,
            ),
            event(
                CURRENT_STATUS,
                today,
                "11:45 AM",
                "Your package is currently in transit to your location",
                true,
            ),
            event(
                "Out for Delivery",
                eta,
                "Expected",
                "Your package will be out for delivery",
                false,
            ),
            event(
                "Delivered",
                eta,
                "Expected",
                "Your package will be delivered",
                false,
            ),
        ];

        TrackingInfo {
            order_number,
            status: CURRENT_STATUS.to_string(),
            estimated_delivery: eta,
            current_location: CURRENT_LOCATION.to_string(),
            items: vec![
                TrackedItem {
                    name: "Oversized Graphic Tee - Black".to_string(),
                    size: "M".to_string(),
                    quantity: 1,
                },
                TrackedItem {
                    name: "Cargo Joggers - Olive".to_string(),
                    size: "32".to_string(),
                    quantity: 1,
                },
            ],
            timeline,
        }
    }
}

impl Default for SimulatedOrderTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderTracker for SimulatedOrderTracker {
    async fn track(&self, request: &TrackingRequest) -> Result<TrackingInfo, TrackingError> {
        let order_number = request.validate()?;
        tokio::time::sleep(self.latency).await;
        Ok(self.record_for(order_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SimulatedOrderTracker {
        SimulatedOrderTracker::new()
            .with_latency(Duration::ZERO)
            .with_today(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap())
    }

    #[tokio::test]
    async fn test_track_returns_fixed_record() {
        let info = tracker()
            .track(&TrackingRequest::new("BT123456789", "a@b.com"))
            .await
            .unwrap();

        assert_eq!(info.order_number.as_str(), "BT123456789");
        assert_eq!(info.status, "In Transit");
        assert_eq!(info.current_location, "Mumbai Distribution Center");
        assert_eq!(info.items.len(), 2);
        assert_eq!(info.timeline.len(), 6);
        assert_eq!(info.completed_steps(), 4);
        assert!(!info.is_delivered());
        assert_eq!(info.latest_event().unwrap().status, "In Transit");
    }

    #[tokio::test]
    async fn test_dates_relative_to_today() {
        let info = tracker()
            .track(&TrackingRequest::new("X", "a@b.com"))
            .await
            .unwrap();

        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(info.timeline[0].date, date(2024, 1, 10));
        assert_eq!(info.timeline[3].date, date(2024, 1, 13));
        assert_eq!(info.estimated_delivery, date(2024, 1, 15));
        assert_eq!(info.timeline[5].date, date(2024, 1, 15));
    }

    #[tokio::test]
    async fn test_blank_fields_rejected() {
        let err = tracker()
            .track(&TrackingRequest::new("", "a@b.com"))
            .await
            .unwrap_err();
        assert_eq!(err, TrackingError::MissingField("order number"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_latency() {
        let tracker = SimulatedOrderTracker::new()
            .with_today(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());
        let start = tokio::time::Instant::now();
        tracker
            .track(&TrackingRequest::new("BT1", "a@b.com"))
            .await
            .unwrap();
        assert!(start.elapsed() >= DEFAULT_TRACKING_LATENCY);
    }
}
