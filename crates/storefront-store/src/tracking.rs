//! # Order Tracking
//!
//! Mock tracking history. Orders are not stored anywhere, so this cannot
//! know whether an id was ever issued: every id gets the same three events,
//! dated relative to the current time.
//!
//! ```text
//!   now - 2 days   processing   Warehouse
//!   now - 1 day    shipped      Distribution Center
//!   now            in_transit   Local Facility
//! ```

use chrono::{DateTime, Duration, Utc};
use storefront_core::{OrderStatus, TrackingEvent};
use tracing::debug;

/// Tracking history as of now.
pub fn order_tracking(order_id: &str) -> Vec<TrackingEvent> {
    order_tracking_at(order_id, Utc::now())
}

/// Tracking history as of `now`.
pub fn order_tracking_at(order_id: &str, now: DateTime<Utc>) -> Vec<TrackingEvent> {
    debug!(order_id = %order_id, "Fabricating order tracking");

    vec![
        TrackingEvent {
            status: OrderStatus::Processing,
            location: "Warehouse".to_string(),
            date: now - Duration::days(2),
            message: "Order confirmed and processing".to_string(),
        },
        TrackingEvent {
            status: OrderStatus::Shipped,
            location: "Distribution Center".to_string(),
            date: now - Duration::days(1),
            message: "Package shipped from warehouse".to_string(),
        },
        TrackingEvent {
            status: OrderStatus::InTransit,
            location: "Local Facility".to_string(),
            date: now,
            message: "Out for delivery".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_sequence_relative_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let events = order_tracking_at("ORD-1-ABCDE", now);

        let statuses: Vec<OrderStatus> = events.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Processing,
                OrderStatus::Shipped,
                OrderStatus::InTransit
            ]
        );
        assert_eq!(events[0].date, Utc.with_ymd_and_hms(2024, 3, 13, 12, 0, 0).unwrap());
        assert_eq!(events[1].date, Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap());
        assert_eq!(events[2].date, now);
        assert_eq!(events[2].message, "Out for delivery");
    }

    #[test]
    fn test_any_id_is_accepted() {
        // Known limitation: ids are not checked against issued orders
        assert_eq!(order_tracking("never-issued").len(), 3);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&OrderStatus::InTransit).unwrap();
        assert_eq!(json, "\"in_transit\"");
    }
}
