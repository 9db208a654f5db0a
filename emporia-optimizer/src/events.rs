use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use emporia_pricing::PriceDirection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAdjustedEvent {
    pub product_id: Uuid,
    pub old_price: f64,
    pub new_price: f64,
    pub confidence: f64,
    pub reasoning: String,
    pub direction: PriceDirection,
    /// Change of the applied price versus the base price, in percent
    pub change_percentage: f64,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepCompletedEvent {
    pub scored: usize,
    pub adjusted: usize,
    pub failed: usize,
    pub timestamp: i64,
}

#[derive(Debug, Clone)]
pub enum PricingEvent {
    PriceAdjusted(PriceAdjustedEvent),
    SweepCompleted(SweepCompletedEvent),
}

/// Fan-out of pricing events to in-process subscribers (dashboards, logs).
///
/// Dropping events when nobody listens is fine; the catalog's price
/// history remains the durable record of what happened.
pub struct PricingTelemetry {
    tx: broadcast::Sender<PricingEvent>,
}

impl PricingTelemetry {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PricingEvent> {
        self.tx.subscribe()
    }

    pub fn publish_price_adjusted(&self, event: PriceAdjustedEvent) {
        let _ = self.tx.send(PricingEvent::PriceAdjusted(event));
    }

    pub fn publish_sweep_completed(&self, event: SweepCompletedEvent) {
        let _ = self.tx.send(PricingEvent::SweepCompleted(event));
    }
}

impl Default for PricingTelemetry {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_adjusted_event_wire_shape() {
        let event = PriceAdjustedEvent {
            product_id: Uuid::nil(),
            old_price: 100.0,
            new_price: 110.0,
            confidence: 0.8,
            reasoning: "low inventory — price increased".to_string(),
            direction: PriceDirection::Increase,
            change_percentage: 10.0,
            timestamp: 1_700_000_000,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["direction"], "INCREASE");
        assert_eq!(json["new_price"], 110.0);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_harmless() {
        let telemetry = PricingTelemetry::default();
        telemetry.publish_sweep_completed(SweepCompletedEvent {
            scored: 0,
            adjusted: 0,
            failed: 0,
            timestamp: 0,
        });
    }
}
