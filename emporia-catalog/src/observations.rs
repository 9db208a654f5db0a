use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed sale of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub product_id: Uuid,
    pub quantity: i32,
    pub revenue: f64,
    pub sold_at: DateTime<Utc>,
}

/// A competitor price observed for a comparable product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorQuote {
    pub product_id: Uuid,
    pub competitor: String,
    pub price: f64,
    pub observed_at: DateTime<Utc>,
}

/// An applied price adjustment, kept as an audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceChange {
    pub product_id: Uuid,
    pub old_price: f64,
    pub new_price: f64,
    pub reasoning: String,
    pub confidence: f64,
    pub changed_at: DateTime<Utc>,
}
