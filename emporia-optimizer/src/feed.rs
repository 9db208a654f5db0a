use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use emporia_catalog::{CatalogStore, PriceChange};
use emporia_pricing::{PricingInput, PricingResult};

/// Data-access seam between the optimizer and whatever holds the catalog.
///
/// The in-process implementation below wraps the in-memory store; a
/// deployment with a durable catalog supplies its own implementation.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Products worth scoring this sweep.
    async fn scorable_products(&self) -> Vec<Uuid>;

    async fn assemble_input(
        &self,
        product_id: &Uuid,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<PricingInput, Box<dyn std::error::Error + Send + Sync>>;

    async fn apply_suggestion(
        &self,
        product_id: &Uuid,
        result: &PricingResult,
        changed_at: DateTime<Utc>,
    ) -> Result<PriceChange, Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
impl PriceFeed for Arc<RwLock<CatalogStore>> {
    async fn scorable_products(&self) -> Vec<Uuid> {
        self.read().await.active_product_ids()
    }

    async fn assemble_input(
        &self,
        product_id: &Uuid,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<PricingInput, Box<dyn std::error::Error + Send + Sync>> {
        let input = self.read().await.pricing_input(product_id, now, window)?;
        Ok(input)
    }

    async fn apply_suggestion(
        &self,
        product_id: &Uuid,
        result: &PricingResult,
        changed_at: DateTime<Utc>,
    ) -> Result<PriceChange, Box<dyn std::error::Error + Send + Sync>> {
        let change = self.write().await.apply_price(
            product_id,
            result.suggested_price,
            result.reasoning.clone(),
            result.confidence,
            changed_at,
        )?;
        Ok(change)
    }
}
