use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emporia_catalog::{CatalogStore, Product};
use emporia_optimizer::{AppConfig, Optimizer, PricingEvent, PricingTelemetry};
use emporia_pricing::PriceScorer;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emporia_optimizer=debug,emporia_pricing=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().expect("Failed to load config");
    tracing::info!(
        "starting optimizer: sweep every {}s, apply threshold {}",
        config.optimizer.sweep_interval_secs,
        config.optimizer.apply_threshold
    );

    let store = Arc::new(RwLock::new(seed_demo_catalog()));
    let telemetry = Arc::new(PricingTelemetry::default());
    let mut events = telemetry.subscribe();

    let optimizer = Optimizer::new(
        store.clone(),
        PriceScorer::new(config.scorer.clone()),
        config.optimizer.clone(),
        Some(telemetry.clone()),
    );

    tokio::spawn(async move {
        optimizer.run().await;
    });

    while let Ok(event) = events.recv().await {
        match event {
            PricingEvent::PriceAdjusted(adjusted) => {
                tracing::info!(
                    "price adjusted: {} {:.2} -> {:.2} ({:+.1}% vs base, confidence {:.2})",
                    adjusted.product_id,
                    adjusted.old_price,
                    adjusted.new_price,
                    adjusted.change_percentage,
                    adjusted.confidence
                );
            }
            PricingEvent::SweepCompleted(sweep) => {
                let stats = store
                    .read()
                    .await
                    .dashboard_stats(Utc::now(), config.scorer.low_inventory_threshold);
                tracing::info!(
                    "sweep done ({} scored, {} adjusted, {} failed); revenue {:.2}, {} low stock, {} adjustments today",
                    sweep.scored,
                    sweep.adjusted,
                    sweep.failed,
                    stats.total_revenue,
                    stats.low_stock_count,
                    stats.recent_adjustments
                );
            }
        }
    }
}

/// A small catalog with enough signal for the first sweep to move prices.
fn seed_demo_catalog() -> CatalogStore {
    let mut store = CatalogStore::new();
    let now = Utc::now();

    // Scarce and selling: expect an increase
    let lamp = store.insert_product(Product::new("LAMP-01", "Brass desk lamp", "lighting", 89.0, 6));
    let _ = store.record_sale(lamp, 14, 1246.0, now - Duration::days(2));
    let _ = store.record_competitor_quote(lamp, "glowmart", 92.0, now - Duration::days(1));

    // Overstocked and stalled: expect a markdown
    let chair = store.insert_product(Product::new("CHAIR-04", "Oak side chair", "furniture", 120.0, 180));
    let _ = store.record_sale(chair, 2, 240.0, now - Duration::days(5));
    let _ = store.record_competitor_quote(chair, "glowmart", 99.0, now - Duration::days(1));
    let _ = store.record_competitor_quote(chair, "rival-mart", 101.0, now - Duration::days(3));

    // Healthy: expect no movement
    let rug = store.insert_product(Product::new("RUG-11", "Wool runner rug", "textiles", 150.0, 60));
    let _ = store.record_sale(rug, 20, 3000.0, now - Duration::days(3));

    store
}
