use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use emporia_catalog::{CatalogStore, Product};
use emporia_optimizer::{Optimizer, OptimizerConfig, PricingEvent, PricingTelemetry};
use emporia_pricing::{PriceDirection, PriceScorer};

fn optimizer_for(
    store: Arc<RwLock<CatalogStore>>,
    telemetry: Option<Arc<PricingTelemetry>>,
) -> Optimizer<Arc<RwLock<CatalogStore>>> {
    Optimizer::new(
        store,
        PriceScorer::default(),
        OptimizerConfig::default(),
        telemetry,
    )
}

#[tokio::test]
async fn test_sweep_applies_significant_suggestions() {
    let mut store = CatalogStore::new();
    // Low inventory fires: suggested 110.00, a 10% move
    let id = store.insert_product(Product::new("SKU-1", "Desk lamp", "lighting", 100.0, 5));
    store
        .record_sale(id, 30, 3000.0, Utc::now() - Duration::days(1))
        .unwrap();
    let store = Arc::new(RwLock::new(store));

    let telemetry = Arc::new(PricingTelemetry::default());
    let mut events = telemetry.subscribe();
    let optimizer = optimizer_for(store.clone(), Some(telemetry.clone()));

    let summary = optimizer.run_sweep(Utc::now()).await;
    assert_eq!(summary.scored, 1);
    assert_eq!(summary.adjusted, 1);
    assert_eq!(summary.failed, 0);

    {
        let guard = store.read().await;
        let product = guard.get(&id).unwrap();
        assert_eq!(product.current_price, 110.0);

        let history = guard.price_history(&id);
        assert_eq!(history.len(), 1);
        assert!(history[0].reasoning.contains("low inventory"));
    }

    match events.try_recv().unwrap() {
        PricingEvent::PriceAdjusted(event) => {
            assert_eq!(event.product_id, id);
            assert_eq!(event.old_price, 100.0);
            assert_eq!(event.new_price, 110.0);
            assert_eq!(event.direction, PriceDirection::Increase);
            assert!((event.change_percentage - 10.0).abs() < 1e-9);
        }
        other => panic!("expected PriceAdjusted, got {:?}", other),
    }
    match events.try_recv().unwrap() {
        PricingEvent::SweepCompleted(event) => {
            assert_eq!(event.scored, 1);
            assert_eq!(event.adjusted, 1);
        }
        other => panic!("expected SweepCompleted, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sweep_holds_sub_threshold_suggestions() {
    let mut store = CatalogStore::new();
    // Sits between every threshold: suggestion equals current price
    let id = store.insert_product(Product::new("SKU-2", "Wool rug", "textiles", 150.0, 60));
    store
        .record_sale(id, 30, 4500.0, Utc::now() - Duration::days(2))
        .unwrap();
    let store = Arc::new(RwLock::new(store));

    let optimizer = optimizer_for(store.clone(), None);
    let summary = optimizer.run_sweep(Utc::now()).await;

    assert_eq!(summary.scored, 1);
    assert_eq!(summary.adjusted, 0);

    let guard = store.read().await;
    assert_eq!(guard.get(&id).unwrap().current_price, 150.0);
    assert!(guard.price_history(&id).is_empty());
}

#[tokio::test]
async fn test_one_bad_product_does_not_abort_the_sweep() {
    let mut store = CatalogStore::new();
    // A zero base price violates the scorer's input contract
    let bad = store.insert_product(Product::new("SKU-BAD", "Ghost item", "misc", 0.0, 5));
    let good = store.insert_product(Product::new("SKU-3", "Desk lamp", "lighting", 100.0, 5));
    store
        .record_sale(good, 30, 3000.0, Utc::now() - Duration::days(1))
        .unwrap();
    let store = Arc::new(RwLock::new(store));

    let optimizer = optimizer_for(store.clone(), None);
    let summary = optimizer.run_sweep(Utc::now()).await;

    assert_eq!(summary.scored, 1);
    assert_eq!(summary.adjusted, 1);
    assert_eq!(summary.failed, 1);

    let guard = store.read().await;
    assert_eq!(guard.get(&good).unwrap().current_price, 110.0);
    assert_eq!(guard.get(&bad).unwrap().current_price, 0.0);
}

#[tokio::test]
async fn test_repeat_sweep_converges() {
    let mut store = CatalogStore::new();
    // Overstocked: 0.95 factor each sweep until the floor clamp makes the
    // move insignificant
    let id = store.insert_product(Product::new("SKU-4", "Oak chair", "furniture", 100.0, 500));
    store
        .record_sale(id, 30, 3000.0, Utc::now() - Duration::days(1))
        .unwrap();
    let store = Arc::new(RwLock::new(store));

    let optimizer = optimizer_for(store.clone(), None);
    for _ in 0..20 {
        optimizer.run_sweep(Utc::now()).await;
    }

    let guard = store.read().await;
    let price = guard.get(&id).unwrap().current_price;
    // Clamped at the floor of the markup band
    assert!((price - 70.0).abs() < 0.5);
    // And once there, further sweeps stop adjusting
    assert!(guard.price_history(&id).len() < 20);
}
