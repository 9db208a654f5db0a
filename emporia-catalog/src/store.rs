use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporia_pricing::PricingInput;

use crate::observations::{CompetitorQuote, PriceChange, SaleRecord};
use crate::product::{round_to_cents, Product};

/// Headline numbers for the merchant dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub low_stock_count: usize,
    pub recent_adjustments: usize,
}

/// In-memory working set of products and their pricing observations.
///
/// This is the data the optimizer sweeps. Durable storage lives outside
/// this crate; callers that have one sync it in through the same methods.
pub struct CatalogStore {
    products: HashMap<Uuid, Product>,
    sales: HashMap<Uuid, Vec<SaleRecord>>,
    quotes: HashMap<Uuid, Vec<CompetitorQuote>>,
    history: HashMap<Uuid, Vec<PriceChange>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            sales: HashMap::new(),
            quotes: HashMap::new(),
            history: HashMap::new(),
        }
    }

    pub fn insert_product(&mut self, product: Product) -> Uuid {
        let id = product.id;
        self.products.insert(id, product);
        id
    }

    pub fn get(&self, product_id: &Uuid) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Ids of products the optimizer should consider, in no particular order.
    pub fn active_product_ids(&self) -> Vec<Uuid> {
        self.products
            .values()
            .filter(|p| p.is_active)
            .map(|p| p.id)
            .collect()
    }

    pub fn set_inventory(&mut self, product_id: &Uuid, inventory: i32) -> Result<(), CatalogError> {
        let product = self
            .products
            .get_mut(product_id)
            .ok_or(CatalogError::ProductNotFound(*product_id))?;
        product.inventory = inventory;
        Ok(())
    }

    pub fn record_sale(
        &mut self,
        product_id: Uuid,
        quantity: i32,
        revenue: f64,
        sold_at: DateTime<Utc>,
    ) -> Result<(), CatalogError> {
        if !self.products.contains_key(&product_id) {
            return Err(CatalogError::ProductNotFound(product_id));
        }
        self.sales.entry(product_id).or_default().push(SaleRecord {
            product_id,
            quantity,
            revenue,
            sold_at,
        });
        Ok(())
    }

    pub fn record_competitor_quote(
        &mut self,
        product_id: Uuid,
        competitor: impl Into<String>,
        price: f64,
        observed_at: DateTime<Utc>,
    ) -> Result<(), CatalogError> {
        if !self.products.contains_key(&product_id) {
            return Err(CatalogError::ProductNotFound(product_id));
        }
        self.quotes.entry(product_id).or_default().push(CompetitorQuote {
            product_id,
            competitor: competitor.into(),
            price,
            observed_at,
        });
        Ok(())
    }

    /// Assemble the scorer's input for one product: current prices, units on
    /// hand, and the observations inside the trailing window. Quotes older
    /// than the window are considered stale and left out.
    pub fn pricing_input(
        &self,
        product_id: &Uuid,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<PricingInput, CatalogError> {
        let product = self
            .products
            .get(product_id)
            .ok_or(CatalogError::ProductNotFound(*product_id))?;
        if !product.is_active {
            return Err(CatalogError::ProductInactive(*product_id));
        }

        let cutoff = now - window;

        let recent_sales_volume = self
            .sales
            .get(product_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.sold_at >= cutoff)
                    .map(|r| r.quantity)
                    .sum()
            })
            .unwrap_or(0);

        let competitor_prices = self
            .quotes
            .get(product_id)
            .map(|quotes| {
                quotes
                    .iter()
                    .filter(|q| q.observed_at >= cutoff)
                    .map(|q| q.price)
                    .collect()
            })
            .unwrap_or_default();

        Ok(PricingInput {
            base_price: product.base_price,
            current_price: product.current_price,
            inventory_level: product.inventory,
            competitor_prices,
            recent_sales_volume,
        })
    }

    /// Move the shown price and append to the audit trail. The stored price
    /// is rounded to whole cents.
    pub fn apply_price(
        &mut self,
        product_id: &Uuid,
        new_price: f64,
        reasoning: impl Into<String>,
        confidence: f64,
        changed_at: DateTime<Utc>,
    ) -> Result<PriceChange, CatalogError> {
        let product = self
            .products
            .get_mut(product_id)
            .ok_or(CatalogError::ProductNotFound(*product_id))?;

        let change = PriceChange {
            product_id: *product_id,
            old_price: product.current_price,
            new_price: round_to_cents(new_price),
            reasoning: reasoning.into(),
            confidence,
            changed_at,
        };
        product.current_price = change.new_price;
        self.history.entry(*product_id).or_default().push(change.clone());

        Ok(change)
    }

    pub fn price_history(&self, product_id: &Uuid) -> &[PriceChange] {
        self.history
            .get(product_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Revenue across all recorded sales, products currently below the
    /// low-stock threshold, and price adjustments applied in the last day.
    pub fn dashboard_stats(&self, now: DateTime<Utc>, low_stock_threshold: i32) -> DashboardStats {
        let total_revenue = self
            .sales
            .values()
            .flatten()
            .map(|r| r.revenue)
            .sum();

        let low_stock_count = self
            .products
            .values()
            .filter(|p| p.is_active && p.inventory < low_stock_threshold)
            .count();

        let cutoff = now - Duration::hours(24);
        let recent_adjustments = self
            .history
            .values()
            .flatten()
            .filter(|c| c.changed_at >= cutoff)
            .count();

        DashboardStats {
            total_revenue,
            low_stock_count,
            recent_adjustments,
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("product inactive: {0}")]
    ProductInactive(Uuid),
}
