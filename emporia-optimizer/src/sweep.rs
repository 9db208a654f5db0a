use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use emporia_pricing::{PriceRecommendation, PriceScorer};

use crate::events::{PriceAdjustedEvent, PricingTelemetry, SweepCompletedEvent};
use crate::feed::PriceFeed;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Seconds between sweeps
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// Minimum relative price move worth applying; smaller suggestions are
    /// held to avoid churning the storefront
    #[serde(default = "default_apply_threshold")]
    pub apply_threshold: f64,

    /// Trailing window of sales and competitor observations fed to the scorer
    #[serde(default = "default_sales_window_days")]
    pub sales_window_days: i64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: default_sweep_interval_secs(),
            apply_threshold: default_apply_threshold(),
            sales_window_days: default_sales_window_days(),
        }
    }
}

const fn default_sweep_interval_secs() -> u64 {
    30
}

const fn default_apply_threshold() -> f64 {
    0.02
}

const fn default_sales_window_days() -> i64 {
    7
}

/// What one sweep did.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepSummary {
    pub scored: usize,
    pub adjusted: usize,
    pub failed: usize,
}

/// Periodic repricing worker.
///
/// Every sweep scores every scorable product and applies the suggestions
/// that clear the significance threshold. One product failing never aborts
/// the sweep. The scorer is deterministic, so a sweep over unchanged data
/// applies nothing new.
pub struct Optimizer<F: PriceFeed> {
    feed: F,
    scorer: PriceScorer,
    config: OptimizerConfig,
    telemetry: Option<Arc<PricingTelemetry>>,
}

impl<F: PriceFeed> Optimizer<F> {
    pub fn new(
        feed: F,
        scorer: PriceScorer,
        config: OptimizerConfig,
        telemetry: Option<Arc<PricingTelemetry>>,
    ) -> Self {
        Self {
            feed,
            scorer,
            config,
            telemetry,
        }
    }

    /// Score the whole working set once.
    pub async fn run_sweep(&self, now: DateTime<Utc>) -> SweepSummary {
        let mut summary = SweepSummary::default();
        let window = Duration::days(self.config.sales_window_days);

        for product_id in self.feed.scorable_products().await {
            let input = match self.feed.assemble_input(&product_id, now, window).await {
                Ok(input) => input,
                Err(e) => {
                    error!("failed to assemble input for {}: {}", product_id, e);
                    summary.failed += 1;
                    continue;
                }
            };

            let result = match self.scorer.score(&input) {
                Ok(result) => result,
                Err(e) => {
                    error!("scoring {} rejected: {}", product_id, e);
                    summary.failed += 1;
                    continue;
                }
            };
            summary.scored += 1;

            let relative_move =
                (result.suggested_price - input.current_price).abs() / input.current_price;
            if relative_move <= self.config.apply_threshold {
                debug!(
                    "holding price for {}: move {:.4} below threshold",
                    product_id, relative_move
                );
                continue;
            }

            match self.feed.apply_suggestion(&product_id, &result, now).await {
                Ok(change) => {
                    summary.adjusted += 1;
                    info!(
                        "adjusted {}: {:.2} -> {:.2} ({})",
                        product_id, change.old_price, change.new_price, change.reasoning
                    );
                    if let Some(ref telemetry) = self.telemetry {
                        let recommendation =
                            PriceRecommendation::summarize(input.base_price, change.new_price);
                        telemetry.publish_price_adjusted(PriceAdjustedEvent {
                            product_id,
                            old_price: change.old_price,
                            new_price: change.new_price,
                            confidence: change.confidence,
                            reasoning: change.reasoning.clone(),
                            direction: recommendation.direction,
                            change_percentage: recommendation.change_percentage,
                            timestamp: now.timestamp(),
                        });
                    }
                }
                Err(e) => {
                    error!("failed to apply price for {}: {}", product_id, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "sweep complete: {} scored, {} adjusted, {} failed",
            summary.scored, summary.adjusted, summary.failed
        );
        if let Some(ref telemetry) = self.telemetry {
            telemetry.publish_sweep_completed(SweepCompletedEvent {
                scored: summary.scored,
                adjusted: summary.adjusted,
                failed: summary.failed,
                timestamp: now.timestamp(),
            });
        }

        summary
    }

    /// Sweep forever on the configured cadence.
    pub async fn run(&self) {
        let mut ticker =
            tokio::time::interval(std::time::Duration::from_secs(self.config.sweep_interval_secs));
        info!(
            "optimizer started, sweeping every {}s",
            self.config.sweep_interval_secs
        );
        loop {
            ticker.tick().await;
            self.run_sweep(Utc::now()).await;
        }
    }
}
