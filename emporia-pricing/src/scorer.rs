use serde::{Deserialize, Serialize};

use crate::config::ScorerConfig;
use crate::error::PricingError;
use crate::input::PricingInput;
use crate::rules::AdjustmentRule;

pub const REASON_BASE_MAINTAINED: &str = "base price maintained";
pub const REASON_INSUFFICIENT_DATA: &str = "insufficient data";

/// Outcome of scoring one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    /// Suggested price, always inside the configured markup band
    pub suggested_price: f64,

    /// Deterministic confidence in [0, 1]
    pub confidence: f64,

    /// Justifications of the rules that fired, joined by "; "
    pub reasoning: String,
}

impl PricingResult {
    /// Fallback for callers whose upstream data was rejected: keep the
    /// catalog price and admit we know nothing.
    pub fn insufficient_data(base_price: f64) -> Self {
        Self {
            suggested_price: base_price,
            confidence: 0.0,
            reasoning: REASON_INSUFFICIENT_DATA.to_string(),
        }
    }
}

/// Deterministic price scorer.
///
/// Maps a `PricingInput` to a `PricingResult` by folding the adjustment
/// rules into a single multiplicative factor on the current price, then
/// clamping into the markup band around the base price. Pure: no I/O, no
/// retained state, identical input and config always produce identical
/// output.
pub struct PriceScorer {
    config: ScorerConfig,
}

impl PriceScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn score(&self, input: &PricingInput) -> Result<PricingResult, PricingError> {
        input.validate()?;

        let mut factor = 1.0;
        let mut reasons: Vec<&'static str> = Vec::new();

        for rule in AdjustmentRule::ALL {
            if let Some(adjustment) = rule.evaluate(input, &self.config) {
                factor *= adjustment.factor;
                reasons.push(adjustment.reason);
            }
        }

        let raw_price = input.current_price * factor;

        // The clamp is unconditional: a current price already outside the
        // band is pulled back in even when no rule fired.
        let floor = input.base_price * self.config.min_markup_factor;
        let ceiling = input.base_price * self.config.max_markup_factor;
        let suggested_price = raw_price.clamp(floor, ceiling);
        let clamped = suggested_price != raw_price;

        let confidence = (self.config.base_confidence
            + self.config.rule_bonus * reasons.len() as f64
            - if clamped { self.config.clamp_penalty } else { 0.0 })
        .clamp(0.0, 1.0);

        let reasoning = if reasons.is_empty() {
            REASON_BASE_MAINTAINED.to_string()
        } else {
            reasons.join("; ")
        };

        Ok(PricingResult {
            suggested_price,
            confidence,
            reasoning,
        })
    }
}

impl Default for PriceScorer {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}
