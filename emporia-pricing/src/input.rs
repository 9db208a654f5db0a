use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Everything the scorer needs to know about one product at one instant.
///
/// Built fresh per scoring request and discarded afterwards; the scorer
/// never retains it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingInput {
    /// Catalog price, never mutated by scoring
    pub base_price: f64,

    /// Price currently shown; starting point for adjustment
    pub current_price: f64,

    /// Units on hand
    pub inventory_level: i32,

    /// Recent competitor observations, possibly empty
    pub competitor_prices: Vec<f64>,

    /// Units sold in the trailing window
    pub recent_sales_volume: i32,
}

impl PricingInput {
    /// Check the input contract. Rejects non-positive or non-finite prices,
    /// negative counts, and non-positive competitor entries.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.base_price.is_finite() && self.base_price > 0.0) {
            return Err(PricingError::invalid(
                "base_price",
                format!("must be a positive finite number, got {}", self.base_price),
            ));
        }
        if !(self.current_price.is_finite() && self.current_price > 0.0) {
            return Err(PricingError::invalid(
                "current_price",
                format!("must be a positive finite number, got {}", self.current_price),
            ));
        }
        if self.inventory_level < 0 {
            return Err(PricingError::invalid(
                "inventory_level",
                format!("must be >= 0, got {}", self.inventory_level),
            ));
        }
        if self.recent_sales_volume < 0 {
            return Err(PricingError::invalid(
                "recent_sales_volume",
                format!("must be >= 0, got {}", self.recent_sales_volume),
            ));
        }
        for (i, price) in self.competitor_prices.iter().enumerate() {
            if !(price.is_finite() && *price > 0.0) {
                return Err(PricingError::invalid(
                    "competitor_prices",
                    format!("entry {} must be a positive finite number, got {}", i, price),
                ));
            }
        }
        Ok(())
    }

    /// Mean of the competitor observations, `None` when there are none.
    /// Only called after validation, so entries are known positive.
    pub fn avg_competitor_price(&self) -> Option<f64> {
        if self.competitor_prices.is_empty() {
            return None;
        }
        let sum: f64 = self.competitor_prices.iter().sum();
        Some(sum / self.competitor_prices.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> PricingInput {
        PricingInput {
            base_price: 100.0,
            current_price: 100.0,
            inventory_level: 50,
            competitor_prices: vec![95.0, 105.0],
            recent_sales_volume: 20,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_zero_base_price_rejected() {
        let mut input = valid_input();
        input.base_price = 0.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_nan_current_price_rejected() {
        let mut input = valid_input();
        input.current_price = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_negative_sales_volume_rejected() {
        let mut input = valid_input();
        input.recent_sales_volume = -1;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_zero_competitor_entry_rejected() {
        let mut input = valid_input();
        input.competitor_prices = vec![95.0, 0.0];
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_avg_competitor_price() {
        let input = valid_input();
        assert_eq!(input.avg_competitor_price(), Some(100.0));

        let mut no_quotes = valid_input();
        no_quotes.competitor_prices.clear();
        assert_eq!(no_quotes.avg_competitor_price(), None);
    }
}
