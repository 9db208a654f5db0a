use serde::{Deserialize, Serialize};

/// Percentage move (relative to base price) beyond which a suggestion is
/// summarized as a definite increase or decrease rather than a hold.
pub const DEFAULT_SIGNIFICANT_CHANGE_PCT: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceDirection {
    Increase,
    Decrease,
    Maintain,
}

/// Merchant-facing summary of a scoring result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecommendation {
    /// Signed change of the suggested price versus the base price, in percent
    pub change_percentage: f64,
    pub direction: PriceDirection,
    pub summary: &'static str,
}

impl PriceRecommendation {
    pub fn summarize(base_price: f64, suggested_price: f64) -> Self {
        Self::summarize_with_threshold(base_price, suggested_price, DEFAULT_SIGNIFICANT_CHANGE_PCT)
    }

    pub fn summarize_with_threshold(
        base_price: f64,
        suggested_price: f64,
        threshold_pct: f64,
    ) -> Self {
        let change_percentage = (suggested_price - base_price) / base_price * 100.0;

        let (direction, summary) = if change_percentage > threshold_pct {
            (
                PriceDirection::Increase,
                "increase price: high demand and favorable market conditions",
            )
        } else if change_percentage < -threshold_pct {
            (
                PriceDirection::Decrease,
                "decrease price: stimulate demand and clear inventory",
            )
        } else {
            (
                PriceDirection::Maintain,
                "maintain current pricing: optimal market position",
            )
        };

        Self {
            change_percentage,
            direction,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_above_threshold() {
        let rec = PriceRecommendation::summarize(100.0, 110.0);
        assert_eq!(rec.direction, PriceDirection::Increase);
        assert!((rec.change_percentage - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_decrease_below_threshold() {
        let rec = PriceRecommendation::summarize(100.0, 85.56);
        assert_eq!(rec.direction, PriceDirection::Decrease);
        assert!((rec.change_percentage + 14.44).abs() < 1e-9);
    }

    #[test]
    fn test_small_moves_maintain() {
        let rec = PriceRecommendation::summarize(100.0, 103.0);
        assert_eq!(rec.direction, PriceDirection::Maintain);

        // Exactly at the threshold counts as maintain
        let edge = PriceRecommendation::summarize(100.0, 105.0);
        assert_eq!(edge.direction, PriceDirection::Maintain);
    }
}
