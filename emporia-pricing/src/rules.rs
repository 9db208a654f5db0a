use crate::config::ScorerConfig;
use crate::input::PricingInput;

/// A single multiplicative price adjustment and its justification.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub factor: f64,
    pub reason: &'static str,
}

/// The adjustment rules, in the order their reasons are reported.
///
/// Each rule is independent: it looks at one signal and either yields a
/// multiplicative factor or stays silent. Thresholds compare with strict
/// inequality, so a value sitting exactly on a threshold never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentRule {
    Inventory,
    Competitor,
    Demand,
}

impl AdjustmentRule {
    pub const ALL: [AdjustmentRule; 3] = [
        AdjustmentRule::Inventory,
        AdjustmentRule::Competitor,
        AdjustmentRule::Demand,
    ];

    pub fn evaluate(&self, input: &PricingInput, config: &ScorerConfig) -> Option<Adjustment> {
        match self {
            AdjustmentRule::Inventory => {
                if input.inventory_level < config.low_inventory_threshold {
                    Some(Adjustment {
                        factor: 1.0 + config.low_inventory_bump,
                        reason: "low inventory — price increased",
                    })
                } else if input.inventory_level > config.high_inventory_threshold {
                    Some(Adjustment {
                        factor: 1.0 - config.high_inventory_discount,
                        reason: "high inventory — price decreased",
                    })
                } else {
                    None
                }
            }
            AdjustmentRule::Competitor => {
                let avg = input.avg_competitor_price()?;
                if input.current_price > avg * (1.0 + config.competitor_high_margin) {
                    Some(Adjustment {
                        factor: 1.0 - config.competitor_high_adjust,
                        reason: "priced above competitors — decreased for competitiveness",
                    })
                } else if input.current_price < avg * (1.0 - config.competitor_low_margin) {
                    Some(Adjustment {
                        factor: 1.0 + config.competitor_low_adjust,
                        reason: "priced below competitors — increased to match market",
                    })
                } else {
                    None
                }
            }
            AdjustmentRule::Demand => {
                if input.recent_sales_volume > config.high_demand_threshold {
                    Some(Adjustment {
                        factor: 1.0 + config.high_demand_bump,
                        reason: "high demand — price optimized upward",
                    })
                } else if input.recent_sales_volume < config.low_demand_threshold {
                    Some(Adjustment {
                        factor: 1.0 - config.low_demand_discount,
                        reason: "low demand — price reduced to stimulate sales",
                    })
                } else {
                    None
                }
            }
        }
    }
}
