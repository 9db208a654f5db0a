use serde::{Deserialize, Serialize};

/// Scoring thresholds and adjustment factors.
///
/// Every field has a serde default, so a partial config file (or an env
/// override of a single knob) deserializes cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Inventory strictly below this triggers a price bump
    #[serde(default = "default_low_inventory_threshold")]
    pub low_inventory_threshold: i32,

    /// Inventory strictly above this triggers a discount
    #[serde(default = "default_high_inventory_threshold")]
    pub high_inventory_threshold: i32,

    #[serde(default = "default_low_inventory_bump")]
    pub low_inventory_bump: f64,

    #[serde(default = "default_high_inventory_discount")]
    pub high_inventory_discount: f64,

    /// Margin above competitor average that counts as overpriced
    #[serde(default = "default_competitor_high_margin")]
    pub competitor_high_margin: f64,

    /// Margin below competitor average that counts as underpriced
    #[serde(default = "default_competitor_low_margin")]
    pub competitor_low_margin: f64,

    #[serde(default = "default_competitor_high_adjust")]
    pub competitor_high_adjust: f64,

    #[serde(default = "default_competitor_low_adjust")]
    pub competitor_low_adjust: f64,

    /// Sales volume strictly above this counts as high demand
    #[serde(default = "default_high_demand_threshold")]
    pub high_demand_threshold: i32,

    /// Sales volume strictly below this counts as low demand
    #[serde(default = "default_low_demand_threshold")]
    pub low_demand_threshold: i32,

    #[serde(default = "default_high_demand_bump")]
    pub high_demand_bump: f64,

    #[serde(default = "default_low_demand_discount")]
    pub low_demand_discount: f64,

    /// Floor of the suggested price as a multiple of base price
    #[serde(default = "default_min_markup_factor")]
    pub min_markup_factor: f64,

    /// Ceiling of the suggested price as a multiple of base price
    #[serde(default = "default_max_markup_factor")]
    pub max_markup_factor: f64,

    #[serde(default = "default_base_confidence")]
    pub base_confidence: f64,

    /// Confidence added per rule that fired
    #[serde(default = "default_rule_bonus")]
    pub rule_bonus: f64,

    /// Confidence deducted when the raw price had to be clamped
    #[serde(default = "default_clamp_penalty")]
    pub clamp_penalty: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            low_inventory_threshold: default_low_inventory_threshold(),
            high_inventory_threshold: default_high_inventory_threshold(),
            low_inventory_bump: default_low_inventory_bump(),
            high_inventory_discount: default_high_inventory_discount(),
            competitor_high_margin: default_competitor_high_margin(),
            competitor_low_margin: default_competitor_low_margin(),
            competitor_high_adjust: default_competitor_high_adjust(),
            competitor_low_adjust: default_competitor_low_adjust(),
            high_demand_threshold: default_high_demand_threshold(),
            low_demand_threshold: default_low_demand_threshold(),
            high_demand_bump: default_high_demand_bump(),
            low_demand_discount: default_low_demand_discount(),
            min_markup_factor: default_min_markup_factor(),
            max_markup_factor: default_max_markup_factor(),
            base_confidence: default_base_confidence(),
            rule_bonus: default_rule_bonus(),
            clamp_penalty: default_clamp_penalty(),
        }
    }
}

const fn default_low_inventory_threshold() -> i32 {
    20
}

const fn default_high_inventory_threshold() -> i32 {
    100
}

const fn default_low_inventory_bump() -> f64 {
    0.10
}

const fn default_high_inventory_discount() -> f64 {
    0.05
}

const fn default_competitor_high_margin() -> f64 {
    0.10
}

const fn default_competitor_low_margin() -> f64 {
    0.10
}

const fn default_competitor_high_adjust() -> f64 {
    0.08
}

const fn default_competitor_low_adjust() -> f64 {
    0.05
}

const fn default_high_demand_threshold() -> i32 {
    50
}

const fn default_low_demand_threshold() -> i32 {
    10
}

const fn default_high_demand_bump() -> f64 {
    0.03
}

const fn default_low_demand_discount() -> f64 {
    0.07
}

const fn default_min_markup_factor() -> f64 {
    0.70
}

const fn default_max_markup_factor() -> f64 {
    1.50
}

const fn default_base_confidence() -> f64 {
    0.75
}

const fn default_rule_bonus() -> f64 {
    0.05
}

const fn default_clamp_penalty() -> f64 {
    0.15
}
