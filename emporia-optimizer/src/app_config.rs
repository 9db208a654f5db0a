use serde::Deserialize;
use std::env;

use emporia_pricing::ScorerConfig;

use crate::sweep::OptimizerConfig;

/// Full runtime configuration: worker cadence plus scorer knobs.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    #[serde(default)]
    pub scorer: ScorerConfig,
}

impl AppConfig {
    /// Layered load: `config/default`, then an optional run-mode file, then
    /// an optional local file, then `EMPORIA__`-prefixed environment
    /// variables. Every file is optional because every field has a default.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("EMPORIA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sources_fall_back_to_defaults() {
        let config: AppConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.optimizer.sweep_interval_secs, 30);
        assert_eq!(config.optimizer.apply_threshold, 0.02);
        assert_eq!(config.scorer.low_inventory_threshold, 20);
    }

    #[test]
    fn test_section_overrides() {
        let config: AppConfig = config::Config::builder()
            .set_override("optimizer.apply_threshold", 0.05)
            .unwrap()
            .set_override("scorer.max_markup_factor", 2.0)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.optimizer.apply_threshold, 0.05);
        assert_eq!(config.scorer.max_markup_factor, 2.0);
        // Untouched knobs keep their defaults
        assert_eq!(config.scorer.min_markup_factor, 0.70);
    }
}
