pub mod app_config;
pub mod events;
pub mod feed;
pub mod sweep;

pub use app_config::AppConfig;
pub use events::{PriceAdjustedEvent, PricingEvent, PricingTelemetry, SweepCompletedEvent};
pub use feed::PriceFeed;
pub use sweep::{Optimizer, OptimizerConfig, SweepSummary};
