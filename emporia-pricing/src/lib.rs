pub mod config;
pub mod error;
pub mod input;
pub mod recommendation;
pub mod rules;
pub mod scorer;

pub use config::ScorerConfig;
pub use error::PricingError;
pub use input::PricingInput;
pub use recommendation::{PriceDirection, PriceRecommendation};
pub use scorer::{PriceScorer, PricingResult};
