/// Pricing-related errors
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("invalid input: {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl PricingError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
