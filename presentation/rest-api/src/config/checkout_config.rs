use std::time::Duration;

/// Checkout settings
///
/// Environment variables:
/// - CARD_PROCESSING_DELAY_MS: simulated card processing time (default: 2000)
pub struct CheckoutConfig {
    pub card_processing_delay: Duration,
}

impl CheckoutConfig {
    pub fn from_env() -> Self {
        let delay_ms = std::env::var("CARD_PROCESSING_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(2000);

        Self {
            card_processing_delay: Duration::from_millis(delay_ms),
        }
    }
}
