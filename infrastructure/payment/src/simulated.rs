use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use business::domain::payment::errors::PaymentError;
use business::domain::payment::model::{CardDetails, PaymentReceipt};
use business::domain::payment::services::CardPaymentProcessor;
use business::domain::shared::value_objects::Money;

/// Stand-in card processor. Waits for the configured delay and approves every
/// positive amount. No card data leaves the process.
pub struct SimulatedCardProcessor {
    delay: Duration,
}

impl SimulatedCardProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl CardPaymentProcessor for SimulatedCardProcessor {
    async fn process(
        &self,
        _card: &CardDetails,
        amount: Money,
    ) -> Result<PaymentReceipt, PaymentError> {
        tokio::time::sleep(self.delay).await;

        if !amount.is_positive() {
            return Err(PaymentError::Declined);
        }

        Ok(PaymentReceipt {
            reference: format!("sim-{}", Uuid::new_v4()),
            processed_at: Utc::now(),
        })
    }
}
