use async_trait::async_trait;

use super::errors::PaymentError;
use super::model::{CardDetails, PaymentReceipt};
use crate::domain::shared::value_objects::Money;

/// Service port for capturing a card payment.
///
/// Implementations may take seconds to answer; the call is awaited to
/// completion and cannot be aborted.
#[async_trait]
pub trait CardPaymentProcessor: Send + Sync {
    async fn process(
        &self,
        card: &CardDetails,
        amount: Money,
    ) -> Result<PaymentReceipt, PaymentError>;
}
