#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment.declined")]
    Declined,
    #[error("payment.processor_unavailable")]
    ProcessorUnavailable,
}
