#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_items")]
    EmptyItems,
    #[error("order.customer_details_missing")]
    CustomerDetailsMissing,
    #[error("order.not_found")]
    NotFound,
    #[error("order.submission_failed")]
    SubmissionFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification.unavailable")]
    Unavailable,
    #[error("notification.rejected: {0}")]
    Rejected(u16),
}
