use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

/// Outcome of handing an order to the restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReport {
    pub order_id: Uuid,
    pub persisted: bool,
    pub notified: bool,
    pub warnings: Vec<String>,
}

#[async_trait]
pub trait SubmitOrderUseCase: Send + Sync {
    async fn execute(&self, order: Order) -> Result<SubmissionReport, OrderError>;
}
