use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Changing status of order {} to {}",
            params.id, params.status
        ));

        let not_found = |e: RepositoryError| match e {
            RepositoryError::NotFound => OrderError::NotFound,
            other => OrderError::Repository(other),
        };

        self.repository
            .update_status(params.id, params.status, chrono::Utc::now())
            .await
            .map_err(not_found)?;

        let updated = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(not_found)?;

        self.logger
            .info(&format!("Order {} is now {}", updated.id, updated.status));
        Ok(updated)
    }
}
