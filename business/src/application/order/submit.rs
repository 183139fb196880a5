use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::OrderNotifier;
use crate::domain::order::use_cases::submit::{SubmissionReport, SubmitOrderUseCase};

pub const PERSISTENCE_WARNING: &str = "order.not_recorded";
pub const NOTIFICATION_WARNING: &str = "order.notification_not_sent";

/// Hands an order to the restaurant through two independent channels: the
/// order store and the operator notification.
///
/// Both are attempted concurrently and never retried. The order counts as
/// submitted when at least one channel accepted it; the other channel's
/// failure becomes a warning.
pub struct SubmitOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub notifier: Arc<dyn OrderNotifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitOrderUseCase for SubmitOrderUseCaseImpl {
    async fn execute(&self, order: Order) -> Result<SubmissionReport, OrderError> {
        self.logger.info(&format!(
            "Submitting order {} ({} lines, total {}, {})",
            order.id,
            order.items.len(),
            order.total,
            order.payment_method
        ));

        let (saved, notified) =
            tokio::join!(self.repository.save(&order), self.notifier.notify(&order));

        let mut warnings = Vec::new();

        let persisted = match saved {
            Ok(()) => true,
            Err(e) => {
                self.logger
                    .error(&format!("Failed to persist order {}: {}", order.id, e));
                warnings.push(PERSISTENCE_WARNING.to_string());
                false
            }
        };

        let notified = match notified {
            Ok(()) => true,
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to notify about order {}: {}", order.id, e));
                warnings.push(NOTIFICATION_WARNING.to_string());
                false
            }
        };

        if !persisted && !notified {
            self.logger
                .error(&format!("Order {} reached no channel", order.id));
            return Err(OrderError::SubmissionFailed);
        }

        self.logger.info(&format!("Order submitted: {}", order.id));
        Ok(SubmissionReport {
            order_id: order.id,
            persisted,
            notified,
            warnings,
        })
    }
}
