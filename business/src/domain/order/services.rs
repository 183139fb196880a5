use async_trait::async_trait;

use super::errors::NotificationError;
use super::model::Order;

/// Service port that tells the restaurant about a new order (email in production).
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn notify(&self, order: &Order) -> Result<(), NotificationError>;
}
