use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::MenuItem;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Returns the catalog in display order.
    async fn get_all(&self) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<MenuItem, RepositoryError>;
}
