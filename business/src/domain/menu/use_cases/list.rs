use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;
use crate::domain::menu::value_objects::CategoryFilter;

pub struct ListMenuParams {
    pub filter: CategoryFilter,
}

#[async_trait]
pub trait ListMenuUseCase: Send + Sync {
    async fn execute(&self, params: ListMenuParams) -> Result<Vec<MenuItem>, MenuError>;
}
