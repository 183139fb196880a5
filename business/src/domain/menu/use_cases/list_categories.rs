use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::value_objects::CategoryFilter;

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryFilter>, MenuError>;
}
