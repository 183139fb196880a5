use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::menu::use_cases::list::{ListMenuParams, ListMenuUseCase};

pub struct ListMenuUseCaseImpl {
    pub repository: Arc<dyn MenuRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListMenuUseCase for ListMenuUseCaseImpl {
    async fn execute(&self, params: ListMenuParams) -> Result<Vec<MenuItem>, MenuError> {
        self.logger
            .debug(&format!("Listing menu for category: {}", params.filter));

        let items: Vec<MenuItem> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(|item| params.filter.matches(item.category))
            .collect();

        self.logger.debug(&format!("Found {} menu items", items.len()));
        Ok(items)
    }
}
