use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::menu::catalog::braai_menu;
use business::domain::menu::model::MenuItem;
use business::domain::menu::repository::MenuRepository;

/// The menu is fixed at build time and served from memory.
pub struct StaticMenuRepository {
    items: Vec<MenuItem>,
}

impl StaticMenuRepository {
    pub fn new() -> Self {
        Self::with_items(braai_menu())
    }

    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

impl Default for StaticMenuRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuRepository for StaticMenuRepository {
    async fn get_all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        Ok(self.items.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<MenuItem, RepositoryError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_catalog_in_display_order() {
        let repository = StaticMenuRepository::new();

        let items = repository.get_all().await.unwrap();

        assert_eq!(items.len(), 10);
        assert_eq!(items[0].id, "1");
    }

    #[tokio::test]
    async fn should_find_item_by_id() {
        let repository = StaticMenuRepository::new();

        let item = repository.get_by_id("6").await.unwrap();

        assert!(item.spicy);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repository = StaticMenuRepository::new();

        let result = repository.get_by_id("99").await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }
}
