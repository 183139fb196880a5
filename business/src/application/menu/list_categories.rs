use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::menu::use_cases::list_categories::ListCategoriesUseCase;
use crate::domain::menu::value_objects::CategoryFilter;

pub struct ListCategoriesUseCaseImpl {
    pub repository: Arc<dyn MenuRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    /// `All` first, then each category in the order it first appears on the menu.
    async fn execute(&self) -> Result<Vec<CategoryFilter>, MenuError> {
        let items = self.repository.get_all().await?;

        let mut categories = vec![CategoryFilter::All];
        for item in items {
            let filter = CategoryFilter::Only(item.category);
            if !categories.contains(&filter) {
                categories.push(filter);
            }
        }

        self.logger
            .debug(&format!("Menu has {} categories", categories.len() - 1));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::menu::catalog::braai_menu;
    use crate::domain::menu::model::MenuItem;
    use crate::domain::menu::value_objects::MenuCategory;
    use mockall::mock;

    mock! {
        pub MenuRepo {}

        #[async_trait]
        impl MenuRepository for MenuRepo {
            async fn get_all(&self) -> Result<Vec<MenuItem>, RepositoryError>;
            async fn get_by_id(&self, id: &str) -> Result<MenuItem, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_list_distinct_categories_in_menu_order() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(braai_menu()));

        let use_case = ListCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        assert_eq!(
            categories,
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(MenuCategory::ComboMeals),
                CategoryFilter::Only(MenuCategory::Traditional),
                CategoryFilter::Only(MenuCategory::Specialties),
                CategoryFilter::Only(MenuCategory::Sharing),
                CategoryFilter::Only(MenuCategory::Vegetarian),
                CategoryFilter::Only(MenuCategory::Drinks),
            ]
        );
    }

    #[tokio::test]
    async fn should_only_offer_all_when_menu_empty() {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = ListCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert_eq!(use_case.execute().await.unwrap(), vec![CategoryFilter::All]);
    }
}
