use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::price::{
    PriceCartParams, PriceCartUseCase, PricedCart, RequestedLine,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::menu::repository::MenuRepository;

/// Fills a cart from client lines, pricing each from the menu.
///
/// Client-supplied prices are never trusted; unknown ids and zero quantities
/// reject the whole request.
pub(crate) async fn build_cart(
    menu: &dyn MenuRepository,
    lines: &[RequestedLine],
) -> Result<Cart, CartError> {
    let mut cart = Cart::new();
    for line in lines {
        if line.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let item = menu.get_by_id(&line.item_id).await.map_err(|e| match e {
            RepositoryError::NotFound => CartError::UnknownMenuItem(line.item_id.clone()),
            other => CartError::Repository(other),
        })?;
        cart.add_item(&item, line.quantity)?;
    }
    Ok(cart)
}

pub struct PriceCartUseCaseImpl {
    pub menu_repository: Arc<dyn MenuRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PriceCartUseCase for PriceCartUseCaseImpl {
    async fn execute(&self, params: PriceCartParams) -> Result<PricedCart, CartError> {
        let cart = build_cart(self.menu_repository.as_ref(), &params.lines).await?;
        let totals = cart.compute_totals();

        self.logger.debug(&format!(
            "Priced cart with {} units: subtotal {}, delivery {}, total {}",
            cart.item_count(),
            totals.subtotal,
            totals.delivery_fee,
            totals.total
        ));
        Ok(PricedCart { cart, totals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::catalog::braai_menu;
    use crate::domain::menu::model::MenuItem;
    use crate::domain::shared::value_objects::Money;
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

    fn catalog_repo() -> MockMenuRepo {
        let mut mock_repo = MockMenuRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            braai_menu()
                .into_iter()
                .find(|item| item.id == id)
                .ok_or(RepositoryError::NotFound)
        });
        mock_repo
    }

    fn line(item_id: &str, quantity: u32) -> RequestedLine {
        RequestedLine {
            item_id: item_id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_price_lines_from_menu() {
        let use_case = PriceCartUseCaseImpl {
            menu_repository: Arc::new(catalog_repo()),
            logger: mock_logger(),
        };

        let priced = use_case
            .execute(PriceCartParams {
                lines: vec![line("1", 1), line("9", 2)],
            })
            .await
            .unwrap();

        assert_eq!(priced.totals.subtotal, Money::from_major(229));
        assert_eq!(priced.totals.delivery_fee, Money::ZERO);
        assert_eq!(priced.cart.item_count(), 3);
    }

    #[tokio::test]
    async fn should_merge_repeated_item_ids() {
        let use_case = PriceCartUseCaseImpl {
            menu_repository: Arc::new(catalog_repo()),
            logger: mock_logger(),
        };

        let priced = use_case
            .execute(PriceCartParams {
                lines: vec![line("7", 1), line("7", 2)],
            })
            .await
            .unwrap();

        assert_eq!(priced.cart.lines().len(), 1);
        assert_eq!(priced.totals.subtotal, Money::from_major(75));
        assert_eq!(priced.totals.total, Money::from_major(110));
    }

    #[tokio::test]
    async fn should_reject_repeated_ids_when_merged_quantity_overflows() {
        let use_case = PriceCartUseCaseImpl {
            menu_repository: Arc::new(catalog_repo()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PriceCartParams {
                lines: vec![line("1", u32::MAX), line("1", 1)],
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_count_units_when_lines_near_quantity_limit() {
        let menu = catalog_repo();

        let cart = build_cart(&menu, &[line("1", u32::MAX), line("2", 1)])
            .await
            .unwrap();

        assert_eq!(cart.item_count(), u64::from(u32::MAX) + 1);
        assert_eq!(cart.lines().len(), 2);
    }

    #[tokio::test]
    async fn should_reject_unknown_item() {
        let use_case = PriceCartUseCaseImpl {
            menu_repository: Arc::new(catalog_repo()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PriceCartParams {
                lines: vec![line("42", 1)],
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::UnknownMenuItem(id) if id == "42"
        ));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let use_case = PriceCartUseCaseImpl {
            menu_repository: Arc::new(MockMenuRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PriceCartParams {
                lines: vec![line("1", 0)],
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
