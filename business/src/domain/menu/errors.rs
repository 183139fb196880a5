#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("menu.id_empty")]
    IdEmpty,
    #[error("menu.name_empty")]
    NameEmpty,
    #[error("menu.price_not_positive")]
    PriceNotPositive,
    #[error("menu.invalid_category")]
    InvalidCategory,
    #[error("menu.item_not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
