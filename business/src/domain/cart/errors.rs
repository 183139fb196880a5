#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.unknown_menu_item: {0}")]
    UnknownMenuItem(String),
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
