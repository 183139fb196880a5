use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::menu::errors::MenuError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MenuError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MenuError::IdEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "menu.id_empty"),
            MenuError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "menu.name_empty",
            ),
            MenuError::PriceNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "menu.price_not_positive",
            ),
            MenuError::InvalidCategory => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "menu.invalid_category",
            ),
            MenuError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "menu.item_not_found"),
            MenuError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse::new(name, message)),
        )
    }
}
