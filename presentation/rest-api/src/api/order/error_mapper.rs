use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::EmptyItems => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.empty_items",
            ),
            OrderError::CustomerDetailsMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.customer_details_missing",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::SubmissionFailed => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SubmissionFailed",
                "order.submission_failed",
            ),
            OrderError::Repository(_) => (
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
