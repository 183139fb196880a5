use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::location::errors::LocationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for LocationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            LocationError::InvalidCoordinates => (StatusCode::BAD_REQUEST, "ValidationError"),
            LocationError::Unsupported => (StatusCode::NOT_IMPLEMENTED, "Unsupported"),
            LocationError::LookupFailed | LocationError::NoResults => {
                (StatusCode::BAD_GATEWAY, "LookupFailed")
            }
        };

        (
            status,
            Json(ErrorResponse::new(name, self.to_string())),
        )
    }
}
