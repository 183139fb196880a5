use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;
use business::domain::order::errors::OrderError;
use business::domain::payment::errors::PaymentError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            CheckoutError::Cart(inner) => return inner.into_error_response(),
            err @ (CheckoutError::EmptyCart
            | CheckoutError::MissingFields(_)
            | CheckoutError::InvalidCard(_)) => {
                (StatusCode::BAD_REQUEST, "ValidationError", err.to_string())
            }
            err @ CheckoutError::InvalidTransition { .. } => {
                (StatusCode::CONFLICT, "Conflict", err.to_string())
            }
            err @ CheckoutError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", err.to_string())
            }
            CheckoutError::Payment(inner) => {
                let (status, name) = match inner {
                    PaymentError::Declined => (StatusCode::PAYMENT_REQUIRED, "PaymentDeclined"),
                    PaymentError::ProcessorUnavailable => {
                        (StatusCode::SERVICE_UNAVAILABLE, "PaymentUnavailable")
                    }
                };
                (status, name, inner.to_string())
            }
            CheckoutError::Submission(inner) => {
                let (status, name) = match inner {
                    OrderError::SubmissionFailed => {
                        (StatusCode::SERVICE_UNAVAILABLE, "SubmissionFailed")
                    }
                    OrderError::EmptyItems | OrderError::CustomerDetailsMissing => {
                        (StatusCode::BAD_REQUEST, "ValidationError")
                    }
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
                };
                (status, name, inner.to_string())
            }
        };

        (
            status,
            Json(ErrorResponse::new(name, message)),
        )
    }
}
