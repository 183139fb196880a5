use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::shared::value_objects::{SessionContext, UserId};

use crate::api::checkout::dto::{CheckoutRequest, CheckoutResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
}

impl CheckoutApi {
    pub fn new(place_order_use_case: Arc<dyn PlaceOrderUseCase>) -> Self {
        Self {
            place_order_use_case,
        }
    }
}

/// Checkout API
///
/// Places an order in one request. Card payments are processed before the
/// order is handed to the restaurant.
#[OpenApi]
impl CheckoutApi {
    /// Place an order
    ///
    /// Succeeds when the order was recorded or the restaurant was notified;
    /// `warnings` names whichever channel failed.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn checkout(
        &self,
        auth: FirebaseBearer,
        body: Json<CheckoutRequest>,
    ) -> CheckoutApiResponse {
        let request = body.0;
        let params = PlaceOrderParams {
            session: SessionContext::authenticated(UserId::new(auth.0)),
            details: request.delivery_details(),
            payment: request.payment_input(),
            lines: request.lines.into_iter().map(Into::into).collect(),
        };

        match self.place_order_use_case.execute(params).await {
            Ok(outcome) => CheckoutApiResponse::Created(Json(outcome.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutApiResponse::BadRequest(json),
                    401 => CheckoutApiResponse::Unauthorized(json),
                    402 => CheckoutApiResponse::PaymentRequired(json),
                    409 => CheckoutApiResponse::Conflict(json),
                    503 => CheckoutApiResponse::ServiceUnavailable(json),
                    _ => CheckoutApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutApiResponse {
    #[oai(status = 201)]
    Created(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 402)]
    PaymentRequired(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
