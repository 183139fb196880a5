use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::cart::use_cases::price::{PriceCartParams, PriceCartUseCase};

use crate::api::cart::dto::{CartTotalsRequest, CartTotalsResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    price_use_case: Arc<dyn PriceCartUseCase>,
}

impl CartApi {
    pub fn new(price_use_case: Arc<dyn PriceCartUseCase>) -> Self {
        Self { price_use_case }
    }
}

#[OpenApi]
impl CartApi {
    /// Price a cart
    ///
    /// Prices each line from the menu and applies the delivery fee
    /// (R35, waived when the subtotal is above R200).
    #[oai(path = "/cart/totals", method = "post", tag = "ApiTags::Cart")]
    async fn cart_totals(&self, body: Json<CartTotalsRequest>) -> CartTotalsApiResponse {
        let params = PriceCartParams {
            lines: body.0.lines.into_iter().map(Into::into).collect(),
        };

        match self.price_use_case.execute(params).await {
            Ok(priced) => CartTotalsApiResponse::Ok(Json(priced.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartTotalsApiResponse::BadRequest(json),
                    _ => CartTotalsApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartTotalsApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartTotalsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
