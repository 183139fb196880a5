use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::location::use_cases::prefill_address::{
    PrefillAddressParams, PrefillAddressUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::location::dto::{PrefillAddressRequest, PrefillAddressResponse};
use crate::api::tags::ApiTags;

pub struct LocationApi {
    prefill_use_case: Arc<dyn PrefillAddressUseCase>,
}

impl LocationApi {
    pub fn new(prefill_use_case: Arc<dyn PrefillAddressUseCase>) -> Self {
        Self { prefill_use_case }
    }
}

#[OpenApi]
impl LocationApi {
    /// Delivery address from device position
    ///
    /// Falls back to "Current Location (lat, lng)" with a warning when no
    /// place name can be found.
    #[oai(path = "/location/address", method = "post", tag = "ApiTags::Location")]
    async fn prefill_address(&self, body: Json<PrefillAddressRequest>) -> PrefillAddressApiResponse {
        let params = PrefillAddressParams {
            latitude: body.0.latitude,
            longitude: body.0.longitude,
        };

        match self.prefill_use_case.execute(params).await {
            Ok(prefill) => PrefillAddressApiResponse::Ok(Json(prefill.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PrefillAddressApiResponse::BadRequest(json),
                    _ => PrefillAddressApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PrefillAddressApiResponse {
    #[oai(status = 200)]
    Ok(Json<PrefillAddressResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
