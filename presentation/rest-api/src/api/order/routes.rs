use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, UpdateOrderStatusRequest};
use crate::api::security::AdminApiKey;
use crate::api::tags::ApiTags;

pub struct AdminOrderApi {
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl AdminOrderApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            update_status_use_case,
        }
    }
}

/// Admin order API
///
/// Kitchen dashboard endpoints. Every call needs the `x-api-key` header.
#[OpenApi]
impl AdminOrderApi {
    /// List all orders, newest first
    #[oai(path = "/admin/orders", method = "get", tag = "ApiTags::AdminOrders")]
    async fn get_all_orders(&self, _auth: AdminApiKey) -> GetAllOrdersResponse {
        match self.get_all_use_case.execute().await {
            Ok(orders) => GetAllOrdersResponse::Ok(Json(
                orders.into_iter().map(OrderResponse::from).collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Move an order to another kitchen status
    #[oai(
        path = "/admin/orders/:id/status",
        method = "put",
        tag = "ApiTags::AdminOrders"
    )]
    async fn update_order_status(
        &self,
        _auth: AdminApiKey,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(Json(ErrorResponse::validation(
                    "order.invalid_id",
                )));
            }
        };

        let params = UpdateOrderStatusParams {
            id: uuid,
            status: body.0.status.into(),
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
