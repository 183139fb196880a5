use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::cart::model::CartLine;
use business::domain::order::model::Order;
use business::domain::order::value_objects::OrderStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "preparing")]
    Preparing,
    #[oai(rename = "ready")]
    Ready,
    #[oai(rename = "delivered")]
    Delivered,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Preparing => OrderStatusDto::Preparing,
            OrderStatus::Ready => OrderStatusDto::Ready,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Pending => OrderStatus::Pending,
            OrderStatusDto::Preparing => OrderStatus::Preparing,
            OrderStatusDto::Ready => OrderStatus::Ready,
            OrderStatusDto::Delivered => OrderStatus::Delivered,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderItemResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<CartLine> for OrderItemResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name,
            price: line.price.as_decimal(),
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub special_instructions: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub total: f64,
    pub payment_method: String,
    pub status: OrderStatusDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_address: order.customer_address,
            special_instructions: order.special_instructions,
            items: order.items.into_iter().map(Into::into).collect(),
            total: order.total.as_decimal(),
            payment_method: order.payment_method.label().to_string(),
            status: order.status.into(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatusDto,
}
