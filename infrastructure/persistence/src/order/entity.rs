use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::cart::model::CartLine;
use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::value_objects::{OrderStatus, PaymentMethod};
use business::domain::shared::value_objects::Money;

/// Line item as stored in the `items` jsonb column. Prices are decimal rand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
}

impl From<&CartLine> for OrderItemRecord {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            price: line.price.as_decimal(),
            quantity: line.quantity,
            image: line.image.clone(),
        }
    }
}

impl From<OrderItemRecord> for CartLine {
    fn from(record: OrderItemRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: Money::from_decimal(record.price),
            quantity: record.quantity,
            image: record.image,
        }
    }
}

pub fn money_to_decimal(amount: Money) -> BigDecimal {
    BigDecimal::new(BigInt::from(amount.cents()), 2)
}

pub fn decimal_to_money(amount: &BigDecimal) -> Result<Money, RepositoryError> {
    (amount * BigDecimal::from(100))
        .round(0)
        .to_i64()
        .map(Money::from_cents)
        .ok_or(RepositoryError::Serialization)
}

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub special_instructions: Option<String>,
    pub items: Json<Vec<OrderItemRecord>>,
    pub total: BigDecimal,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let payment_method = self
            .payment_method
            .parse::<PaymentMethod>()
            .map_err(|_| RepositoryError::Serialization)?;
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|_| RepositoryError::Serialization)?;
        let total = decimal_to_money(&self.total)?;

        Ok(Order::from_repository(
            self.id,
            self.customer_name,
            self.customer_phone,
            self.customer_address,
            self.special_instructions,
            self.items.0.into_iter().map(CartLine::from).collect(),
            total,
            payment_method,
            status,
            self.created_at,
            self.updated_at,
        ))
    }
}
