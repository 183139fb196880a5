use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::{OrderStatus, PaymentMethod};
use crate::domain::cart::model::{Cart, CartLine};
use crate::domain::checkout::details::DeliveryDetails;
use crate::domain::shared::value_objects::Money;

/// A placed order. Immutable once handed to the submission adapter; only the
/// kitchen status changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub special_instructions: Option<String>,
    pub items: Vec<CartLine>,
    pub total: Money,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from the current cart. The total is taken from the
    /// cart at this moment, delivery fee included.
    pub fn place(
        details: &DeliveryDetails,
        cart: &Cart,
        payment_method: PaymentMethod,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        if !details.missing_fields().is_empty() {
            return Err(OrderError::CustomerDetailsMissing);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            customer_name: details.customer_name.trim().to_string(),
            customer_phone: details.phone.trim().to_string(),
            customer_address: details.address.trim().to_string(),
            special_instructions: details.trimmed_notes(),
            items: cart.lines().to_vec(),
            total: cart.compute_totals().total,
            payment_method,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        customer_name: String,
        customer_phone: String,
        customer_address: String,
        special_instructions: Option<String>,
        items: Vec<CartLine>,
        total: Money,
        payment_method: PaymentMethod,
        status: OrderStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name,
            customer_phone,
            customer_address,
            special_instructions,
            items,
            total,
            payment_method,
            status,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::model::MenuItem;
    use crate::domain::menu::value_objects::MenuCategory;

    fn details() -> DeliveryDetails {
        DeliveryDetails {
            customer_name: " Naledi ".to_string(),
            phone: "0845556666".to_string(),
            address: "7 Church St, Pretoria".to_string(),
            notes: Some("Ring twice".to_string()),
        }
    }

    fn cart(price: i64) -> Cart {
        let mut cart = Cart::new();
        cart.add_item(
            &MenuItem {
                id: "4".to_string(),
                name: "Braai Platter for Two".to_string(),
                description: String::new(),
                price: Money::from_major(price),
                image: "pap-meal.jpg".to_string(),
                category: MenuCategory::Sharing,
                spicy: false,
                popular: false,
            },
            1,
        )
        .unwrap();
        cart
    }

    #[test]
    fn should_place_pending_order_with_cart_total() {
        let order = Order::place(&details(), &cart(299), PaymentMethod::Cash).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Money::from_major(299));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.customer_name, "Naledi");
        assert_eq!(order.special_instructions.as_deref(), Some("Ring twice"));
    }

    #[test]
    fn should_include_delivery_fee_in_total() {
        let order = Order::place(&details(), &cart(119), PaymentMethod::Card).unwrap();

        assert_eq!(order.total, Money::from_major(154));
    }

    #[test]
    fn should_reject_empty_cart() {
        let result = Order::place(&details(), &Cart::new(), PaymentMethod::Cash);

        assert!(matches!(result.unwrap_err(), OrderError::EmptyItems));
    }

    #[test]
    fn should_reject_missing_phone() {
        let incomplete = DeliveryDetails {
            phone: String::new(),
            ..details()
        };

        let result = Order::place(&incomplete, &cart(299), PaymentMethod::Cash);

        assert!(matches!(
            result.unwrap_err(),
            OrderError::CustomerDetailsMissing
        ));
    }
}
