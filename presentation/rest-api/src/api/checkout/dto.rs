use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::checkout::details::DeliveryDetails;
use business::domain::checkout::use_cases::place_order::{
    CardInput, CheckoutOutcome, PaymentInput,
};

use crate::api::cart::dto::{CartLineRequest, TotalsResponse};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum PaymentMethodDto {
    #[oai(rename = "cash")]
    Cash,
    #[oai(rename = "card")]
    Card,
}

/// Card form exactly as typed. Masking is applied server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CardRequest {
    pub card_number: String,
    /// MM/YY
    pub expiry: String,
    pub cvv: String,
    pub cardholder_name: String,
}

impl From<CardRequest> for CardInput {
    fn from(dto: CardRequest) -> Self {
        Self {
            card_number: dto.card_number,
            expiry: dto.expiry,
            cvv: dto.cvv,
            cardholder_name: dto.cardholder_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CheckoutRequest {
    pub lines: Vec<CartLineRequest>,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
    pub payment_method: PaymentMethodDto,
    /// Required when paying by card
    pub card: Option<CardRequest>,
}

impl CheckoutRequest {
    pub fn delivery_details(&self) -> DeliveryDetails {
        DeliveryDetails {
            customer_name: self.customer_name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            notes: self.notes.clone(),
        }
    }

    /// A card payment without card data becomes an empty form, which fails
    /// card validation.
    pub fn payment_input(&self) -> PaymentInput {
        match self.payment_method {
            PaymentMethodDto::Cash => PaymentInput::Cash,
            PaymentMethodDto::Card => PaymentInput::Card(
                self.card.clone().map(CardInput::from).unwrap_or_default(),
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CheckoutResponse {
    pub order_id: Uuid,
    pub totals: TotalsResponse,
    /// "Cash on Delivery" or "Credit/Debit Card"
    pub payment_method: String,
    /// Non-blocking problems, e.g. "order.notification_not_sent"
    pub warnings: Vec<String>,
}

impl From<CheckoutOutcome> for CheckoutResponse {
    fn from(outcome: CheckoutOutcome) -> Self {
        Self {
            order_id: outcome.order_id,
            totals: outcome.totals.into(),
            payment_method: outcome.payment_method.label().to_string(),
            warnings: outcome.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(payment_method: PaymentMethodDto, card: Option<CardRequest>) -> CheckoutRequest {
        CheckoutRequest {
            lines: vec![],
            customer_name: "Bongani".to_string(),
            phone: "0761234567".to_string(),
            address: "8 Florida Rd, Durban".to_string(),
            notes: None,
            payment_method,
            card,
        }
    }

    #[test]
    fn should_ignore_card_when_paying_cash() {
        let card = CardRequest {
            card_number: "4111111111111111".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "Bongani".to_string(),
        };

        let payment = request(PaymentMethodDto::Cash, Some(card)).payment_input();

        assert!(matches!(payment, PaymentInput::Cash));
    }

    #[test]
    fn should_use_empty_card_when_card_missing() {
        let payment = request(PaymentMethodDto::Card, None).payment_input();

        match payment {
            PaymentInput::Card(card) => assert!(card.card_number.is_empty()),
            PaymentInput::Cash => panic!("expected card payment"),
        }
    }
}
