use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::model::CartTotals;
use crate::domain::cart::use_cases::price::RequestedLine;
use crate::domain::checkout::details::DeliveryDetails;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::order::value_objects::PaymentMethod;
use crate::domain::shared::value_objects::SessionContext;

/// Raw card input; masking is applied when it is typed into the card form.
#[derive(Debug, Clone, Default)]
pub struct CardInput {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub cardholder_name: String,
}

#[derive(Debug, Clone)]
pub enum PaymentInput {
    Cash,
    Card(CardInput),
}

pub struct PlaceOrderParams {
    pub session: SessionContext,
    pub lines: Vec<RequestedLine>,
    pub details: DeliveryDetails,
    pub payment: PaymentInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    pub order_id: Uuid,
    pub totals: CartTotals,
    pub payment_method: PaymentMethod,
    /// Non-fatal problems, e.g. the confirmation email could not be sent.
    pub warnings: Vec<String>,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<CheckoutOutcome, CheckoutError>;
}
