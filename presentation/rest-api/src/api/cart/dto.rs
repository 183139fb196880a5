use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartLine, CartTotals};
use business::domain::cart::use_cases::price::{PricedCart, RequestedLine};

/// One cart line as the client sends it. Prices always come from the menu.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartLineRequest {
    pub item_id: String,
    #[oai(validator(minimum(value = "1"), maximum(value = "999")))]
    pub quantity: u32,
}

impl From<CartLineRequest> for RequestedLine {
    fn from(dto: CartLineRequest) -> Self {
        Self {
            item_id: dto.item_id,
            quantity: dto.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartTotalsRequest {
    pub lines: Vec<CartLineRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartLineResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub line_total: f64,
    pub image: String,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            price: line.price.as_decimal(),
            quantity: line.quantity,
            line_total: line.line_total().as_decimal(),
            image: line.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct TotalsResponse {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub free_delivery: bool,
}

impl From<CartTotals> for TotalsResponse {
    fn from(totals: CartTotals) -> Self {
        Self {
            subtotal: totals.subtotal.as_decimal(),
            delivery_fee: totals.delivery_fee.as_decimal(),
            total: totals.total.as_decimal(),
            free_delivery: totals.has_free_delivery(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartTotalsResponse {
    pub lines: Vec<CartLineResponse>,
    /// Units across all lines, for the cart badge
    pub item_count: u64,
    pub totals: TotalsResponse,
}

impl From<PricedCart> for CartTotalsResponse {
    fn from(priced: PricedCart) -> Self {
        Self {
            lines: priced.cart.lines().iter().map(CartLineResponse::from).collect(),
            item_count: priced.cart.item_count(),
            totals: priced.totals.into(),
        }
    }
}
