use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartTotals};

/// A line as sent by the client: menu item id and how many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedLine {
    pub item_id: String,
    pub quantity: u32,
}

pub struct PriceCartParams {
    pub lines: Vec<RequestedLine>,
}

#[derive(Debug, Clone)]
pub struct PricedCart {
    pub cart: Cart,
    pub totals: CartTotals,
}

#[async_trait]
pub trait PriceCartUseCase: Send + Sync {
    async fn execute(&self, params: PriceCartParams) -> Result<PricedCart, CartError>;
}
