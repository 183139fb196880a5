use serde::{Deserialize, Serialize};

use crate::domain::cart::errors::CartError;
use crate::domain::menu::model::MenuItem;
use crate::domain::shared::value_objects::Money;

/// Delivery is free once the subtotal is strictly above this amount.
pub const FREE_DELIVERY_THRESHOLD: Money = Money::from_major(200);
pub const DELIVERY_FEE: Money = Money::from_major(35);

/// A menu item in the cart. Price is copied when the item is added so later
/// catalog changes never reprice an open cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    pub image: String,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

impl CartTotals {
    pub fn from_subtotal(subtotal: Money) -> Self {
        let delivery_fee = if subtotal > FREE_DELIVERY_THRESHOLD {
            Money::ZERO
        } else {
            DELIVERY_FEE
        };

        Self {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }

    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee == Money::ZERO
    }
}

/// Line items in insertion order. No line ever has a zero quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `item`, merging with an existing line for the same id.
    /// A zero quantity is ignored. A merge that would overflow the line
    /// quantity fails and leaves the cart unchanged.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Ok(());
        }

        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidQuantity)?;
            }
            None => self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity,
                image: item.image.clone(),
            }),
        }
        Ok(())
    }

    /// Sets the quantity of a line; zero or less removes it. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|line| line.id != id);
    }

    pub fn compute_totals(&self) -> CartTotals {
        CartTotals::from_subtotal(self.lines.iter().map(CartLine::line_total).sum())
    }

    /// Total number of units, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
