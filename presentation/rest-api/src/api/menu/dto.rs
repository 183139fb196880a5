use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::menu::model::MenuItem;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct MenuItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in rand, two decimals
    pub price: f64,
    pub image: String,
    pub category: String,
    pub spicy: bool,
    pub popular: bool,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price.as_decimal(),
            image: item.image,
            category: item.category.to_string(),
            spicy: item.spicy,
            popular: item.popular,
        }
    }
}
