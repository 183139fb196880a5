use super::errors::MenuError;
use super::value_objects::MenuCategory;
use crate::domain::shared::value_objects::Money;

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
    pub category: MenuCategory,
    pub spicy: bool,
    pub popular: bool,
}

pub struct NewMenuItemProps {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
    pub category: MenuCategory,
    pub spicy: bool,
    pub popular: bool,
}

impl MenuItem {
    pub fn new(props: NewMenuItemProps) -> Result<Self, MenuError> {
        if props.id.trim().is_empty() {
            return Err(MenuError::IdEmpty);
        }
        if props.name.trim().is_empty() {
            return Err(MenuError::NameEmpty);
        }
        if !props.price.is_positive() {
            return Err(MenuError::PriceNotPositive);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            description: props.description,
            price: props.price,
            image: props.image,
            category: props.category,
            spicy: props.spicy,
            popular: props.popular,
        })
    }
}
