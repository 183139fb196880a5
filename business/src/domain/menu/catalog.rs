use super::model::MenuItem;
use super::value_objects::MenuCategory;
use crate::domain::shared::value_objects::Money;

const PAP_MEAL_IMAGE: &str = "pap-meal.jpg";
const BOEREWORS_IMAGE: &str = "boerewors.jpg";
const POTJIEKOS_IMAGE: &str = "potjiekos.jpg";

fn entry(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    image: &str,
    category: MenuCategory,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_major(price),
        image: image.to_string(),
        category,
        spicy: false,
        popular: false,
    }
}

/// The restaurant's fixed menu, in display order.
pub fn braai_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            popular: true,
            ..entry(
                "1",
                "Traditional Pap & Braai Combo",
                "Flame-grilled meat with stiff pap and chakalaka",
                159,
                PAP_MEAL_IMAGE,
                MenuCategory::ComboMeals,
            )
        },
        entry(
            "2",
            "Boerewors & Pap",
            "Coiled farm sausage with pap and tomato relish",
            119,
            BOEREWORS_IMAGE,
            MenuCategory::Traditional,
        ),
        MenuItem {
            popular: true,
            ..entry(
                "3",
                "Potjiekos Special",
                "Slow-cooked three-legged pot stew",
                189,
                POTJIEKOS_IMAGE,
                MenuCategory::Specialties,
            )
        },
        entry(
            "4",
            "Braai Platter for Two",
            "Mixed grill to share",
            299,
            PAP_MEAL_IMAGE,
            MenuCategory::Sharing,
        ),
        entry(
            "5",
            "Pap & Morogo",
            "Pap with wild spinach",
            89,
            POTJIEKOS_IMAGE,
            MenuCategory::Vegetarian,
        ),
        MenuItem {
            spicy: true,
            ..entry(
                "6",
                "Sosaties",
                "Marinated kebabs off the grill",
                145,
                BOEREWORS_IMAGE,
                MenuCategory::Traditional,
            )
        },
        entry(
            "7",
            "Mageu",
            "Fermented maize drink",
            25,
            POTJIEKOS_IMAGE,
            MenuCategory::Drinks,
        ),
        entry(
            "8",
            "Rooibos Tea",
            "",
            20,
            BOEREWORS_IMAGE,
            MenuCategory::Drinks,
        ),
        entry(
            "9",
            "Castle Lager",
            "",
            35,
            PAP_MEAL_IMAGE,
            MenuCategory::Drinks,
        ),
        entry(
            "10",
            "Amarula Cream",
            "",
            45,
            POTJIEKOS_IMAGE,
            MenuCategory::Drinks,
        ),
    ]
}
