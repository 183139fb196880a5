use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MenuCategory {
    #[strum(serialize = "Combo Meals")]
    #[serde(rename = "Combo Meals")]
    ComboMeals,
    Traditional,
    Specialties,
    Sharing,
    Vegetarian,
    Drinks,
}

/// Category selector shown above the menu. `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(MenuCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: MenuCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<MenuCategory>()
            .map(CategoryFilter::Only)
            .map_err(|_| format!("Invalid menu category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_multi_word_category_with_space() {
        assert_eq!(MenuCategory::ComboMeals.to_string(), "Combo Meals");
    }

    #[test]
    fn should_parse_category_ignoring_case() {
        assert_eq!(
            "combo meals".parse::<MenuCategory>().unwrap(),
            MenuCategory::ComboMeals
        );
        assert_eq!("DRINKS".parse::<MenuCategory>().unwrap(), MenuCategory::Drinks);
    }

    #[test]
    fn should_parse_all_filter() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Sharing".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(MenuCategory::Sharing)
        );
    }

    #[test]
    fn should_parse_every_displayed_category_back() {
        use strum::IntoEnumIterator;

        for category in MenuCategory::iter() {
            assert_eq!(category.to_string().parse::<MenuCategory>().unwrap(), category);
        }
    }

    #[test]
    fn should_reject_unknown_filter() {
        assert!("Desserts".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn should_match_only_selected_category() {
        let filter = CategoryFilter::Only(MenuCategory::Drinks);
        assert!(filter.matches(MenuCategory::Drinks));
        assert!(!filter.matches(MenuCategory::Traditional));
        assert!(CategoryFilter::All.matches(MenuCategory::Traditional));
    }
}
