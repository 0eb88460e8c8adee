use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Food categories offered by the manual-entry form and produced by the
/// voice parser. Display strings are the exact labels shown to users.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum FoodCategory {
    #[strum(serialize = "Fruits & Vegetables")]
    #[serde(rename = "Fruits & Vegetables")]
    FruitsAndVegetables,
    #[strum(serialize = "Dairy & Eggs")]
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
    #[strum(serialize = "Meat & Seafood")]
    #[serde(rename = "Meat & Seafood")]
    MeatAndSeafood,
    Bakery,
    #[strum(serialize = "Pantry Items")]
    #[serde(rename = "Pantry Items")]
    PantryItems,
    #[strum(serialize = "Frozen Food")]
    #[serde(rename = "Frozen Food")]
    FrozenFood,
    Beverages,
    Snacks,
    Condiments,
    #[default]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_form_labels() {
        assert_eq!(
            FoodCategory::FruitsAndVegetables.to_string(),
            "Fruits & Vegetables"
        );
        assert_eq!(FoodCategory::DairyAndEggs.to_string(), "Dairy & Eggs");
        assert_eq!(FoodCategory::PantryItems.to_string(), "Pantry Items");
        assert_eq!(FoodCategory::Bakery.to_string(), "Bakery");
    }

    #[test]
    fn parses_back_from_label() {
        assert_eq!(
            FoodCategory::from_str("Meat & Seafood").unwrap(),
            FoodCategory::MeatAndSeafood
        );
        assert!(FoodCategory::from_str("Hardware").is_err());
    }

    #[test]
    fn defaults_to_other() {
        assert_eq!(FoodCategory::default(), FoodCategory::Other);
    }
}
