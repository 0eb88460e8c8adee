use foodwise_shared::FoodItem;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// A candidate meal the dashboard can propose from what is on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub difficulty: Difficulty,
    pub prep_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub recipe: Recipe,
    /// Ingredients of the recipe found in the inventory, case-insensitive.
    pub available: Vec<String>,
}

/// Rank recipes by how many of their ingredients the inventory already
/// covers, most covered first. Recipes with nothing on hand are dropped;
/// ties keep input order.
pub fn suggest_meals(recipes: &[Recipe], items: &[FoodItem]) -> Vec<Suggestion> {
    let on_hand: Vec<String> = items.iter().map(|item| item.name.to_lowercase()).collect();

    let mut suggestions: Vec<Suggestion> = recipes
        .iter()
        .filter_map(|recipe| {
            let available: Vec<String> = recipe
                .ingredients
                .iter()
                .filter(|ingredient| on_hand.contains(&ingredient.to_lowercase()))
                .cloned()
                .collect();
            if available.is_empty() {
                None
            } else {
                Some(Suggestion {
                    recipe: recipe.clone(),
                    available,
                })
            }
        })
        .collect();
    suggestions.sort_by_key(|s| std::cmp::Reverse(s.available.len()));
    suggestions
}
