use serde::{Deserialize, Serialize};

/// One entry on the weekly grocery list. Identity is the case-insensitive
/// name, which is also the deduplication key during regeneration; there is
/// no synthetic id so regenerating from the same history yields an
/// identical list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub is_checked: bool,
    /// How many times the item appears in the purchase history. `None` for
    /// entries the user added by hand.
    pub frequency: Option<u32>,
}

impl GroceryItem {
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_case_insensitive() {
        let a = GroceryItem {
            name: "Milk".to_string(),
            quantity: 1.0,
            unit: "l".to_string(),
            is_checked: false,
            frequency: None,
        };
        let b = GroceryItem {
            name: "MILK".to_string(),
            ..a.clone()
        };
        assert_eq!(a.key(), b.key());
    }
}
