use crate::category::FoodCategory;
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

/// A tracked food unit. Identity is the stable `id`; the record is only
/// ever mutated by full replacement, never field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub expiry: OffsetDateTime,
    pub quantity: f64,
    pub unit: String,
}

/// Input for creating or replacing a food item. Validated before any item
/// is created so a rejected entry leaves no partial record behind.
#[derive(Debug, Clone, Validate)]
pub struct NewFoodItem {
    #[validate(length(min = 1, message = "item name is required"))]
    pub name: String,
    pub category: FoodCategory,
    pub expiry: OffsetDateTime,
    #[validate(range(exclusive_min = 0.0, message = "quantity must be positive"))]
    pub quantity: f64,
    pub unit: String,
}

impl NewFoodItem {
    pub fn into_item(self, id: Uuid) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            category: self.category,
            expiry: self.expiry,
            quantity: self.quantity,
            unit: self.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn input(name: &str, quantity: f64) -> NewFoodItem {
        NewFoodItem {
            name: name.to_string(),
            category: FoodCategory::Other,
            expiry: datetime!(2026-09-01 00:00 UTC),
            quantity,
            unit: "pcs".to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        assert!(input("Milk", 1.0).validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(input("", 1.0).validate().is_err());
    }

    #[test]
    fn rejects_non_positive_quantity() {
        assert!(input("Milk", 0.0).validate().is_err());
        assert!(input("Milk", -2.0).validate().is_err());
    }
}
