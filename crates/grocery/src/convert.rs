use foodwise_shared::{FoodCategory, GroceryItem, NewFoodItem};
use time::{Duration, OffsetDateTime};

const DEFAULT_SHELF_LIFE_DAYS: i64 = 14;

/// Turn the checked entries of a grocery list into inventory inputs with a
/// two-week default expiry, and return the list with those entries
/// unchecked so they are not added twice.
pub fn checked_to_food_items(
    list: &[GroceryItem],
    now: OffsetDateTime,
) -> (Vec<NewFoodItem>, Vec<GroceryItem>) {
    let inputs = list
        .iter()
        .filter(|item| item.is_checked)
        .map(|item| NewFoodItem {
            name: item.name.clone(),
            category: FoodCategory::Other,
            expiry: now + Duration::days(DEFAULT_SHELF_LIFE_DAYS),
            quantity: item.quantity,
            unit: item.unit.clone(),
        })
        .collect();

    let remaining = list
        .iter()
        .map(|item| GroceryItem {
            is_checked: false,
            ..item.clone()
        })
        .collect();

    (inputs, remaining)
}
