use foodwise_shared::{FoodItem, GroceryItem};

const TOP_FREQUENT: usize = 10;

/// Build a fresh grocery list from the purchase history, then merge in the
/// caller's in-progress list so checked or hand-added entries are never
/// dropped by regeneration.
///
/// History items group by case-insensitive name (first occurrence supplies
/// the display name, quantity and unit); groups sort by descending
/// frequency with first-seen order on ties, and the top ten become the new
/// base. Anything in `current` whose name is not among them is appended in
/// its original relative order, state untouched.
pub fn generate(history: &[FoodItem], current: &[GroceryItem]) -> Vec<GroceryItem> {
    let mut groups: Vec<GroceryItem> = Vec::new();
    for item in history {
        let key = item.name.to_lowercase();
        match groups.iter_mut().find(|candidate| candidate.key() == key) {
            Some(candidate) => {
                candidate.frequency = Some(candidate.frequency.unwrap_or(0) + 1);
            }
            None => groups.push(GroceryItem {
                name: item.name.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
                is_checked: false,
                frequency: Some(1),
            }),
        }
    }

    // Stable sort keeps first-seen order among equal frequencies.
    groups.sort_by_key(|candidate| std::cmp::Reverse(candidate.frequency.unwrap_or(0)));
    groups.truncate(TOP_FREQUENT);

    for item in current {
        if !groups.iter().any(|candidate| candidate.key() == item.key()) {
            groups.push(item.clone());
        }
    }

    groups
}
