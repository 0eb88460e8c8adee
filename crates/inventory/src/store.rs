use crate::error::{InventoryError, InventoryResult};
use foodwise_shared::{FoodCategory, FoodItem, NewFoodItem};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;
use validator::Validate;

/// In-memory inventory repository. Owned by one presentation context at a
/// time; mutations replace whole records, never individual fields.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: Vec<FoodItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate and insert. A rejected input creates no partial item.
    pub fn add(&mut self, input: NewFoodItem) -> InventoryResult<Uuid> {
        input.validate()?;
        let item = input.into_item(Uuid::new_v4());
        let id = item.id;
        tracing::debug!(name = %item.name, "added inventory item");
        self.items.push(item);
        Ok(id)
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Full replacement of the item with `id`. The id is kept stable.
    pub fn replace(&mut self, id: Uuid, input: NewFoodItem) -> InventoryResult<()> {
        input.validate()?;
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(InventoryError::NotFound)?;
        *slot = input.into_item(id);
        Ok(())
    }

    /// Case-insensitive substring filter over name and category label.
    pub fn search(&self, query: &str) -> Vec<&FoodItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&query)
                    || item.category.to_string().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Demo inventory for the home kitchen dashboard.
    pub fn seed_home(now: OffsetDateTime) -> Self {
        let mut store = Self::new();
        store.seed(&[
            ("Milk", FoodCategory::DairyAndEggs, 2, 1.0, "l"),
            ("Chicken Breast", FoodCategory::MeatAndSeafood, 1, 500.0, "g"),
            ("Apples", FoodCategory::FruitsAndVegetables, 5, 6.0, "pcs"),
            ("Bread", FoodCategory::Bakery, -1, 1.0, "pcs"),
        ], now);
        store
    }

    /// Demo inventory for the restaurant dashboard.
    pub fn seed_restaurant(now: OffsetDateTime) -> Self {
        let mut store = Self::new();
        store.seed(&[
            ("Chicken Thighs", FoodCategory::MeatAndSeafood, 2, 5.0, "kg"),
            ("Heavy Cream", FoodCategory::DairyAndEggs, 3, 2.0, "l"),
            ("Bell Peppers", FoodCategory::FruitsAndVegetables, 4, 3.0, "kg"),
            ("Salmon Fillets", FoodCategory::MeatAndSeafood, 1, 2.0, "kg"),
            ("Mixed Greens", FoodCategory::FruitsAndVegetables, -1, 1.0, "kg"),
            ("Tomato Sauce", FoodCategory::PantryItems, 30, 10.0, "l"),
        ], now);
        store
    }

    fn seed(&mut self, rows: &[(&str, FoodCategory, i64, f64, &str)], now: OffsetDateTime) {
        for (name, category, days, quantity, unit) in rows {
            self.items.push(FoodItem {
                id: Uuid::new_v4(),
                name: (*name).to_string(),
                category: *category,
                expiry: now + Duration::days(*days),
                quantity: *quantity,
                unit: (*unit).to_string(),
            });
        }
    }
}
