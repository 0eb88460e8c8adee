pub mod error;
pub mod expiry;
pub mod store;
pub mod suggestions;

// Re-export commonly used types
pub use error::{InventoryError, InventoryResult};
pub use expiry::{
    classify, days_left_label, days_until_expiry, status_of, warning_schedule, Classification,
    ExpiryStatus, InventoryCounts, WarningEntry,
};
pub use store::InventoryStore;
pub use suggestions::{suggest_meals, Difficulty, Recipe, Suggestion};
