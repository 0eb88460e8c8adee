pub mod budget;
pub mod convert;
pub mod error;
pub mod generate;
pub mod render;

// Re-export commonly used types
pub use budget::{weekly_summary, Expense, WeeklySummary};
pub use convert::checked_to_food_items;
pub use error::{GroceryError, GroceryResult};
pub use generate::generate;
pub use render::{format_quantity, render_print_html, render_text};
