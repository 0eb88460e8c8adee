mod category;
mod grocery;
mod item;
mod unit;

pub use category::*;
pub use grocery::*;
pub use item::*;
pub use unit::*;
