use thiserror::Error;

pub type InventoryResult<T> = Result<T, InventoryError>;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Item not found")]
    NotFound,
}
