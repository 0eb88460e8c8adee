use thiserror::Error;

pub type GroceryResult<T> = Result<T, GroceryError>;

#[derive(Error, Debug)]
pub enum GroceryError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}
