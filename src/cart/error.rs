use thiserror::Error;

use crate::resource_framework::FrameworkError;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    NotFound(u64),
    #[error("Product not found: {0}")]
    ProductNotFound(u64),
    #[error("{0}")]
    ValidationError(String),
    #[error("Cart database error: {0}")]
    DatabaseError(String),
}

impl From<FrameworkError> for CartError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::Validation(msg) => CartError::ValidationError(msg),
            FrameworkError::Store(e) => CartError::DatabaseError(e.to_string()),
        }
    }
}
