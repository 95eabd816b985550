use thiserror::Error;

use crate::resource_framework::FrameworkError;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(u64),
    #[error("{0}")]
    ValidationError(String),
    #[error("Product database error: {0}")]
    DatabaseError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Validation(msg) => ProductError::ValidationError(msg),
            FrameworkError::Store(e) => ProductError::DatabaseError(e.to_string()),
        }
    }
}
