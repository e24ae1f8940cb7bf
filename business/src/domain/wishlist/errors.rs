use crate::domain::errors::{ErrorCategory, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("repository.persistence")]
    Storage(#[from] StorageError),
}

impl WishlistError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WishlistError::Storage(_) => ErrorCategory::Storage,
        }
    }
}
