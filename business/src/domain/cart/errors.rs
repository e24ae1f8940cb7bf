use crate::domain::errors::{ErrorCategory, GatewayError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.gateway")]
    Gateway(GatewayError),
    #[error("repository.persistence")]
    Storage(#[from] StorageError),
}

impl From<GatewayError> for CartError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::NotFound => CartError::NotFound,
            other => CartError::Gateway(other),
        }
    }
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::InvalidQuantity => ErrorCategory::Validation,
            CartError::NotFound => ErrorCategory::Network,
            CartError::Gateway(e) => ErrorCategory::of_gateway(e),
            CartError::Storage(_) => ErrorCategory::Storage,
        }
    }
}
