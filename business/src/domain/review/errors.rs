use crate::domain::errors::{ErrorCategory, GatewayError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review.invalid_page")]
    InvalidPage,
    #[error("review.sign_in_required")]
    SignInRequired,
    #[error("review.own_review")]
    OwnReview,
    #[error("review.not_loaded")]
    NotLoaded,
    #[error("review.not_found")]
    NotFound,
    #[error("review.cancelled")]
    Cancelled,
    #[error("review.gateway")]
    Gateway(GatewayError),
    #[error("repository.persistence")]
    Storage(#[from] StorageError),
}

impl From<GatewayError> for ReviewError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::NotFound => ReviewError::NotFound,
            GatewayError::Unauthorized => ReviewError::SignInRequired,
            other => ReviewError::Gateway(other),
        }
    }
}

impl ReviewError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReviewError::InvalidPage | ReviewError::NotLoaded => ErrorCategory::Validation,
            ReviewError::SignInRequired | ReviewError::OwnReview => ErrorCategory::Authorization,
            ReviewError::NotFound | ReviewError::Cancelled => ErrorCategory::Network,
            ReviewError::Gateway(e) => ErrorCategory::of_gateway(e),
            ReviewError::Storage(_) => ErrorCategory::Storage,
        }
    }
}
