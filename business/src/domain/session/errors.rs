use crate::domain::errors::{ErrorCategory, GatewayError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.email_missing")]
    EmailMissing,
    #[error("session.password_missing")]
    PasswordMissing,
    #[error("session.name_missing")]
    NameMissing,
    #[error("session.invalid_credentials")]
    InvalidCredentials,
    #[error("session.not_signed_in")]
    NotSignedIn,
    #[error("session.gateway")]
    Gateway(#[from] GatewayError),
    #[error("repository.persistence")]
    Storage(#[from] StorageError),
}

impl SessionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SessionError::EmailMissing
            | SessionError::PasswordMissing
            | SessionError::NameMissing
            | SessionError::InvalidCredentials => ErrorCategory::Validation,
            SessionError::NotSignedIn => ErrorCategory::Authorization,
            SessionError::Gateway(e) => ErrorCategory::of_gateway(e),
            SessionError::Storage(_) => ErrorCategory::Storage,
        }
    }
}
