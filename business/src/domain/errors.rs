/// Local durable storage errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read")]
    Read,
    #[error("storage.write")]
    Write,
    #[error("storage.corrupted")]
    Corrupted,
}

impl StorageError {
    pub fn read() -> Self {
        StorageError::Read
    }
    pub fn write() -> Self {
        StorageError::Write
    }
    pub fn corrupted() -> Self {
        StorageError::Corrupted
    }
}

/// Errors raised by the remote storefront API adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.network")]
    Network,
    #[error("gateway.unauthorized")]
    Unauthorized,
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.rejected")]
    Rejected { status: u16, message: Option<String> },
    #[error("gateway.decode")]
    Decode,
    #[error("gateway.invalid_endpoint")]
    InvalidEndpoint,
    #[error("gateway.client_setup")]
    ClientSetup,
}

impl GatewayError {
    pub fn network() -> Self {
        GatewayError::Network
    }
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        GatewayError::Rejected { status, message }
    }
    pub fn decode() -> Self {
        GatewayError::Decode
    }

    /// Server supplied message, when the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Coarse classification used by front ends to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input rejected before any request was made.
    Validation,
    /// The API could not be reached or refused the request.
    Network,
    /// Action requires a different identity (signed in, not the author).
    Authorization,
    /// Local persistence failed.
    Storage,
}

impl ErrorCategory {
    pub fn of_gateway(error: &GatewayError) -> Self {
        match error {
            GatewayError::Unauthorized => ErrorCategory::Authorization,
            _ => ErrorCategory::Network,
        }
    }
}
