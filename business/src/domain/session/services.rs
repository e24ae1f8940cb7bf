use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{AuthenticatedSession, LoginCredentials, Registration};

/// Service port for the account endpoints of the storefront API.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedSession, GatewayError>;

    async fn register(
        &self,
        registration: &Registration,
    ) -> Result<AuthenticatedSession, GatewayError>;
}
