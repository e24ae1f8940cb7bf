use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::shared::value_objects::GuestId;

/// Forgets the account, clears the cart and starts a fresh guest session.
#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<GuestId, SessionError>;
}
