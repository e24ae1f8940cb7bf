use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::GuestId;

use super::credentials::CredentialSource;
use super::model::{AuthToken, SessionUser};

/// Durable session state: guest identifier, signed-in user and credentials.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn guest_id(&self) -> Result<Option<GuestId>, StorageError>;
    async fn save_guest_id(&self, guest_id: &GuestId) -> Result<(), StorageError>;
    async fn user(&self) -> Result<Option<SessionUser>, StorageError>;
    /// Stores the user and makes `token` the active credential.
    async fn save_session(&self, user: &SessionUser, token: &AuthToken)
    -> Result<(), StorageError>;
    /// Raw value held by one credential source, as stored.
    async fn credential(&self, source: CredentialSource) -> Result<Option<String>, StorageError>;
    /// Forgets the user and every stored credential.
    async fn clear_session(&self) -> Result<(), StorageError>;
}
