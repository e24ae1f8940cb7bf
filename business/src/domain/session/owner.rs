use chrono::Utc;

use crate::domain::cart::model::CartOwner;
use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::GuestId;

use super::repository::SessionRepository;

/// Returns the persisted guest id, generating and persisting one on first visit.
pub async fn ensure_guest_id(sessions: &dyn SessionRepository) -> Result<GuestId, StorageError> {
    if let Some(existing) = sessions.guest_id().await? {
        return Ok(existing);
    }
    rotate_guest_id(sessions).await
}

/// Replaces the guest id with a freshly generated one.
pub async fn rotate_guest_id(sessions: &dyn SessionRepository) -> Result<GuestId, StorageError> {
    let guest_id = GuestId::generate(Utc::now());
    sessions.save_guest_id(&guest_id).await?;
    Ok(guest_id)
}

/// Owner the cart operations act for: the signed-in account, else the guest.
pub async fn current_cart_owner(
    sessions: &dyn SessionRepository,
) -> Result<CartOwner, StorageError> {
    if let Some(user) = sessions.user().await? {
        return Ok(CartOwner::User(user.id));
    }
    Ok(CartOwner::Guest(ensure_guest_id(sessions).await?))
}
