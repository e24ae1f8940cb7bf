use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::StorageError;
use business::domain::session::credentials::CredentialSource;
use business::domain::session::model::{AuthToken, SessionUser};
use business::domain::session::repository::SessionRepository;
use business::domain::shared::value_objects::GuestId;

use super::entity::StoredUser;
use crate::kv::{KeyValueStore, keys};

/// Session state in the key-value table. The token of the live session is
/// also held in memory and is gone once the process exits.
pub struct SessionRepositorySqlite {
    store: KeyValueStore,
    active_token: RwLock<Option<AuthToken>>,
}

impl SessionRepositorySqlite {
    pub fn new(store: KeyValueStore) -> Self {
        Self {
            store,
            active_token: RwLock::new(None),
        }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositorySqlite {
    async fn guest_id(&self) -> Result<Option<GuestId>, StorageError> {
        Ok(self
            .store
            .get(keys::GUEST_ID)
            .await?
            .filter(|raw| !raw.trim().is_empty())
            .map(GuestId::new))
    }

    async fn save_guest_id(&self, guest_id: &GuestId) -> Result<(), StorageError> {
        self.store.put(keys::GUEST_ID, guest_id.as_str()).await
    }

    async fn user(&self) -> Result<Option<SessionUser>, StorageError> {
        Ok(self
            .store
            .get_json::<StoredUser>(keys::USER_INFO)
            .await?
            .map(StoredUser::into_domain))
    }

    async fn save_session(&self, user: &SessionUser, token: &AuthToken) -> Result<(), StorageError> {
        self.store
            .put_json(keys::USER_INFO, &StoredUser::from_domain(user))
            .await?;
        self.store.put(keys::USER_TOKEN, token.as_str()).await?;
        *self.active_token.write().await = Some(token.clone());
        Ok(())
    }

    async fn credential(&self, source: CredentialSource) -> Result<Option<String>, StorageError> {
        match source.storage_key() {
            None => Ok(self
                .active_token
                .read()
                .await
                .as_ref()
                .map(|token| token.as_str().to_string())),
            Some(key) => self.store.get(key).await,
        }
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        self.store
            .remove_all(&[keys::USER_INFO, keys::USER_TOKEN, keys::LEGACY_TOKEN])
            .await?;
        *self.active_token.write().await = None;
        Ok(())
    }
}
