use async_trait::async_trait;

use business::domain::errors::StorageError;
use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::repository::WishlistRepository;

use crate::kv::{KeyValueStore, keys};

/// Both lists are stored as JSON arrays of product ids.
pub struct WishlistRepositorySqlite {
    store: KeyValueStore,
}

impl WishlistRepositorySqlite {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store }
    }

    async fn read(&self, key: &str) -> Result<Vec<ProductId>, StorageError> {
        Ok(self
            .store
            .get_json::<Vec<ProductId>>(key)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositorySqlite {
    async fn saved(&self) -> Result<Vec<ProductId>, StorageError> {
        self.read(keys::WISHLIST).await
    }

    async fn save(&self, items: &[ProductId]) -> Result<(), StorageError> {
        self.store.put_json(keys::WISHLIST, items).await
    }

    async fn pending(&self) -> Result<Vec<ProductId>, StorageError> {
        self.read(keys::PENDING_WISHLIST).await
    }

    async fn save_pending(&self, items: &[ProductId]) -> Result<(), StorageError> {
        self.store.put_json(keys::PENDING_WISHLIST, items).await
    }

    async fn clear_pending(&self) -> Result<(), StorageError> {
        self.store.remove(keys::PENDING_WISHLIST).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::test_store;

    fn ids(raw: &[&str]) -> Vec<ProductId> {
        raw.iter().map(|id| ProductId::new(*id)).collect()
    }

    #[tokio::test]
    async fn should_default_to_empty_lists() {
        let repository = WishlistRepositorySqlite::new(test_store().await);

        assert!(repository.saved().await.unwrap().is_empty());
        assert!(repository.pending().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_saved_and_pending_lists_apart() {
        let repository = WishlistRepositorySqlite::new(test_store().await);

        repository.save(&ids(&["p1", "p2"])).await.unwrap();
        repository.save_pending(&ids(&["p3"])).await.unwrap();

        assert_eq!(repository.saved().await.unwrap(), ids(&["p1", "p2"]));
        assert_eq!(repository.pending().await.unwrap(), ids(&["p3"]));
    }

    #[tokio::test]
    async fn should_read_plain_string_arrays() {
        let store = test_store().await;
        store
            .put(keys::PENDING_WISHLIST, r#"["p1","p2"]"#)
            .await
            .unwrap();
        let repository = WishlistRepositorySqlite::new(store);

        assert_eq!(repository.pending().await.unwrap(), ids(&["p1", "p2"]));
    }

    #[tokio::test]
    async fn should_empty_pending_buffer_on_clear() {
        let repository = WishlistRepositorySqlite::new(test_store().await);
        repository.save_pending(&ids(&["p3"])).await.unwrap();

        repository.clear_pending().await.unwrap();

        assert!(repository.pending().await.unwrap().is_empty());
    }
}
