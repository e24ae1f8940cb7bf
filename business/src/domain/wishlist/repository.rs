use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::ProductId;

/// Locally persisted wishlist plus the buffer of products saved while signed out.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn saved(&self) -> Result<Vec<ProductId>, StorageError>;
    async fn save(&self, items: &[ProductId]) -> Result<(), StorageError>;
    async fn pending(&self) -> Result<Vec<ProductId>, StorageError>;
    async fn save_pending(&self, items: &[ProductId]) -> Result<(), StorageError>;
    async fn clear_pending(&self) -> Result<(), StorageError>;
}
