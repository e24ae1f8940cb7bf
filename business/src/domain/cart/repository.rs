use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::Cart;

/// Durable local snapshot of the current cart, read on startup and written
/// after every successful cart mutation.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Option<Cart>, StorageError>;
    async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
