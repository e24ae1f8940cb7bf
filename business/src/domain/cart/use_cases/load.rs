use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

/// Startup read of the persisted cart. Falls back to an empty cart for the
/// current owner when nothing has been stored yet.
#[async_trait]
pub trait LoadCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<Cart, CartError>;
}
