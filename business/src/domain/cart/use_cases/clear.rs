use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

/// Drops the local cart snapshot. Used on logout and once an order is confirmed.
#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), CartError>;
}
