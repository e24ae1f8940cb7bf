use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::errors::WishlistError;

pub struct SaveForLaterParams {
    pub product_id: ProductId,
}

/// Where a saved product ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistPlacement {
    /// Signed in: written straight to the wishlist.
    Saved,
    /// Signed out: buffered until the next login.
    Pending,
    /// Already present in the target list.
    AlreadyPresent,
}

#[async_trait]
pub trait SaveForLaterUseCase: Send + Sync {
    async fn execute(&self, params: SaveForLaterParams) -> Result<WishlistPlacement, WishlistError>;
}
