use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::session::model::{AuthToken, SessionUser};
use crate::domain::shared::value_objects::GuestId;

use super::model::{Cart, CartOwner, LineKey};

/// Line addition as sent to the cart API. Name, image and price are filled
/// in server side from the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRequest {
    pub key: LineKey,
    pub quantity: u32,
}

/// Service port for the remote cart API, the system of record for line
/// matching and totals.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn fetch(&self, owner: &CartOwner) -> Result<Cart, GatewayError>;

    async fn add_item(
        &self,
        owner: &CartOwner,
        item: &CartItemRequest,
    ) -> Result<Cart, GatewayError>;

    /// Quantity 0 asks the server to drop the line.
    async fn update_quantity(
        &self,
        owner: &CartOwner,
        key: &LineKey,
        quantity: u32,
    ) -> Result<Cart, GatewayError>;

    async fn remove_item(&self, owner: &CartOwner, key: &LineKey) -> Result<Cart, GatewayError>;

    /// Combines the guest cart into the account cart and returns the result.
    async fn merge(
        &self,
        guest_id: &GuestId,
        user: &SessionUser,
        token: Option<AuthToken>,
    ) -> Result<Cart, GatewayError>;
}
