use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineKey};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::CartService;
use crate::domain::cart::use_cases::remove_item::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::owner::current_cart_owner;
use crate::domain::session::repository::SessionRepository;

pub struct RemoveFromCartUseCaseImpl {
    pub service: Arc<dyn CartService>,
    pub repository: Arc<dyn CartRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError> {
        let owner = current_cart_owner(self.sessions.as_ref()).await?;
        let key = LineKey::new(params.product_id, params.size, params.color);

        self.logger.info(&format!(
            "Removing {} ({}/{}) from cart of {}",
            key.product_id, key.size, key.color, owner
        ));

        let cart = self
            .service
            .remove_item(&owner, &key)
            .await
            .map_err(|e| {
                self.logger.error(&format!("Remove from cart failed: {}", e));
                CartError::from(e)
            })?;

        self.repository.save(&cart).await?;

        Ok(cart)
    }
}
