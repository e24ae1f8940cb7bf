use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::CartService;
use crate::domain::cart::use_cases::fetch::FetchCartUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::session::owner::current_cart_owner;
use crate::domain::session::repository::SessionRepository;

pub struct FetchCartUseCaseImpl {
    pub service: Arc<dyn CartService>,
    pub repository: Arc<dyn CartRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchCartUseCase for FetchCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        let owner = current_cart_owner(self.sessions.as_ref()).await?;
        self.logger.info(&format!("Fetching cart for {}", owner));

        let cart = match self.service.fetch(&owner).await {
            Ok(cart) => cart,
            // The API has no cart until the first line is added.
            Err(GatewayError::NotFound) => {
                self.logger
                    .debug(&format!("No server cart for {}, starting empty", owner));
                Cart::empty(owner)
            }
            Err(e) => {
                self.logger.error(&format!("Fetching cart failed: {}", e));
                return Err(e.into());
            }
        };

        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Cart fetched: {} lines, {} items",
            cart.lines().len(),
            cart.total_items()
        ));
        Ok(cart)
    }
}
