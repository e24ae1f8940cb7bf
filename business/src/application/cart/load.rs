use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::load::LoadCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::session::owner::current_cart_owner;
use crate::domain::session::repository::SessionRepository;

pub struct LoadCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCartUseCase for LoadCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        if let Some(cart) = self.repository.load().await? {
            self.logger.debug(&format!(
                "Loaded stored cart for {} with {} lines",
                cart.owner(),
                cart.lines().len()
            ));
            return Ok(cart);
        }

        let owner = current_cart_owner(self.sessions.as_ref()).await?;
        self.logger
            .debug(&format!("No stored cart, starting empty for {}", owner));
        Ok(Cart::empty(owner))
    }
}
