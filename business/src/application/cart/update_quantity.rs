use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineKey};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::CartService;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::owner::current_cart_owner;
use crate::domain::session::repository::SessionRepository;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub service: Arc<dyn CartService>,
    pub repository: Arc<dyn CartRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        let owner = current_cart_owner(self.sessions.as_ref()).await?;
        let key = LineKey::new(params.product_id, params.size, params.color);

        self.logger.info(&format!(
            "Setting quantity of {} ({}/{}) to {}",
            key.product_id, key.size, key.color, params.quantity
        ));

        let cart = self
            .service
            .update_quantity(&owner, &key, params.quantity)
            .await
            .map_err(|e| {
                self.logger.error(&format!("Cart quantity update failed: {}", e));
                CartError::from(e)
            })?;

        self.repository.save(&cart).await?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{
        MockCartApi, MockCartRepo, cart_with, jacket_key, jacket_line, mock_logger, session_repo,
        test_user,
    };

    fn params(quantity: u32) -> UpdateCartItemQuantityParams {
        UpdateCartItemQuantityParams {
            product_id: ProductId::new("p1"),
            size: "M".to_string(),
            color: "Red".to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_update_quantity_for_signed_in_user() {
        let mut service = MockCartApi::new();
        let mut repository = MockCartRepo::new();

        service
            .expect_update_quantity()
            .withf(|owner, key, quantity| {
                owner.user_id() == Some(&test_user().id) && *key == jacket_key() && *quantity == 5
            })
            .times(1)
            .returning(|owner, _, _| Ok(cart_with(owner.clone(), vec![jacket_line(5)])));
        repository.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            service: Arc::new(service),
            repository: Arc::new(repository),
            sessions: Arc::new(session_repo(Some(test_user()), Some("guest_1"), None)),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(5)).await.unwrap();

        assert_eq!(cart.line(&jacket_key()).unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn should_drop_line_when_server_removes_it_at_zero() {
        let mut service = MockCartApi::new();
        let mut repository = MockCartRepo::new();

        service
            .expect_update_quantity()
            .withf(|_, _, quantity| *quantity == 0)
            .returning(|owner, _, _| Ok(cart_with(owner.clone(), vec![jacket_line(0)])));
        repository
            .expect_save()
            .withf(|cart| cart.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            service: Arc::new(service),
            repository: Arc::new(repository),
            sessions: Arc::new(session_repo(None, Some("guest_1"), None)),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(0)).await.unwrap();

        assert!(cart.line(&jacket_key()).is_none());
        assert_eq!(cart.total_items(), 0);
    }

    #[tokio::test]
    async fn should_not_persist_when_update_fails() {
        let mut service = MockCartApi::new();
        let mut repository = MockCartRepo::new();
        service
            .expect_update_quantity()
            .returning(|_, _, _| Err(GatewayError::network()));
        repository.expect_save().never();

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            service: Arc::new(service),
            repository: Arc::new(repository),
            sessions: Arc::new(session_repo(None, Some("guest_1"), None)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(3)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Gateway(GatewayError::Network)
        ));
    }
}
