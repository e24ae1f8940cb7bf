use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, LineKey};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::{CartItemRequest, CartService};
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::owner::current_cart_owner;
use crate::domain::session::repository::SessionRepository;

pub struct AddToCartUseCaseImpl {
    pub service: Arc<dyn CartService>,
    pub repository: Arc<dyn CartRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let owner = current_cart_owner(self.sessions.as_ref()).await?;
        let item = CartItemRequest {
            key: LineKey::new(params.product_id, params.size, params.color),
            quantity: params.quantity,
        };

        self.logger.info(&format!(
            "Adding {} x {} ({}/{}) to cart of {}",
            item.quantity, item.key.product_id, item.key.size, item.key.color, owner
        ));

        let cart = self.service.add_item(&owner, &item).await.map_err(|e| {
            self.logger.error(&format!("Add to cart failed: {}", e));
            CartError::from(e)
        })?;

        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Cart updated: {} items, total {}",
            cart.total_items(),
            cart.total_price()
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{
        MockCartApi, MockCartRepo, cart_with, guest_owner, jacket_line, mock_logger, session_repo,
    };

    fn params(quantity: u32) -> AddToCartParams {
        AddToCartParams {
            product_id: ProductId::new("p1"),
            size: "M".to_string(),
            color: "Red".to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_add_item_and_persist_server_cart() {
        let mut service = MockCartApi::new();
        let mut repository = MockCartRepo::new();

        service
            .expect_add_item()
            .withf(|owner, item| {
                *owner == guest_owner()
                    && item.key.product_id.as_str() == "p1"
                    && item.key.size == "M"
                    && item.key.color == "Red"
                    && item.quantity == 2
            })
            .times(1)
            .returning(|owner, _| Ok(cart_with(owner.clone(), vec![jacket_line(2)])));
        repository
            .expect_save()
            .withf(|cart| cart.total_items() == 2)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            service: Arc::new(service),
            repository: Arc::new(repository),
            sessions: Arc::new(session_repo(None, Some("guest_1749767368868"), None)),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(2)).await.unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.owner(), &guest_owner());
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_without_request() {
        let mut service = MockCartApi::new();
        let mut repository = MockCartRepo::new();
        service.expect_add_item().never();
        repository.expect_save().never();

        let use_case = AddToCartUseCaseImpl {
            service: Arc::new(service),
            repository: Arc::new(repository),
            sessions: Arc::new(session_repo(None, Some("guest_1"), None)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(0)).await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_leave_snapshot_untouched_when_request_fails() {
        let mut service = MockCartApi::new();
        let mut repository = MockCartRepo::new();
        service
            .expect_add_item()
            .returning(|_, _| Err(GatewayError::rejected(400, Some("Out of stock".to_string()))));
        repository.expect_save().never();

        let use_case = AddToCartUseCaseImpl {
            service: Arc::new(service),
            repository: Arc::new(repository),
            sessions: Arc::new(session_repo(None, Some("guest_1"), None)),
            logger: mock_logger(),
        };

        let err = use_case.execute(params(1)).await.unwrap_err();

        match err {
            CartError::Gateway(gateway) => assert_eq!(gateway.server_message(), Some("Out of stock")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
