use async_trait::async_trait;
use reqwest::Method;

use business::domain::cart::model::{Cart, CartOwner, LineKey};
use business::domain::cart::services::{CartItemRequest, CartService};
use business::domain::errors::GatewayError;
use business::domain::session::model::{AuthToken, SessionUser};
use business::domain::shared::value_objects::GuestId;

use crate::client::ApiClient;
use crate::dto::{CartDto, CartLineRequestDto, MergeRequestDto, UserDto, owner_query};

pub struct CartServiceRest {
    client: ApiClient,
}

impl CartServiceRest {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn send_line(
        &self,
        method: Method,
        owner: &CartOwner,
        key: &LineKey,
        quantity: Option<u32>,
    ) -> Result<Cart, GatewayError> {
        let url = self.client.endpoint(&["cart"])?;
        let body = CartLineRequestDto::new(owner, key, quantity);
        let request = self.client.request(method, url).json(&body);

        let dto: CartDto = self.client.send_json(request).await?;
        dto.into_domain(owner)
    }
}

#[async_trait]
impl CartService for CartServiceRest {
    async fn fetch(&self, owner: &CartOwner) -> Result<Cart, GatewayError> {
        let url = self.client.endpoint(&["cart"])?;
        let request = self
            .client
            .request(Method::GET, url)
            .query(&[owner_query(owner)]);

        let dto: CartDto = self.client.send_json(request).await?;
        dto.into_domain(owner)
    }

    async fn add_item(
        &self,
        owner: &CartOwner,
        item: &CartItemRequest,
    ) -> Result<Cart, GatewayError> {
        self.send_line(Method::POST, owner, &item.key, Some(item.quantity))
            .await
    }

    async fn update_quantity(
        &self,
        owner: &CartOwner,
        key: &LineKey,
        quantity: u32,
    ) -> Result<Cart, GatewayError> {
        self.send_line(Method::PUT, owner, key, Some(quantity)).await
    }

    async fn remove_item(&self, owner: &CartOwner, key: &LineKey) -> Result<Cart, GatewayError> {
        self.send_line(Method::DELETE, owner, key, None).await
    }

    async fn merge(
        &self,
        guest_id: &GuestId,
        user: &SessionUser,
        token: Option<AuthToken>,
    ) -> Result<Cart, GatewayError> {
        let url = self.client.endpoint(&["cart", "merge"])?;
        let body = MergeRequestDto {
            guest_id: guest_id.as_str(),
            user: UserDto::from_domain(user),
        };
        let request = ApiClient::authorized(
            self.client.request(Method::POST, url).json(&body),
            token.as_ref(),
        );

        let dto: CartDto = self.client.send_json(request).await?;
        dto.into_domain(&CartOwner::User(user.id.clone()))
    }
}
