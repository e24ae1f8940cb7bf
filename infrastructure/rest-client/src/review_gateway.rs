use async_trait::async_trait;
use reqwest::Method;

use business::domain::errors::GatewayError;
use business::domain::review::model::{PageRequest, ReviewPage};
use business::domain::review::services::ReviewService;
use business::domain::review::votes::HelpfulVoteAck;
use business::domain::session::model::AuthToken;
use business::domain::shared::value_objects::{ProductId, ReviewId};

use crate::client::ApiClient;
use crate::dto::{HelpfulResponseDto, ReviewListDto};

pub struct ReviewServiceRest {
    client: ApiClient,
}

impl ReviewServiceRest {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReviewService for ReviewServiceRest {
    async fn list_by_product(
        &self,
        product_id: &ProductId,
        page: PageRequest,
    ) -> Result<ReviewPage, GatewayError> {
        let url = self
            .client
            .endpoint(&["product-reviews", "product", product_id.as_str()])?;
        let request = self.client.request(Method::GET, url).query(&[
            ("page", page.page().to_string()),
            ("limit", page.limit().to_string()),
        ]);

        let dto: ReviewListDto = self.client.send_json(request).await?;
        Ok(dto.into_domain(product_id, page.page()))
    }

    async fn toggle_helpful(
        &self,
        review_id: &ReviewId,
        token: Option<AuthToken>,
    ) -> Result<HelpfulVoteAck, GatewayError> {
        let url = self
            .client
            .endpoint(&["product-reviews", review_id.as_str(), "helpful"])?;
        let request = ApiClient::authorized(self.client.request(Method::PUT, url), token.as_ref());

        let dto: HelpfulResponseDto = self.client.send_json(request).await?;
        Ok(dto.into_ack())
    }
}
