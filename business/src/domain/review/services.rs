use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::session::model::AuthToken;
use crate::domain::shared::value_objects::{ProductId, ReviewId};

use super::model::{PageRequest, ReviewPage};
use super::votes::HelpfulVoteAck;

/// Service port for the product review endpoints.
#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn list_by_product(
        &self,
        product_id: &ProductId,
        page: PageRequest,
    ) -> Result<ReviewPage, GatewayError>;

    /// Flips the caller's helpful vote server side.
    async fn toggle_helpful(
        &self,
        review_id: &ReviewId,
        token: Option<AuthToken>,
    ) -> Result<HelpfulVoteAck, GatewayError>;
}
