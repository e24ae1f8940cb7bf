use async_trait::async_trait;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::ReviewPage;
use crate::domain::shared::cancellation::CancellationToken;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductReviewsParams {
    pub product_id: ProductId,
    pub page: u32,
    pub limit: u32,
    pub cancellation: CancellationToken,
}

#[async_trait]
pub trait GetProductReviewsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductReviewsParams) -> Result<ReviewPage, ReviewError>;
}
