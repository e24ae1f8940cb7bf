use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::{PageRequest, ReviewPage};
use crate::domain::review::services::ReviewService;
use crate::domain::review::use_cases::get_product_reviews::{
    GetProductReviewsParams, GetProductReviewsUseCase,
};
use crate::domain::review::votes::VoteBoard;
use crate::domain::session::repository::SessionRepository;

pub struct GetProductReviewsUseCaseImpl {
    pub service: Arc<dyn ReviewService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub board: Arc<Mutex<VoteBoard>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductReviewsUseCase for GetProductReviewsUseCaseImpl {
    async fn execute(&self, params: GetProductReviewsParams) -> Result<ReviewPage, ReviewError> {
        let request = PageRequest::new(params.page, params.limit)?;
        let viewer = self.sessions.user().await?.map(|user| user.id);

        self.logger.info(&format!(
            "Fetching reviews for {} (page {}, limit {})",
            params.product_id,
            request.page(),
            request.limit()
        ));

        let page = self
            .service
            .list_by_product(&params.product_id, request)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Fetching reviews failed: {}", e));
                ReviewError::from(e)
            })?;

        if params.cancellation.is_cancelled() {
            self.logger.debug(&format!(
                "Review listing for {} no longer wanted, dropping it",
                params.product_id
            ));
            return Err(ReviewError::Cancelled);
        }

        let mut board = self.board.lock().await;
        for review in &page.reviews {
            board.seed(review, viewer.as_ref());
        }
        drop(board);

        self.logger.info(&format!(
            "Fetched {} of {} reviews for {}",
            page.reviews.len(),
            page.total,
            params.product_id
        ));
        Ok(page)
    }
}
