use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::VoteEligibility;
use crate::domain::review::services::ReviewService;
use crate::domain::review::use_cases::toggle_helpful::{
    ToggleHelpfulOutcome, ToggleHelpfulParams, ToggleHelpfulUseCase,
};
use crate::domain::review::votes::{BeginVote, VoteBoard};
use crate::domain::session::credentials::resolve_auth_token;
use crate::domain::session::repository::SessionRepository;

pub struct ToggleHelpfulUseCaseImpl {
    pub service: Arc<dyn ReviewService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub board: Arc<Mutex<VoteBoard>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleHelpfulUseCase for ToggleHelpfulUseCaseImpl {
    async fn execute(
        &self,
        params: ToggleHelpfulParams,
    ) -> Result<ToggleHelpfulOutcome, ReviewError> {
        let review_id = params.review_id;
        let viewer = self
            .sessions
            .user()
            .await?
            .map(|user| user.id)
            .ok_or(ReviewError::SignInRequired)?;
        let token = resolve_auth_token(self.sessions.as_ref()).await?;

        let delta = {
            let mut board = self.board.lock().await;
            match board.eligibility(&review_id, Some(&viewer)) {
                VoteEligibility::Allowed => {}
                VoteEligibility::OwnReview => return Err(ReviewError::OwnReview),
                VoteEligibility::SignInRequired => return Err(ReviewError::SignInRequired),
                VoteEligibility::NotLoaded => {
                    self.logger.warn(&format!(
                        "Review {} not loaded, refusing helpful vote",
                        review_id
                    ));
                    return Err(ReviewError::NotLoaded);
                }
            }
            match board.begin(&review_id) {
                BeginVote::Started(delta) => delta,
                BeginVote::AlreadyPending => {
                    self.logger.debug(&format!(
                        "Helpful vote on {} already in flight, ignoring click",
                        review_id
                    ));
                    return Ok(ToggleHelpfulOutcome::AlreadyPending);
                }
                BeginVote::NotLoaded => return Err(ReviewError::NotLoaded),
            }
        };

        self.logger.info(&format!(
            "Toggling helpful vote on {} ({:?})",
            review_id, delta
        ));

        let response = self.service.toggle_helpful(&review_id, token).await;

        let mut board = self.board.lock().await;

        if params.cancellation.is_cancelled() {
            // The next listing reseeds from the server.
            board.abandon(&review_id);
            self.logger.debug(&format!(
                "Helpful vote reply for {} no longer wanted, dropping it",
                review_id
            ));
            return Ok(ToggleHelpfulOutcome::Discarded);
        }

        match response {
            Ok(ack) => match board.reconcile(&review_id, ack) {
                Some(vote) => {
                    self.logger.info(&format!(
                        "Helpful vote on {} confirmed: {} votes, voted {}",
                        review_id,
                        vote.count(),
                        vote.voted()
                    ));
                    Ok(ToggleHelpfulOutcome::Reconciled(vote))
                }
                None => Ok(ToggleHelpfulOutcome::Discarded),
            },
            Err(e) => {
                board.roll_back(&review_id);
                self.logger.warn(&format!(
                    "Helpful vote on {} failed, rolled back: {}",
                    review_id, e
                ));
                Err(ReviewError::from(e))
            }
        }
    }
}
