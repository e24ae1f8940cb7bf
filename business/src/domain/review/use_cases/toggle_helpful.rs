use async_trait::async_trait;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::votes::HelpfulVote;
use crate::domain::shared::cancellation::CancellationToken;
use crate::domain::shared::value_objects::ReviewId;

pub struct ToggleHelpfulParams {
    pub review_id: ReviewId,
    pub cancellation: CancellationToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleHelpfulOutcome {
    /// Server confirmed; the vote carries the authoritative values.
    Reconciled(HelpfulVote),
    /// Another toggle for the same review was still in flight; nothing happened.
    AlreadyPending,
    /// The requester went away before the reply; the reply was dropped.
    Discarded,
}

#[async_trait]
pub trait ToggleHelpfulUseCase: Send + Sync {
    async fn execute(&self, params: ToggleHelpfulParams)
    -> Result<ToggleHelpfulOutcome, ReviewError>;
}
