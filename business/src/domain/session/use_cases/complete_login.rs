use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::errors::GatewayError;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::LoginContext;

pub struct CompleteLoginParams {
    pub context: LoginContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSkipReason {
    /// No guest cart, or one without lines.
    EmptyGuestCart,
    NoGuestId,
    /// Guest cart, guest id or token could not be read; guest data left as is.
    LocalStateUnreadable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    Skipped(MergeSkipReason),
    /// Server merged; local cart replaced by the result.
    Merged(Cart),
    /// Server refused or was unreachable; guest cart kept for a retry.
    Failed(GatewayError),
}

/// Result of the post-authentication follow-up.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginFollowUp {
    pub merge: MergeOutcome,
    /// Pending wishlist entries newly added to the wishlist.
    pub wishlist_absorbed: usize,
    /// Path to navigate to next.
    pub destination: String,
}

/// Runs once after login or registration succeeds: guest cart merge, pending
/// wishlist absorption, then the navigation target.
#[async_trait]
pub trait CompleteLoginUseCase: Send + Sync {
    async fn execute(&self, params: CompleteLoginParams) -> Result<LoginFollowUp, SessionError>;
}
