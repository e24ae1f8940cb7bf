use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::CartService;
use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;
use crate::domain::session::credentials::resolve_auth_token;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::SessionUser;
use crate::domain::session::owner::rotate_guest_id;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::complete_login::{
    CompleteLoginParams, CompleteLoginUseCase, LoginFollowUp, MergeOutcome, MergeSkipReason,
};
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct CompleteLoginUseCaseImpl {
    pub cart_service: Arc<dyn CartService>,
    pub carts: Arc<dyn CartRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub wishlist: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CompleteLoginUseCaseImpl {
    /// Folds the guest cart into the account cart. The local cart and guest id
    /// are only touched once the server has answered with the merged cart.
    async fn merge_guest_cart(&self, user: &SessionUser) -> Result<MergeOutcome, StorageError> {
        let has_guest_lines = self
            .carts
            .load()
            .await?
            .is_some_and(|cart| cart.owner().is_guest() && !cart.is_empty());
        if !has_guest_lines {
            self.logger.debug("Guest cart is empty, nothing to merge");
            return Ok(MergeOutcome::Skipped(MergeSkipReason::EmptyGuestCart));
        }

        let Some(guest_id) = self.sessions.guest_id().await? else {
            self.logger.debug("No guest id stored, nothing to merge");
            return Ok(MergeOutcome::Skipped(MergeSkipReason::NoGuestId));
        };

        let token = resolve_auth_token(self.sessions.as_ref()).await?;

        self.logger.info(&format!(
            "Merging guest cart {} into account {}",
            guest_id, user.id
        ));

        let merged = match self.cart_service.merge(&guest_id, user, token).await {
            Ok(merged) => merged,
            Err(e) => {
                self.logger.warn(&format!(
                    "Cart merge failed, keeping guest cart {}: {}",
                    guest_id, e
                ));
                return Ok(MergeOutcome::Failed(e));
            }
        };

        if let Err(e) = self.carts.save(&merged).await {
            self.logger
                .warn(&format!("Merged cart could not be stored locally: {}", e));
        }
        match rotate_guest_id(self.sessions.as_ref()).await {
            Ok(next) => self
                .logger
                .debug(&format!("Guest id {} retired, next is {}", guest_id, next)),
            Err(e) => self
                .logger
                .warn(&format!("Guest id {} could not be rotated: {}", guest_id, e)),
        }

        self.logger.info(&format!(
            "Cart merged: {} lines, {} items",
            merged.lines().len(),
            merged.total_items()
        ));
        Ok(MergeOutcome::Merged(merged))
    }

    /// Moves products saved while signed out into the wishlist.
    async fn absorb_pending_wishlist(&self) -> Result<usize, StorageError> {
        let pending = self.wishlist.pending().await?;
        if pending.is_empty() {
            return Ok(0);
        }

        let mut wishlist = Wishlist::new(self.wishlist.saved().await?);
        let added = wishlist.absorb(&pending);
        self.wishlist.save(wishlist.items()).await?;
        self.wishlist.clear_pending().await?;

        Ok(added)
    }
}

#[async_trait]
impl CompleteLoginUseCase for CompleteLoginUseCaseImpl {
    async fn execute(&self, params: CompleteLoginParams) -> Result<LoginFollowUp, SessionError> {
        let user = self
            .sessions
            .user()
            .await?
            .ok_or(SessionError::NotSignedIn)?;

        let merge = match self.merge_guest_cart(&user).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.logger
                    .warn(&format!("Guest cart state unreadable, skipping merge: {}", e));
                MergeOutcome::Skipped(MergeSkipReason::LocalStateUnreadable)
            }
        };

        let wishlist_absorbed = match self.absorb_pending_wishlist().await {
            Ok(added) => added,
            Err(e) => {
                self.logger
                    .warn(&format!("Pending wishlist could not be absorbed: {}", e));
                0
            }
        };

        let destination = params.context.destination();
        self.logger
            .info(&format!("Login complete, continuing to {}", destination));

        Ok(LoginFollowUp {
            merge,
            wishlist_absorbed,
            destination,
        })
    }
}
