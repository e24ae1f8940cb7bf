use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::repository::SessionRepository;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::save_for_later::{
    SaveForLaterParams, SaveForLaterUseCase, WishlistPlacement,
};

pub struct SaveForLaterUseCaseImpl {
    pub wishlist: Arc<dyn WishlistRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveForLaterUseCase for SaveForLaterUseCaseImpl {
    async fn execute(&self, params: SaveForLaterParams) -> Result<WishlistPlacement, WishlistError> {
        let signed_in = self.sessions.user().await?.is_some();

        let (stored, placement) = if signed_in {
            (self.wishlist.saved().await?, WishlistPlacement::Saved)
        } else {
            (self.wishlist.pending().await?, WishlistPlacement::Pending)
        };

        let mut list = Wishlist::new(stored);
        if !list.add(params.product_id.clone()) {
            self.logger
                .debug(&format!("{} already saved", params.product_id));
            return Ok(WishlistPlacement::AlreadyPresent);
        }

        match placement {
            WishlistPlacement::Saved => self.wishlist.save(list.items()).await?,
            _ => self.wishlist.save_pending(list.items()).await?,
        }

        self.logger.info(&format!(
            "Saved {} for later ({:?})",
            params.product_id, placement
        ));
        Ok(placement)
    }
}
