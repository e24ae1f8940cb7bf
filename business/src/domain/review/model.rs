use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{ProductId, ReviewId, UserId};

use super::errors::ReviewError;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    /// `None` when the authoring account no longer exists.
    pub author_id: Option<UserId>,
    pub author_name: Option<String>,
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub verified_purchase: bool,
    pub helpful_votes: u32,
    pub helpful_votes_by: BTreeSet<UserId>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    pub fn has_voted(&self, user_id: &UserId) -> bool {
        self.helpful_votes_by.contains(user_id)
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.author_id.as_ref() == Some(user_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
}

/// 1-based page window for review listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn new(page: u32, limit: u32) -> Result<Self, ReviewError> {
        if page == 0 || limit == 0 {
            return Err(ReviewError::InvalidPage);
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Whether the helpful control should be enabled for a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteEligibility {
    Allowed,
    SignInRequired,
    OwnReview,
    /// The review has not been loaded, so its author is unknown.
    NotLoaded,
}

pub fn vote_eligibility(author: Option<&UserId>, viewer: Option<&UserId>) -> VoteEligibility {
    match viewer {
        None => VoteEligibility::SignInRequired,
        Some(viewer) if author == Some(viewer) => VoteEligibility::OwnReview,
        Some(_) => VoteEligibility::Allowed,
    }
}
