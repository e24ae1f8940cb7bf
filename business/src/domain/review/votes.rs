//! Optimistic helpful-vote bookkeeping.
//!
//! Each review moves through `Idle -> Pending -> Reconciled | RolledBack` and
//! back to `Pending` on the next click. While `Pending` the board holds the
//! locally guessed count and membership; the server response then overwrites
//! both outright, or the guess is undone on failure.

use std::collections::HashMap;

use crate::domain::shared::value_objects::{ReviewId, UserId};

use super::model::{Review, VoteEligibility, vote_eligibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VotePhase {
    #[default]
    Idle,
    Pending,
    Reconciled,
    RolledBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDelta {
    Up,
    Down,
}

impl VoteDelta {
    /// Direction of a click given current membership.
    pub fn for_membership(voted: bool) -> Self {
        if voted { VoteDelta::Down } else { VoteDelta::Up }
    }

    /// Never goes below zero.
    pub fn apply(self, count: u32) -> u32 {
        match self {
            VoteDelta::Up => count.saturating_add(1),
            VoteDelta::Down => count.saturating_sub(1),
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            VoteDelta::Up => VoteDelta::Down,
            VoteDelta::Down => VoteDelta::Up,
        }
    }
}

/// Authoritative values echoed by the server after a toggle. Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpfulVoteAck {
    pub helpful_votes: Option<u32>,
    pub has_voted: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    delta: VoteDelta,
    /// The optimistic step hit the zero floor and changed nothing.
    clamped: bool,
    voted_before: bool,
}

/// Local view of one review's helpful votes for the current viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HelpfulVote {
    count: u32,
    voted: bool,
    author: Option<UserId>,
    phase: VotePhase,
    in_flight: Option<InFlight>,
}

impl HelpfulVote {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn voted(&self) -> bool {
        self.voted
    }

    pub fn author(&self) -> Option<&UserId> {
        self.author.as_ref()
    }

    pub fn phase(&self) -> VotePhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginVote {
    Started(VoteDelta),
    /// A toggle for this review is still waiting on the server.
    AlreadyPending,
    /// No server state loaded for the review; direction and author are unknown.
    NotLoaded,
}

/// Helpful-vote state for every review the viewer has on screen.
#[derive(Debug, Default)]
pub struct VoteBoard {
    entries: HashMap<ReviewId, HelpfulVote>,
}

impl VoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads server state for a review. An in-flight marker survives reseeding so
    /// the pending toggle can still be reconciled or undone.
    pub fn seed(&mut self, review: &Review, viewer: Option<&UserId>) {
        let entry = self.entries.entry(review.id.clone()).or_default();
        entry.count = review.helpful_votes;
        entry.voted = viewer.is_some_and(|v| review.has_voted(v));
        entry.author = review.author_id.clone();
        if entry.in_flight.is_none() {
            entry.phase = VotePhase::Idle;
        }
    }

    pub fn get(&self, review_id: &ReviewId) -> Option<&HelpfulVote> {
        self.entries.get(review_id)
    }

    /// Current entry, or an empty one for reviews never seeded.
    pub fn snapshot(&self, review_id: &ReviewId) -> HelpfulVote {
        self.entries.get(review_id).cloned().unwrap_or_default()
    }

    pub fn eligibility(&self, review_id: &ReviewId, viewer: Option<&UserId>) -> VoteEligibility {
        match self.entries.get(review_id) {
            Some(entry) => vote_eligibility(entry.author.as_ref(), viewer),
            None if viewer.is_none() => VoteEligibility::SignInRequired,
            None => VoteEligibility::NotLoaded,
        }
    }

    /// Applies the optimistic guess: count moves one step, membership flips.
    pub fn begin(&mut self, review_id: &ReviewId) -> BeginVote {
        let Some(entry) = self.entries.get_mut(review_id) else {
            return BeginVote::NotLoaded;
        };
        if entry.in_flight.is_some() {
            return BeginVote::AlreadyPending;
        }

        let delta = VoteDelta::for_membership(entry.voted);
        let next = delta.apply(entry.count);
        entry.in_flight = Some(InFlight {
            delta,
            clamped: next == entry.count,
            voted_before: entry.voted,
        });
        entry.count = next;
        entry.voted = !entry.voted;
        entry.phase = VotePhase::Pending;

        BeginVote::Started(delta)
    }

    /// Server values replace the local guess; fields the server left out keep
    /// the optimistic value. No-op when nothing is in flight.
    pub fn reconcile(&mut self, review_id: &ReviewId, ack: HelpfulVoteAck) -> Option<HelpfulVote> {
        let entry = self.entries.get_mut(review_id)?;
        entry.in_flight.take()?;

        if let Some(count) = ack.helpful_votes {
            entry.count = count;
        }
        if let Some(voted) = ack.has_voted {
            entry.voted = voted;
        }
        entry.phase = VotePhase::Reconciled;
        Some(entry.clone())
    }

    /// Drops the in-flight marker and keeps the local values as they are.
    /// Used when nobody waits for the reply any more. No-op when nothing is in
    /// flight.
    pub fn abandon(&mut self, review_id: &ReviewId) -> Option<HelpfulVote> {
        let entry = self.entries.get_mut(review_id)?;
        entry.in_flight.take()?;
        entry.phase = VotePhase::Idle;
        Some(entry.clone())
    }

    /// Undoes exactly the optimistic step: the count takes the inverse step
    /// (clamped at zero) and membership returns to its pre-click value.
    /// No-op when nothing is in flight.
    pub fn roll_back(&mut self, review_id: &ReviewId) -> Option<HelpfulVote> {
        let entry = self.entries.get_mut(review_id)?;
        let in_flight = entry.in_flight.take()?;

        if !in_flight.clamped {
            entry.count = in_flight.delta.inverse().apply(entry.count);
        }
        entry.voted = in_flight.voted_before;
        entry.phase = VotePhase::RolledBack;
        Some(entry.clone())
    }
}
