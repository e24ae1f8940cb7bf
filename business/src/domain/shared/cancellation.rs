use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Lifetime marker handed to a request by whoever is waiting for its result.
///
/// Clones share the same flag. The owner calls [`CancellationToken::cancel`] when it
/// is torn down; response handlers check [`CancellationToken::is_cancelled`] before
/// touching any state, so a late response is dropped instead of applied.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
