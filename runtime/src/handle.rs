//! Tracking of running effects.
//!
//! Every spawned effect holds a [`TrackGuard`] on each [`Tracker`] that
//! cares about it: the store-wide one (for shutdown) and the one behind the
//! [`EffectHandle`] returned from `send`.

use crate::StoreError;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

/// Count of running effects with a wake-up when it drops to zero
#[derive(Debug, Default)]
pub(crate) struct Tracker {
    running: AtomicUsize,
    idle: Notify,
}

impl Tracker {
    pub(crate) fn start(self: &Arc<Self>) -> TrackGuard {
        self.running.fetch_add(1, Ordering::SeqCst);
        TrackGuard(Arc::clone(self))
    }

    pub(crate) fn running(&self) -> usize {
        self.running.load(Ordering::SeqCst)
    }

    /// Resolve once nothing is running
    pub(crate) async fn idle(&self) {
        loop {
            // Register before checking so a guard dropped in between still wakes us
            let woken = self.idle.notified();
            if self.running() == 0 {
                return;
            }
            woken.await;
        }
    }
}

/// Marks one effect as running until dropped, even if the effect panics
pub(crate) struct TrackGuard(Arc<Tracker>);

impl Drop for TrackGuard {
    fn drop(&mut self) {
        if self.0.running.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

/// Waits for the effects spawned by one `send`
///
/// Covers the effects the reducer returned for that action. Actions they
/// feed back are reduced before the handle completes; effects of those
/// follow-up actions are not covered.
pub struct EffectHandle {
    tracker: Arc<Tracker>,
}

impl EffectHandle {
    pub(crate) fn tracking(tracker: Arc<Tracker>) -> Self {
        Self { tracker }
    }

    /// Handle with nothing to wait for
    #[must_use]
    pub fn completed() -> Self {
        Self::tracking(Arc::default())
    }

    /// Effects of this send still running
    #[must_use]
    pub fn running(&self) -> usize {
        self.tracker.running()
    }

    /// Wait until every covered effect has finished
    pub async fn wait(&mut self) {
        self.tracker.idle().await;
    }

    /// [`EffectHandle::wait`] with a deadline
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if effects are still running after
    /// `timeout`.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("running", &self.running())
            .finish()
    }
}
