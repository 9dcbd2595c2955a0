//! At-most-once evaluation shared by every effect variant
//!
//! A `Deferred` holds no action of its own. The owning effect passes its action
//! on every `force` call, and only the first call runs it; later calls get the
//! memoised outcome. Observers registered with `on_complete` are notified once.

use super::resolution::Outcome;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::OnceCell;
use tracing::trace;

type Callback = Box<dyn FnOnce(&Outcome) + Send>;

#[derive(Default)]
pub(crate) struct Deferred {
    outcome: OnceCell<Outcome>,
    callbacks: Mutex<Vec<Callback>>,
}

impl Deferred {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_resolved(&self) -> bool {
        self.outcome.initialized()
    }

    /// Run `action` unless an outcome already exists, then return the outcome
    pub(crate) async fn force<F, Fut>(&self, action: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
    {
        if self.is_resolved() {
            trace!("Effect already triggered, reusing its outcome");
        }

        let outcome = self.outcome.get_or_init(action).await;

        // Drained under the lock so a concurrent on_complete either sees the
        // outcome or lands in this batch.
        let pending = std::mem::take(&mut *self.lock_callbacks());
        for callback in pending {
            callback(outcome);
        }

        outcome.clone()
    }

    /// Notify `callback` with the outcome, immediately if already resolved
    pub(crate) fn on_complete(&self, callback: Callback) {
        let mut callbacks = self.lock_callbacks();
        match self.outcome.get() {
            Some(outcome) => {
                drop(callbacks);
                callback(outcome);
            }
            None => callbacks.push(callback),
        }
    }

    fn lock_callbacks(&self) -> MutexGuard<'_, Vec<Callback>> {
        self.callbacks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Resolution;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_force_runs_action_once() {
        let deferred = Deferred::new();
        let runs = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let runs = runs.clone();
            let outcome = deferred
                .force(|| async move {
                    runs.fetch_add(1, Ordering::SeqCst);
                    Ok(Resolution::Written)
                })
                .await;
            assert_eq!(outcome, Ok(Resolution::Written));
        }

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(deferred.is_resolved());
    }

    #[tokio::test]
    async fn test_callbacks_before_and_after_resolution() {
        let deferred = Deferred::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let early = calls.clone();
        deferred.on_complete(Box::new(move |_| {
            early.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let _ = deferred.force(|| async { Ok(Resolution::Written) }).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // A second force must not notify the early observer again
        let _ = deferred.force(|| async { Ok(Resolution::Written) }).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let late = calls.clone();
        deferred.on_complete(Box::new(move |_| {
            late.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
