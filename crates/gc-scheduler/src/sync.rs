//! Shared-scheduler handle for multithreaded hosts

use std::sync::Arc;

use parking_lot::Mutex;

use crate::collector::{CollectorControl, CollectorStats, GcEvent};
use crate::error::SchedulerResult;
use crate::scheduler::{OobScheduler, PollOutcome};
use crate::stats::{StatKey, TriggerStats};

/// Thread-safe handle around an [`OobScheduler`]
///
/// The core scheduler is single-threaded by design. Hosts whose worker
/// threads share one scheduler route every poll and phase event through
/// this handle, which serializes them behind a single mutex so the
/// sweep-first decision order is preserved. Cloning the handle shares the
/// same scheduler.
pub struct SharedScheduler<R: CollectorStats + CollectorControl> {
    inner: Arc<Mutex<OobScheduler<R>>>,
}

impl<R: CollectorStats + CollectorControl> Clone for SharedScheduler<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: CollectorStats + CollectorControl> SharedScheduler<R> {
    /// Wrap a scheduler for shared use
    pub fn new(scheduler: OobScheduler<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// See [`OobScheduler::install`]
    pub fn install(&self) -> bool {
        self.inner.lock().install()
    }

    /// See [`OobScheduler::observe`]
    pub fn observe(&self, event: GcEvent) {
        self.inner.lock().observe(event);
    }

    /// See [`OobScheduler::poll`]
    ///
    /// # Errors
    ///
    /// Propagates failures from the collector's collection requests.
    pub fn poll(&self) -> SchedulerResult<PollOutcome> {
        self.inner.lock().poll()
    }

    /// See [`OobScheduler::stat`]
    pub fn stat(&self, key: StatKey) -> Option<u64> {
        self.inner.lock().stat(key)
    }

    /// See [`OobScheduler::clear`]
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// See [`OobScheduler::stats`]
    pub fn stats(&self) -> TriggerStats {
        self.inner.lock().stats()
    }

    /// Whether a lazy sweep is outstanding
    pub fn sweep_pending(&self) -> bool {
        self.inner.lock().sweep_pending()
    }

    /// Predicted allocated-object count at which capacity runs out
    pub fn allocation_limit(&self) -> u64 {
        self.inner.lock().allocation_limit()
    }
}
