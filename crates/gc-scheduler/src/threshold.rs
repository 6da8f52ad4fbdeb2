//! Allocation-growth tracking

use log::warn;

/// Moving estimate of allocation growth between polls
///
/// Tracks an exponentially-weighted moving average (smoothing factor 1/4)
/// of the allocated-object delta seen between consecutive polls, together
/// with the largest delta observed so far. The maximum is clamped to a
/// ceiling so one outlier burst cannot dominate the major-trigger
/// threshold; the average is not clamped.
#[derive(Debug, Clone)]
pub struct GrowthModel {
    /// Counter value at the previous poll; 0 means not yet seeded
    prev_allocated: u64,
    /// Smoothed growth per poll
    mean: u64,
    /// Largest observed growth, clamped
    max: u64,
    /// Ceiling for `max`
    clamp: u64,
}

impl GrowthModel {
    /// Create a model with the given ceiling for the max-growth estimate
    pub fn new(clamp: u64) -> Self {
        Self {
            prev_allocated: 0,
            mean: 0,
            max: 0,
            clamp,
        }
    }

    /// Feed the current allocated-object counter
    ///
    /// The first call only seeds the baseline and leaves both estimates
    /// untouched; later calls fold the delta into the average and the
    /// clamped maximum. A counter that moved backwards counts as zero
    /// growth.
    pub fn record_allocated(&mut self, current: u64) {
        if self.prev_allocated == 0 {
            self.prev_allocated = current;
            return;
        }

        if current < self.prev_allocated {
            warn!(
                "allocated-object counter regressed ({} -> {}), treating as zero growth",
                self.prev_allocated, current
            );
        }
        let diff = current.saturating_sub(self.prev_allocated);
        self.prev_allocated = current;

        self.mean = if self.mean == 0 {
            diff
        } else {
            diff / 4 + self.mean * 3 / 4
        };

        if diff > self.max {
            self.max = diff;
        }
        if self.max > self.clamp {
            self.max = self.clamp;
        }
    }

    /// Smoothed allocation growth per poll
    pub fn mean(&self) -> u64 {
        self.mean
    }

    /// Largest observed growth, clamped to the configured ceiling
    pub fn max(&self) -> u64 {
        self.max
    }

    /// True once the counter baseline has been seeded
    pub fn is_seeded(&self) -> bool {
        self.prev_allocated != 0
    }

    /// Forget the counter baseline; the next sample seeds it afresh
    /// without being treated as growth
    pub fn reset_baseline(&mut self) {
        self.prev_allocated = 0;
    }
}
