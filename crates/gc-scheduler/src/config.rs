//! Scheduler tuning parameters

use crate::error::{SchedulerError, SchedulerResult};

/// Scheduler configuration
///
/// The defaults reproduce the classic out-of-band trigger heuristic:
/// a 200,000-object ceiling on the worst-case growth estimate, full
/// collection once the old generation or remembered set reaches 97% of
/// its limit, and a burst margin of 98% of the worst-case growth.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Ceiling applied to the max-growth estimate, bounding the influence
    /// of a single allocation burst on the major-trigger threshold
    pub max_growth_clamp: u64,

    /// Old-generation / remembered-set occupancy fraction above which the
    /// generation counts as nearly saturated
    pub saturation_ratio: f64,

    /// Fraction of the max-growth estimate subtracted from the allocation
    /// limit when testing for the major trigger
    pub burst_margin: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_growth_clamp: 200_000,
            saturation_ratio: 0.97,
            burst_margin: 0.98,
        }
    }
}

impl SchedulerConfig {
    /// Check that all parameters are usable
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidConfig`] if the clamp is zero or a
    /// ratio falls outside `(0, 1]`.
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.max_growth_clamp == 0 {
            return Err(SchedulerError::invalid_config(
                "max_growth_clamp must be nonzero",
            ));
        }
        if !(self.saturation_ratio > 0.0 && self.saturation_ratio <= 1.0) {
            return Err(SchedulerError::invalid_config(format!(
                "saturation_ratio {} outside (0, 1]",
                self.saturation_ratio
            )));
        }
        if !(self.burst_margin > 0.0 && self.burst_margin <= 1.0) {
            return Err(SchedulerError::invalid_config(format!(
                "burst_margin {} outside (0, 1]",
                self.burst_margin
            )));
        }
        Ok(())
    }
}
