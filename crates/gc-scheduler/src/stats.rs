//! Trigger counters

use serde::{Deserialize, Serialize};

/// Statistic keys understood by [`crate::OobScheduler::stat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    /// Sum of all three trigger counters
    Count,
    /// Full collections triggered, including escalated incremental requests
    MajorCount,
    /// Young-generation collections triggered
    MinorCount,
    /// Deferred sweeps forced to completion
    SweepCount,
}

/// Counters for collections this scheduler has triggered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerStats {
    /// Full collections
    pub major: u64,

    /// Young-generation collections
    pub minor: u64,

    /// Forced sweep completions
    pub sweep: u64,
}

impl TriggerStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all three counters
    pub fn total(&self) -> u64 {
        self.major + self.minor + self.sweep
    }

    /// Value for one statistic key
    pub fn get(&self, key: StatKey) -> u64 {
        match key {
            StatKey::Count => self.total(),
            StatKey::MajorCount => self.major,
            StatKey::MinorCount => self.minor,
            StatKey::SweepCount => self.sweep,
        }
    }

    /// Zero all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
