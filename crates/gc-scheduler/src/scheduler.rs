//! Poll-driven trigger decisions

use log::{debug, trace};

use crate::collector::{CollectionClass, CollectorControl, CollectorStats, GcEvent, HeapStat};
use crate::config::SchedulerConfig;
use crate::error::SchedulerResult;
use crate::stats::{StatKey, TriggerStats};
use crate::threshold::GrowthModel;

/// Outcome of one [`OobScheduler::poll`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No threshold crossed; nothing ran
    NoAction,
    /// An outstanding lazy sweep was forced to completion
    ForcedSweep,
    /// A young-generation collection ran
    Minor,
    /// A full collection ran
    Major,
}

impl PollOutcome {
    /// True when the poll ran any collection work
    pub fn triggered(self) -> bool {
        self != Self::NoAction
    }
}

/// Counters captured when a collection cycle starts
#[derive(Debug, Clone, Copy, Default)]
struct CycleSnapshot {
    allocated: u64,
    tomb_pages: u64,
}

/// Out-of-band collection scheduler
///
/// Owns the decision state for one collector instance. The host calls
/// [`poll`](Self::poll) at self-chosen quiet points and forwards collector
/// phase boundaries through [`observe`](Self::observe); the scheduler
/// decides whether to finish a pending sweep, run a young-generation
/// cycle, or run a full cycle right now.
///
/// The scheduler assumes a single logical thread drives both polls and
/// events; see [`crate::SharedScheduler`] for hosts that need to share one
/// instance across threads.
pub struct OobScheduler<R: CollectorStats + CollectorControl> {
    /// Collector handle (statistics and control)
    runtime: R,

    /// Tuning parameters
    config: SchedulerConfig,

    /// Phase listener active
    installed: bool,

    /// A lazy sweep is outstanding (between mark-end and sweep-end)
    sweep_needed: bool,

    /// Predicted allocated-object count at capacity exhaustion; 0 = unknown
    allocation_limit: u64,

    /// Object capacity of one heap page, read once at install
    objects_per_page: u64,

    /// Counters captured at cycle-start, consumed at sweep-end
    cycle_start: CycleSnapshot,

    /// Allocation-growth estimates
    growth: GrowthModel,

    /// Collections triggered so far
    stats: TriggerStats,
}

impl<R: CollectorStats + CollectorControl> OobScheduler<R> {
    /// Create a scheduler with default tuning
    pub fn new(runtime: R) -> Self {
        Self::build(runtime, SchedulerConfig::default())
    }

    /// Create a scheduler with explicit tuning
    ///
    /// # Errors
    ///
    /// Returns [`crate::SchedulerError::InvalidConfig`] if the
    /// configuration fails [`SchedulerConfig::validate`].
    pub fn with_config(runtime: R, config: SchedulerConfig) -> SchedulerResult<Self> {
        config.validate()?;
        Ok(Self::build(runtime, config))
    }

    fn build(runtime: R, config: SchedulerConfig) -> Self {
        let growth = GrowthModel::new(config.max_growth_clamp);
        Self {
            runtime,
            config,
            installed: false,
            sweep_needed: false,
            allocation_limit: 0,
            objects_per_page: 0,
            cycle_start: CycleSnapshot::default(),
            growth,
            stats: TriggerStats::new(),
        }
    }

    /// Activate the phase listener and read the page-capacity constant
    ///
    /// Returns `false` if the scheduler was already installed; the second
    /// call changes nothing.
    pub fn install(&mut self) -> bool {
        if self.installed {
            return false;
        }
        self.objects_per_page = self.runtime.objects_per_page();
        self.installed = true;
        debug!(
            "out-of-band scheduler installed, {} objects per heap page",
            self.objects_per_page
        );
        true
    }

    /// Feed one collector phase boundary
    ///
    /// The host's instrumentation must deliver events in cycle order
    /// (cycle-start, mark-end, sweep-end) for every cycle the collector
    /// runs, whether this scheduler triggered it or not. Events arriving
    /// before installation are dropped.
    pub fn observe(&mut self, event: GcEvent) {
        if !self.installed {
            trace!("dropping {event:?} before installation");
            return;
        }
        match event {
            GcEvent::CycleStart => {
                self.allocation_limit = 0;
                self.cycle_start = CycleSnapshot {
                    allocated: self.runtime.read(HeapStat::TotalAllocatedObjects),
                    tomb_pages: self.runtime.read(HeapStat::TombPages),
                };
            }
            GcEvent::MarkEnd => {
                self.sweep_needed = true;
            }
            GcEvent::SweepEnd => {
                self.sweep_needed = false;
                let tomb_pages = self.runtime.read(HeapStat::TombPages);
                let reclaimable = self
                    .runtime
                    .read(HeapStat::MarkedSlots)
                    .saturating_add(tomb_pages.saturating_mul(self.objects_per_page));
                self.allocation_limit = self
                    .cycle_start
                    .allocated
                    .saturating_add(reclaimable)
                    .saturating_sub(self.runtime.read(HeapStat::FinalizerSlots));
                trace!(
                    "allocation limit {} (tomb pages {} -> {})",
                    self.allocation_limit, self.cycle_start.tomb_pages, tomb_pages
                );
            }
        }
    }

    /// Decide whether to run collection work right now
    ///
    /// Call at a self-chosen quiet point between units of work; installs
    /// the scheduler on first use. The decision order is fixed: an
    /// outstanding lazy sweep is always retired first; otherwise, with a
    /// valid capacity prediction, a nearly saturated old generation or
    /// remembered set within one worst-case burst of the limit forces a
    /// full collection, and crossing the mean-growth threshold requests a
    /// young-generation collection that the collector may promote.
    ///
    /// Before the first completed cycle there is no prediction, so this
    /// steadily returns [`PollOutcome::NoAction`].
    ///
    /// # Errors
    ///
    /// Propagates failures from the collector's collection requests.
    pub fn poll(&mut self) -> SchedulerResult<PollOutcome> {
        let current = self.runtime.read(HeapStat::TotalAllocatedObjects);
        if !self.installed {
            self.install();
        }
        self.growth.record_allocated(current);

        if self.sweep_needed {
            // A lazy sweep started sometime recently. Toggling enablement
            // forces the collector to finish it without starting a fresh
            // cycle.
            if !self.runtime.disable() {
                self.runtime.enable();
            }
            self.stats.sweep += 1;
            debug!("sweep: forced completion of outstanding lazy sweep");
            return Ok(PollOutcome::ForcedSweep);
        }

        if self.allocation_limit != 0 {
            // Collection is due once the allocated-object counter gets
            // close to the predicted limit.
            let old_high = self.ratio_reached(HeapStat::OldObjects, HeapStat::OldObjectsLimit);
            let unprotected_high = self.ratio_reached(
                HeapStat::RememberedWbUnprotectedObjects,
                HeapStat::RememberedWbUnprotectedObjectsLimit,
            );
            let burst_floor = self.allocation_limit as f64
                - self.config.burst_margin * self.growth.max() as f64;

            if (old_high || unprotected_high) && current as f64 >= burst_floor {
                debug!(
                    "major: {} >= {} - {}",
                    current,
                    self.allocation_limit,
                    self.growth.max()
                );
                self.runtime.collect_major()?;
                self.stats.major += 1;
                return Ok(PollOutcome::Major);
            }

            if current >= self.allocation_limit.saturating_sub(self.growth.mean()) {
                debug!(
                    "minor: {} >= {} - {}",
                    current,
                    self.allocation_limit,
                    self.growth.mean()
                );
                return Ok(match self.runtime.collect_minor()? {
                    CollectionClass::Minor => {
                        self.stats.minor += 1;
                        PollOutcome::Minor
                    }
                    CollectionClass::Major => {
                        self.stats.major += 1;
                        PollOutcome::Major
                    }
                });
            }
        }

        Ok(PollOutcome::NoAction)
    }

    fn ratio_reached(&self, value: HeapStat, limit: HeapStat) -> bool {
        self.runtime.read(value) as f64
            >= self.runtime.read(limit) as f64 * self.config.saturation_ratio
    }

    /// One trigger counter, or `None` before the scheduler has ever been
    /// installed
    pub fn stat(&self, key: StatKey) -> Option<u64> {
        if !self.installed {
            return None;
        }
        Some(self.stats.get(key))
    }

    /// Zero the trigger counters
    ///
    /// Thresholds, the capacity prediction and sweep tracking are
    /// unaffected.
    pub fn clear(&mut self) {
        self.stats.reset();
    }

    /// Tuning parameters in effect
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Snapshot of the trigger counters
    pub fn stats(&self) -> TriggerStats {
        self.stats
    }

    /// Whether the phase listener is active
    pub fn installed(&self) -> bool {
        self.installed
    }

    /// Whether a lazy sweep is outstanding
    pub fn sweep_pending(&self) -> bool {
        self.sweep_needed
    }

    /// Predicted allocated-object count at which capacity runs out; 0
    /// while unknown
    pub fn allocation_limit(&self) -> u64 {
        self.allocation_limit
    }

    /// Smoothed allocation growth per poll
    pub fn growth_mean(&self) -> u64 {
        self.growth.mean()
    }

    /// Clamped worst-case allocation growth
    pub fn growth_max(&self) -> u64 {
        self.growth.max()
    }
}
