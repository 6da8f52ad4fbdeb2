//! Collector-facing collaborator traits
//!
//! The scheduler never touches the heap itself. It reads occupancy
//! counters through [`CollectorStats`] and issues collection requests
//! through [`CollectorControl`]; both are implemented by the embedding
//! host against its concrete collector.

use crate::error::SchedulerResult;

/// Occupancy counters of a generational mark-sweep collector with a
/// page-based heap layout.
///
/// The vocabulary is pinned to this collector family; hosts with a
/// different collector map their own counters onto it behind
/// [`CollectorStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapStat {
    /// Objects allocated since process start (monotonically non-decreasing)
    TotalAllocatedObjects,
    /// Slots found live by the most recent mark phase
    MarkedSlots,
    /// Heap pages whose slots are all free, available for reuse
    TombPages,
    /// Slots still awaiting finalizer runs
    FinalizerSlots,
    /// Objects promoted to the old generation
    OldObjects,
    /// Old-generation capacity before the collector forces a full cycle
    OldObjectsLimit,
    /// Old objects not protected by the write barrier, rescanned each
    /// minor cycle
    RememberedWbUnprotectedObjects,
    /// Capacity limit for write-barrier-unprotected objects
    RememberedWbUnprotectedObjectsLimit,
}

/// Phase boundaries of one collection cycle, delivered by the host's
/// instrumentation in strict temporal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcEvent {
    /// A collection cycle has begun
    CycleStart,
    /// The mark phase finished; a (possibly lazy) sweep is outstanding
    MarkEnd,
    /// The sweep phase finished
    SweepEnd,
}

/// Which class of collection actually ran for an incremental request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionClass {
    /// The request stayed a young-generation cycle
    Minor,
    /// The collector promoted the request to a full cycle
    Major,
}

/// Read-only view of collector statistics
pub trait CollectorStats {
    /// Current value of one occupancy counter
    fn read(&self, stat: HeapStat) -> u64;

    /// Object capacity of one heap page, constant for the process lifetime
    fn objects_per_page(&self) -> u64;
}

/// Collection requests and the enablement switch
pub trait CollectorControl {
    /// Run a full collection synchronously
    ///
    /// # Errors
    ///
    /// Returns [`crate::SchedulerError::CollectionFailed`] if the
    /// collector cannot complete the cycle.
    fn collect_major(&mut self) -> SchedulerResult<()>;

    /// Request a young-generation collection
    ///
    /// The collector may promote the request to a full cycle on its own;
    /// the returned class reports what actually ran.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SchedulerError::CollectionFailed`] if the
    /// collector cannot complete the cycle.
    fn collect_minor(&mut self) -> SchedulerResult<CollectionClass>;

    /// Disable automatic collection, returning `true` if it was already
    /// disabled
    ///
    /// Implementations must finish any in-progress lazy sweep before
    /// disabling takes effect; the scheduler relies on this to retire an
    /// outstanding sweep without starting a fresh cycle.
    fn disable(&mut self) -> bool;

    /// Re-enable automatic collection, returning `true` if it was disabled
    fn enable(&mut self) -> bool;
}
