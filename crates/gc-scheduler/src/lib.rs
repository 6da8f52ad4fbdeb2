//! # Out-of-Band GC Scheduler
//!
//! Adaptive scheduling of garbage collection at host-chosen quiet points.
//! Instead of letting the collector interrupt the application
//! mid-operation, the host polls this crate between units of work; the
//! scheduler watches allocation growth and collector occupancy and decides
//! when a full cycle, a young-generation cycle or the completion of a lazy
//! sweep is worth running right now.
//!
//! ## Architecture
//!
//! ```text
//!  application loop        GC instrumentation
//!       │ poll()                │ observe(event)
//!       ▼                       ▼
//!          OobScheduler<R>
//!     GrowthModel · TriggerStats
//!       │ read(stat)            │ collect_major / collect_minor / toggle
//!       ▼                       ▼
//!      CollectorStats       CollectorControl
//! ```
//!
//! The scheduler keeps an exponentially-weighted average of allocation
//! growth between polls and a clamped worst-case burst estimate. After
//! every completed sweep it predicts the allocated-object count at which
//! the heap's reusable capacity runs out; a poll that lands within
//! mean-growth distance of that limit requests a cheap young-generation
//! cycle, while a nearly saturated old generation or remembered set within
//! one worst-case burst of the limit forces a full cycle instead.
//!
//! ## Usage
//!
//! ```ignore
//! use gc_scheduler::{GcEvent, OobScheduler, PollOutcome};
//!
//! let mut scheduler = OobScheduler::new(runtime);
//!
//! // From the collector's instrumentation hooks:
//! scheduler.observe(GcEvent::CycleStart);
//!
//! // Between units of work:
//! match scheduler.poll()? {
//!     PollOutcome::NoAction => {}
//!     outcome => log::info!("collected out of band: {outcome:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

pub mod collector;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod stats;
pub mod sync;
pub mod threshold;

// Re-export the collaborator surface
pub use collector::{CollectionClass, CollectorControl, CollectorStats, GcEvent, HeapStat};

// Re-export scheduler types
pub use config::SchedulerConfig;
pub use error::{SchedulerError, SchedulerResult};
pub use scheduler::{OobScheduler, PollOutcome};
pub use stats::{StatKey, TriggerStats};
pub use sync::SharedScheduler;
pub use threshold::GrowthModel;
