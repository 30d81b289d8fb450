//! Peer/chunk selection engine for peer-to-peer chunk dissemination.
//!
//! `chunk-sched` decides *which* (peer, chunk) pairs to act on next: send,
//! request, offer, propose or accept. It never decides *when*. Every call
//! is synchronous, allocation-bounded by its inputs, and holds no state
//! between calls beyond the random generator the caller hands it.
//!
//! Layers, bottom up:
//! - [`selection`]: best-of-K ranking with shuffled ties, weighted sampling
//!   without replacement, and the dispatcher choosing between them.
//! - [`candidates`]: cross products and existential filters.
//! - [`strategy`]: peer-first, chunk-first, hybrid, composed, and the
//!   one-sided building blocks.
//! - [`scheduler`]: a config-driven facade owning its own generator.

pub mod candidates;
pub mod config;
pub mod scheduler;
pub mod selection;
pub mod strategy;
pub mod types;

pub use config::{ConfigError, SchedulerConfig};
pub use scheduler::Scheduler;
pub use selection::select_with_ordering;
pub use types::{accept_all, Candidates, ChunkId, Combine, MajorOrder, OrderingMode, PeerChunkPair};
