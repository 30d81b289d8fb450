//! Selection strategies composed from filtering, pairing and the ordering
//! dispatcher.
//!
//! Shared edge policy: an empty side, a filter that rejects everything, or
//! a zero capacity all yield an empty result. Capacity larger than the
//! eligible pool saturates silently.

pub mod one_sided;
pub mod pairwise;

pub use one_sided::{chunk_first, chunks_for_peers, peer_first, peers_for_chunks};
pub use pairwise::{composed, hybrid, ComposedEvaluator};
