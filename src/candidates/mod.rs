//! Candidate-set shaping: cross products and existential filters.
//!
//! Both pairing and existential filtering truncate at capacity while
//! walking their inputs in order, so candidates late in a set may be cut
//! off. Callers that need unbiased coverage shuffle or sub-select first.

pub mod filtering;
pub mod pairing;

pub use filtering::{filter_chunks_for_peers, filter_pairs, filter_peers_for_chunks};
pub use pairing::{pairwise, pair_count};
