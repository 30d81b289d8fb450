pub mod candidates;
pub mod filter;
pub mod identifiers;
pub mod modes;

pub use candidates::Candidates;
pub use filter::accept_all;
pub use identifiers::{ChunkId, PeerChunkPair};
pub use modes::{Combine, MajorOrder, OrderingMode};
