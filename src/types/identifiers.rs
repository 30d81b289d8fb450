use serde::{Deserialize, Serialize};

/// Chunk identifier, owned by the chunk buffer.
///
/// The engine only copies and compares these; it never looks up chunk
/// content.
pub type ChunkId = u32;

/// A (peer, chunk) pair: the unit every strategy ultimately produces.
///
/// `P` is whatever handle the neighbor list hands out (usually `&Peer` or
/// a small id). The pair borrows nothing beyond what `P` itself borrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerChunkPair<P> {
    pub peer: P,
    pub chunk: ChunkId,
}

impl<P> PeerChunkPair<P> {
    pub fn new(peer: P, chunk: ChunkId) -> Self {
        Self { peer, chunk }
    }
}

impl<P> From<(P, ChunkId)> for PeerChunkPair<P> {
    fn from((peer, chunk): (P, ChunkId)) -> Self {
        Self { peer, chunk }
    }
}
