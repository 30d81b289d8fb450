use super::identifiers::ChunkId;

/// The peer and chunk candidate sets for one selection call.
///
/// Both slices are read-only and only need to live for the call.
#[derive(Debug)]
pub struct Candidates<'a, P> {
    pub peers: &'a [P],
    pub chunks: &'a [ChunkId],
}

// Only slices inside, so copyable whatever `P` is.
impl<P> Clone for Candidates<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Candidates<'_, P> {}

impl<'a, P> Candidates<'a, P> {
    pub fn new(peers: &'a [P], chunks: &'a [ChunkId]) -> Self {
        Self { peers, chunks }
    }

    /// True when either side is empty, i.e. no pair can be formed.
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty() || self.chunks.is_empty()
    }
}
