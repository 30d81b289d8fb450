use super::identifiers::ChunkId;

/// The absent filter: every (peer, chunk) pair is acceptable.
///
/// Pass this wherever a filter argument is required but no gating is
/// wanted. Any `Fn(&P, ChunkId) -> bool` closure works as a filter.
pub fn accept_all<P>(_peer: &P, _chunk: ChunkId) -> bool {
    true
}
