use crate::types::{ChunkId, PeerChunkPair};

/// Keep the peers that `filter` accepts together with at least one chunk.
///
/// Walks `peers` in order and stops once `capacity` peers are kept.
pub fn filter_peers_for_chunks<P, F>(
    peers: &[P],
    chunks: &[ChunkId],
    filter: F,
    capacity: usize,
) -> Vec<P>
where
    P: Copy,
    F: Fn(&P, ChunkId) -> bool,
{
    peers
        .iter()
        .filter(|&peer| chunks.iter().any(|&chunk| filter(peer, chunk)))
        .take(capacity)
        .copied()
        .collect()
}

/// Keep the chunks that `filter` accepts together with at least one peer.
///
/// Walks `chunks` in order and stops once `capacity` chunks are kept.
pub fn filter_chunks_for_peers<P, F>(
    peers: &[P],
    chunks: &[ChunkId],
    filter: F,
    capacity: usize,
) -> Vec<ChunkId>
where
    F: Fn(&P, ChunkId) -> bool,
{
    chunks
        .iter()
        .filter(|&&chunk| peers.iter().any(|peer| filter(peer, chunk)))
        .take(capacity)
        .copied()
        .collect()
}

/// Drop every pair `filter` rejects, in place. Survivors keep their order.
pub fn filter_pairs<P, F>(pairs: &mut Vec<PeerChunkPair<P>>, filter: F)
where
    F: Fn(&P, ChunkId) -> bool,
{
    pairs.retain(|pair| filter(&pair.peer, pair.chunk));
}
