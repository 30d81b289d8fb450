use crate::types::{ChunkId, MajorOrder, PeerChunkPair};

/// Size of the full cross product, saturating instead of overflowing.
pub fn pair_count(peers: usize, chunks: usize) -> usize {
    peers.saturating_mul(chunks)
}

/// Expand `peers x chunks` into pairs, stopping after `capacity` pairs.
///
/// `order` picks the outer loop. With [`MajorOrder::PeerMajor`] every pair
/// for `peers[0]` comes before any pair for `peers[1]`; with
/// [`MajorOrder::ChunkMajor`] the same holds for chunks.
pub fn pairwise<P: Copy>(
    peers: &[P],
    chunks: &[ChunkId],
    order: MajorOrder,
    capacity: usize,
) -> Vec<PeerChunkPair<P>> {
    let take = capacity.min(pair_count(peers.len(), chunks.len()));
    let mut pairs = Vec::with_capacity(take);
    if take == 0 {
        return pairs;
    }

    match order {
        MajorOrder::PeerMajor => {
            'outer: for &peer in peers {
                for &chunk in chunks {
                    pairs.push(PeerChunkPair::new(peer, chunk));
                    if pairs.len() == take {
                        break 'outer;
                    }
                }
            }
        }
        MajorOrder::ChunkMajor => {
            'outer: for &chunk in chunks {
                for &peer in peers {
                    pairs.push(PeerChunkPair::new(peer, chunk));
                    if pairs.len() == take {
                        break 'outer;
                    }
                }
            }
        }
    }

    pairs
}
