use rand::Rng;

use crate::candidates::{filter_chunks_for_peers, filter_peers_for_chunks, pairwise};
use crate::selection::select_with_ordering;
use crate::types::{Candidates, ChunkId, MajorOrder, OrderingMode, PeerChunkPair};

/// Select up to `capacity` peers that can be paired with at least one of
/// the candidate chunks, ranked or sampled by `evaluate_peer`.
pub fn peers_for_chunks<P, R, F, E>(
    mode: OrderingMode,
    rng: &mut R,
    candidates: Candidates<'_, P>,
    filter: F,
    evaluate_peer: E,
    capacity: usize,
) -> Vec<P>
where
    P: Copy,
    R: Rng + ?Sized,
    F: Fn(&P, ChunkId) -> bool,
    E: FnMut(&P) -> f64,
{
    if capacity == 0 || candidates.is_empty() {
        return Vec::new();
    }
    let eligible = filter_peers_for_chunks(
        candidates.peers,
        candidates.chunks,
        filter,
        candidates.peers.len(),
    );
    select_with_ordering(mode, rng, &eligible, evaluate_peer, capacity)
}

/// Select up to `capacity` chunks that can be paired with at least one of
/// the candidate peers, ranked or sampled by `evaluate_chunk`.
pub fn chunks_for_peers<P, R, F, E>(
    mode: OrderingMode,
    rng: &mut R,
    candidates: Candidates<'_, P>,
    filter: F,
    mut evaluate_chunk: E,
    capacity: usize,
) -> Vec<ChunkId>
where
    R: Rng + ?Sized,
    F: Fn(&P, ChunkId) -> bool,
    E: FnMut(ChunkId) -> f64,
{
    if capacity == 0 || candidates.is_empty() {
        return Vec::new();
    }
    let eligible = filter_chunks_for_peers(
        candidates.peers,
        candidates.chunks,
        filter,
        candidates.chunks.len(),
    );
    select_with_ordering(mode, rng, &eligible, |&chunk| evaluate_chunk(chunk), capacity)
}

/// Pick one destination peer, then up to `capacity` chunks for it.
///
/// Every returned pair shares the same peer. Pairs come back in the order
/// the chunks were selected.
pub fn peer_first<P, R, F, EP, EC>(
    mode: OrderingMode,
    rng: &mut R,
    candidates: Candidates<'_, P>,
    filter: F,
    evaluate_peer: EP,
    evaluate_chunk: EC,
    capacity: usize,
) -> Vec<PeerChunkPair<P>>
where
    P: Copy,
    R: Rng + ?Sized,
    F: Fn(&P, ChunkId) -> bool,
    EP: FnMut(&P) -> f64,
    EC: FnMut(ChunkId) -> f64,
{
    if capacity == 0 {
        return Vec::new();
    }

    let Some(peer) = peers_for_chunks(mode, rng, candidates, &filter, evaluate_peer, 1)
        .into_iter()
        .next()
    else {
        return Vec::new();
    };

    let target = [peer];
    let chunks = chunks_for_peers(
        mode,
        rng,
        Candidates::new(&target, candidates.chunks),
        &filter,
        evaluate_chunk,
        capacity,
    );
    pairwise(&target, &chunks, MajorOrder::PeerMajor, capacity)
}

/// Pick one chunk, then up to `capacity` peers that should receive it.
///
/// Every returned pair shares the same chunk. Pairs come back in the order
/// the peers were selected.
pub fn chunk_first<P, R, F, EP, EC>(
    mode: OrderingMode,
    rng: &mut R,
    candidates: Candidates<'_, P>,
    filter: F,
    evaluate_peer: EP,
    evaluate_chunk: EC,
    capacity: usize,
) -> Vec<PeerChunkPair<P>>
where
    P: Copy,
    R: Rng + ?Sized,
    F: Fn(&P, ChunkId) -> bool,
    EP: FnMut(&P) -> f64,
    EC: FnMut(ChunkId) -> f64,
{
    if capacity == 0 {
        return Vec::new();
    }

    let Some(chunk) = chunks_for_peers(mode, rng, candidates, &filter, evaluate_chunk, 1)
        .into_iter()
        .next()
    else {
        return Vec::new();
    };

    let target = [chunk];
    let peers = peers_for_chunks(
        mode,
        rng,
        Candidates::new(candidates.peers, &target),
        &filter,
        evaluate_peer,
        capacity,
    );
    pairwise(&peers, &target, MajorOrder::ChunkMajor, capacity)
}
