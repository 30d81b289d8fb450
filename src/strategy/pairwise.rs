use std::marker::PhantomData;

use rand::Rng;

use crate::candidates::{filter_pairs, pair_count, pairwise};
use crate::selection::select_with_ordering;
use crate::types::{Candidates, ChunkId, MajorOrder, OrderingMode, PeerChunkPair};

/// Rank or sample over the full filtered cross product of peers and chunks.
///
/// No peer/chunk asymmetry: every acceptable pair competes on its own
/// `evaluate_pair` weight.
pub fn hybrid<P, R, F, E>(
    mode: OrderingMode,
    rng: &mut R,
    candidates: Candidates<'_, P>,
    filter: F,
    evaluate_pair: E,
    capacity: usize,
) -> Vec<PeerChunkPair<P>>
where
    P: Copy,
    R: Rng + ?Sized,
    F: Fn(&P, ChunkId) -> bool,
    E: FnMut(&PeerChunkPair<P>) -> f64,
{
    if capacity == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let mut pairs = pairwise(
        candidates.peers,
        candidates.chunks,
        MajorOrder::PeerMajor,
        pair_count(candidates.peers.len(), candidates.chunks.len()),
    );
    filter_pairs(&mut pairs, filter);

    select_with_ordering(mode, rng, &pairs, evaluate_pair, capacity)
}

/// Pair weight built from an independent peer weight and chunk weight.
///
/// All three callbacks live in this value, which is created per call and
/// moved into [`composed`]. Nothing is shared between concurrent calls.
pub struct ComposedEvaluator<P, EP, EC, K> {
    evaluate_peer: EP,
    evaluate_chunk: EC,
    combine: K,
    _peer: PhantomData<fn(&P)>,
}

impl<P, EP, EC, K> ComposedEvaluator<P, EP, EC, K>
where
    EP: FnMut(&P) -> f64,
    EC: FnMut(ChunkId) -> f64,
    K: FnMut(f64, f64) -> f64,
{
    pub fn new(evaluate_peer: EP, evaluate_chunk: EC, combine: K) -> Self {
        Self {
            evaluate_peer,
            evaluate_chunk,
            combine,
            _peer: PhantomData,
        }
    }

    /// `combine(evaluate_peer(peer), evaluate_chunk(chunk))`
    pub fn evaluate(&mut self, pair: &PeerChunkPair<P>) -> f64 {
        let peer_weight = (self.evaluate_peer)(&pair.peer);
        let chunk_weight = (self.evaluate_chunk)(pair.chunk);
        (self.combine)(peer_weight, chunk_weight)
    }
}

/// [`hybrid`] with a pair evaluator synthesized from `evaluator`.
pub fn composed<P, R, F, EP, EC, K>(
    mode: OrderingMode,
    rng: &mut R,
    candidates: Candidates<'_, P>,
    filter: F,
    mut evaluator: ComposedEvaluator<P, EP, EC, K>,
    capacity: usize,
) -> Vec<PeerChunkPair<P>>
where
    P: Copy,
    R: Rng + ?Sized,
    F: Fn(&P, ChunkId) -> bool,
    EP: FnMut(&P) -> f64,
    EC: FnMut(ChunkId) -> f64,
    K: FnMut(f64, f64) -> f64,
{
    hybrid(mode, rng, candidates, filter, |pair| evaluator.evaluate(pair), capacity)
}
