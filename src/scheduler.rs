use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::strategy::{self, ComposedEvaluator};
use crate::types::{Candidates, ChunkId, PeerChunkPair};

/// Strategy entry points bound to one config and one random generator.
///
/// A `Scheduler` owns its generator, so two schedulers never share
/// randomness. Give each thread its own instance; nothing else is shared.
/// Not `Clone`: a copied generator would replay the same draws.
#[derive(Debug)]
pub struct Scheduler<R = StdRng> {
    config: SchedulerConfig,
    rng: R,
}

impl Default for Scheduler<StdRng> {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl Scheduler<StdRng> {
    /// Seeds from `config.seed` when present, otherwise from OS entropy.
    pub fn new(config: SchedulerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }
}

impl<R: Rng> Scheduler<R> {
    /// Use a caller-supplied generator. `config.seed` is ignored.
    pub fn with_rng(config: SchedulerConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn peers_for_chunks<P, F, E>(
        &mut self,
        candidates: Candidates<'_, P>,
        filter: F,
        evaluate_peer: E,
        capacity: usize,
    ) -> Vec<P>
    where
        P: Copy,
        F: Fn(&P, ChunkId) -> bool,
        E: FnMut(&P) -> f64,
    {
        let peers = strategy::peers_for_chunks(
            self.config.ordering,
            &mut self.rng,
            candidates,
            filter,
            evaluate_peer,
            capacity,
        );
        self.log_outcome("peers_for_chunks", &candidates, capacity, peers.len());
        peers
    }

    pub fn chunks_for_peers<P, F, E>(
        &mut self,
        candidates: Candidates<'_, P>,
        filter: F,
        evaluate_chunk: E,
        capacity: usize,
    ) -> Vec<ChunkId>
    where
        P: Copy,
        F: Fn(&P, ChunkId) -> bool,
        E: FnMut(ChunkId) -> f64,
    {
        let chunks = strategy::chunks_for_peers(
            self.config.ordering,
            &mut self.rng,
            candidates,
            filter,
            evaluate_chunk,
            capacity,
        );
        self.log_outcome("chunks_for_peers", &candidates, capacity, chunks.len());
        chunks
    }

    pub fn peer_first<P, F, EP, EC>(
        &mut self,
        candidates: Candidates<'_, P>,
        filter: F,
        evaluate_peer: EP,
        evaluate_chunk: EC,
        capacity: usize,
    ) -> Vec<PeerChunkPair<P>>
    where
        P: Copy,
        F: Fn(&P, ChunkId) -> bool,
        EP: FnMut(&P) -> f64,
        EC: FnMut(ChunkId) -> f64,
    {
        let pairs = strategy::peer_first(
            self.config.ordering,
            &mut self.rng,
            candidates,
            filter,
            evaluate_peer,
            evaluate_chunk,
            capacity,
        );
        self.log_outcome("peer_first", &candidates, capacity, pairs.len());
        pairs
    }

    pub fn chunk_first<P, F, EP, EC>(
        &mut self,
        candidates: Candidates<'_, P>,
        filter: F,
        evaluate_peer: EP,
        evaluate_chunk: EC,
        capacity: usize,
    ) -> Vec<PeerChunkPair<P>>
    where
        P: Copy,
        F: Fn(&P, ChunkId) -> bool,
        EP: FnMut(&P) -> f64,
        EC: FnMut(ChunkId) -> f64,
    {
        let pairs = strategy::chunk_first(
            self.config.ordering,
            &mut self.rng,
            candidates,
            filter,
            evaluate_peer,
            evaluate_chunk,
            capacity,
        );
        self.log_outcome("chunk_first", &candidates, capacity, pairs.len());
        pairs
    }

    pub fn hybrid<P, F, E>(
        &mut self,
        candidates: Candidates<'_, P>,
        filter: F,
        evaluate_pair: E,
        capacity: usize,
    ) -> Vec<PeerChunkPair<P>>
    where
        P: Copy,
        F: Fn(&P, ChunkId) -> bool,
        E: FnMut(&PeerChunkPair<P>) -> f64,
    {
        let pairs = strategy::hybrid(
            self.config.ordering,
            &mut self.rng,
            candidates,
            filter,
            evaluate_pair,
            capacity,
        );
        self.log_outcome("hybrid", &candidates, capacity, pairs.len());
        pairs
    }

    /// Composed selection with a caller-supplied combine operator.
    pub fn composed<P, F, EP, EC, K>(
        &mut self,
        candidates: Candidates<'_, P>,
        filter: F,
        evaluate_peer: EP,
        evaluate_chunk: EC,
        combine: K,
        capacity: usize,
    ) -> Vec<PeerChunkPair<P>>
    where
        P: Copy,
        F: Fn(&P, ChunkId) -> bool,
        EP: FnMut(&P) -> f64,
        EC: FnMut(ChunkId) -> f64,
        K: FnMut(f64, f64) -> f64,
    {
        let pairs = strategy::composed(
            self.config.ordering,
            &mut self.rng,
            candidates,
            filter,
            ComposedEvaluator::new(evaluate_peer, evaluate_chunk, combine),
            capacity,
        );
        self.log_outcome("composed", &candidates, capacity, pairs.len());
        pairs
    }

    /// Composed selection using the configured [`Combine`](crate::types::Combine).
    pub fn composed_with<P, F, EP, EC>(
        &mut self,
        candidates: Candidates<'_, P>,
        filter: F,
        evaluate_peer: EP,
        evaluate_chunk: EC,
        capacity: usize,
    ) -> Vec<PeerChunkPair<P>>
    where
        P: Copy,
        F: Fn(&P, ChunkId) -> bool,
        EP: FnMut(&P) -> f64,
        EC: FnMut(ChunkId) -> f64,
    {
        let combine = self.config.combine;
        self.composed(
            candidates,
            filter,
            evaluate_peer,
            evaluate_chunk,
            move |peer_weight, chunk_weight| combine.apply(peer_weight, chunk_weight),
            capacity,
        )
    }

    fn log_outcome<P>(
        &self,
        strategy: &'static str,
        candidates: &Candidates<'_, P>,
        capacity: usize,
        selected: usize,
    ) {
        debug!(
            strategy,
            ordering = self.config.ordering.as_str(),
            peers = candidates.peers.len(),
            chunks = candidates.chunks.len(),
            capacity,
            selected,
            "selection complete"
        );
        debug_assert!(selected <= capacity);
    }
}
