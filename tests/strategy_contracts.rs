use std::cell::Cell;

use chunk_sched::strategy::{
    chunk_first, chunks_for_peers, composed, hybrid, peer_first, peers_for_chunks, ComposedEvaluator,
};
use chunk_sched::{accept_all, Candidates, ChunkId, OrderingMode, PeerChunkPair};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Stand-in for a neighbor-list entry; strategies only ever see `&Neighbor`.
#[derive(Debug, PartialEq)]
struct Neighbor {
    name: &'static str,
    rtt_ms: u32,
    holds: Vec<ChunkId>,
}

fn neighbors() -> Vec<Neighbor> {
    vec![
        Neighbor { name: "fast", rtt_ms: 10, holds: vec![1, 2] },
        Neighbor { name: "slow", rtt_ms: 250, holds: vec![] },
        Neighbor { name: "mid", rtt_ms: 80, holds: vec![2] },
    ]
}

const MODES: [OrderingMode; 2] = [OrderingMode::Best, OrderingMode::Weighted];

#[test]
fn peer_first_anchors_on_one_peer_and_chunk_first_on_one_chunk() {
    let peers = ["p1", "p2"];
    let chunks = [1, 2];
    let candidates = Candidates::new(&peers, &chunks);

    for mode in MODES {
        let mut rng = StdRng::seed_from_u64(7);
        let pairs = peer_first(mode, &mut rng, candidates, accept_all, |_| 1.0, |_| 1.0, 2);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].peer, pairs[1].peer);
        assert_ne!(pairs[0].chunk, pairs[1].chunk);

        let pairs = chunk_first(mode, &mut rng, candidates, accept_all, |_| 1.0, |_| 1.0, 2);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].chunk, pairs[1].chunk);
        assert_ne!(pairs[0].peer, pairs[1].peer);
    }
}

#[test]
fn composed_matches_hybrid_with_product_evaluator() {
    let peers = [1u32, 2, 3];
    let chunks = [5, 6, 7];
    let candidates = Candidates::new(&peers, &chunks);
    let filter = |p: &u32, c: ChunkId| (p + c) % 4 != 0;
    let e_p = |p: &u32| 10f64.powi(*p as i32 - 1);
    let e_c = |c: ChunkId| f64::from(c - 4);

    for mode in MODES {
        for capacity in [1, 4, 9] {
            let mut rng = StdRng::seed_from_u64(99);
            let via_composed = composed(
                mode,
                &mut rng,
                candidates,
                filter,
                ComposedEvaluator::new(e_p, e_c, |a, b| a * b),
                capacity,
            );

            let mut rng = StdRng::seed_from_u64(99);
            let via_hybrid = hybrid(
                mode,
                &mut rng,
                candidates,
                filter,
                |pair: &PeerChunkPair<u32>| e_p(&pair.peer) * e_c(pair.chunk),
                capacity,
            );

            assert_eq!(via_composed, via_hybrid, "mode {mode:?} capacity {capacity}");
        }
    }
}

#[test]
fn hybrid_best_ranks_pairs_by_pair_weight() {
    let peers = [1u32, 2];
    let chunks = [10, 30];
    let mut rng = StdRng::seed_from_u64(0);
    let pairs = hybrid(
        OrderingMode::Best,
        &mut rng,
        Candidates::new(&peers, &chunks),
        accept_all,
        |pair: &PeerChunkPair<u32>| f64::from(pair.peer * pair.chunk),
        3,
    );
    assert_eq!(
        pairs,
        vec![
            PeerChunkPair::new(2, 30),
            PeerChunkPair::new(1, 30),
            PeerChunkPair::new(2, 10)
        ]
    );
}

#[test]
fn strategies_work_over_borrowed_peer_handles() {
    let table = neighbors();
    let handles: Vec<&Neighbor> = table.iter().collect();
    let chunks = [1, 2, 3];
    let candidates = Candidates::new(&handles, &chunks);
    let holds = |n: &&Neighbor, c: ChunkId| n.holds.contains(&c);
    let closeness = |n: &&Neighbor| 1000.0 / f64::from(n.rtt_ms);

    let mut rng = StdRng::seed_from_u64(4);
    let pairs = peer_first(
        OrderingMode::Best,
        &mut rng,
        candidates,
        holds,
        closeness,
        |c| f64::from(c),
        5,
    );
    let flat: Vec<(&str, ChunkId)> = pairs.iter().map(|p| (p.peer.name, p.chunk)).collect();
    assert_eq!(flat, vec![("fast", 2), ("fast", 1)]);

    let picked = peers_for_chunks(OrderingMode::Best, &mut rng, candidates, holds, closeness, 5);
    let names: Vec<&str> = picked.iter().map(|n| n.name).collect();
    assert_eq!(names, vec!["fast", "mid"], "slow holds nothing and is filtered out");

    let pairs = chunk_first(
        OrderingMode::Best,
        &mut rng,
        candidates,
        holds,
        closeness,
        |c| if c == 2 { 1.0 } else { 0.0 },
        5,
    );
    let flat: Vec<(&str, ChunkId)> = pairs.iter().map(|p| (p.peer.name, p.chunk)).collect();
    assert_eq!(flat, vec![("fast", 2), ("mid", 2)]);
}

#[test]
fn zero_capacity_is_empty_and_never_evaluates() {
    let peers = [1u32, 2];
    let chunks = [1, 2];
    let candidates = Candidates::new(&peers, &chunks);
    let calls = Cell::new(0usize);
    let e_p = |_: &u32| {
        calls.set(calls.get() + 1);
        1.0
    };
    let e_c = |_: ChunkId| {
        calls.set(calls.get() + 1);
        1.0
    };

    for mode in MODES {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(peers_for_chunks(mode, &mut rng, candidates, accept_all, e_p, 0).is_empty());
        assert!(chunks_for_peers(mode, &mut rng, candidates, accept_all, e_c, 0).is_empty());
        assert!(peer_first(mode, &mut rng, candidates, accept_all, e_p, e_c, 0).is_empty());
        assert!(chunk_first(mode, &mut rng, candidates, accept_all, e_p, e_c, 0).is_empty());
        assert!(hybrid(
            mode,
            &mut rng,
            candidates,
            accept_all,
            |_: &PeerChunkPair<u32>| {
                calls.set(calls.get() + 1);
                1.0
            },
            0
        )
        .is_empty());
        assert!(composed(
            mode,
            &mut rng,
            candidates,
            accept_all,
            ComposedEvaluator::new(e_p, e_c, |a, b| a + b),
            0
        )
        .is_empty());
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn empty_sets_and_reject_all_filters_yield_empty_results() {
    let peers = [1u32, 2];
    let chunks = [1, 2];
    let none: [u32; 0] = [];
    let reject = |_: &u32, _: ChunkId| false;

    for mode in MODES {
        let mut rng = StdRng::seed_from_u64(0);
        for candidates in [
            Candidates::new(&none, &chunks),
            Candidates::new(&peers, &[]),
        ] {
            assert!(peer_first(mode, &mut rng, candidates, accept_all, |_| 1.0, |_| 1.0, 3).is_empty());
            assert!(chunk_first(mode, &mut rng, candidates, accept_all, |_| 1.0, |_| 1.0, 3).is_empty());
            assert!(hybrid(mode, &mut rng, candidates, accept_all, |_| 1.0, 3).is_empty());
        }

        let candidates = Candidates::new(&peers, &chunks);
        assert!(peer_first(mode, &mut rng, candidates, reject, |_| 1.0, |_| 1.0, 3).is_empty());
        assert!(chunk_first(mode, &mut rng, candidates, reject, |_| 1.0, |_| 1.0, 3).is_empty());
        assert!(hybrid(mode, &mut rng, candidates, reject, |_| 1.0, 3).is_empty());
        assert!(peers_for_chunks(mode, &mut rng, candidates, reject, |_| 1.0, 3).is_empty());
        assert!(chunks_for_peers(mode, &mut rng, candidates, reject, |_| 1.0, 3).is_empty());
    }
}

#[test]
fn oversized_capacity_saturates_to_pool() {
    let peers = [1u32, 2, 3];
    let chunks = [1, 2];
    let candidates = Candidates::new(&peers, &chunks);
    let mut rng = StdRng::seed_from_u64(0);

    let pairs = hybrid(OrderingMode::Best, &mut rng, candidates, accept_all, |_| 1.0, 100);
    assert_eq!(pairs.len(), 6);

    let pairs = peer_first(OrderingMode::Best, &mut rng, candidates, accept_all, |_| 1.0, |_| 1.0, 100);
    assert_eq!(pairs.len(), 2);

    let pairs = chunk_first(OrderingMode::Best, &mut rng, candidates, accept_all, |_| 1.0, |_| 1.0, 100);
    assert_eq!(pairs.len(), 3);
}
