//! Ranking and sampling primitives, and the dispatcher every strategy
//! goes through.

pub mod ranking;
pub mod sampling;

use rand::Rng;

use crate::types::OrderingMode;

pub use ranking::select_best;
pub use sampling::sample_weighted;

/// Reduce `candidates` to at most `capacity` items under `mode`.
///
/// - [`OrderingMode::Best`]: [`select_best`], top-K with shuffled ties.
/// - [`OrderingMode::Weighted`]: [`sample_weighted`], draws without
///   replacement proportional to weight.
///
/// Both share this calling convention so strategies stay mode-agnostic.
pub fn select_with_ordering<T, R, F>(
    mode: OrderingMode,
    rng: &mut R,
    candidates: &[T],
    evaluate: F,
    capacity: usize,
) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
    F: FnMut(&T) -> f64,
{
    let selected = match mode {
        OrderingMode::Best => select_best(rng, candidates, evaluate, capacity),
        OrderingMode::Weighted => sample_weighted(rng, candidates, evaluate, capacity),
    };
    debug_assert!(selected.len() <= capacity.min(candidates.len()));
    selected
}
