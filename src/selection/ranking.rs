use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

/// Select the `capacity` highest-weighted candidates.
///
/// Every candidate is evaluated exactly once. Candidates are ordered by
/// weight descending; each run of equal weights is shuffled uniformly
/// before truncation, so input position never decides a tie.
///
/// Returns `min(capacity, candidates.len())` items, best first. A zero
/// capacity returns immediately without calling `evaluate`.
pub fn select_best<T, R, F>(rng: &mut R, candidates: &[T], mut evaluate: F, capacity: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
    F: FnMut(&T) -> f64,
{
    if capacity == 0 || candidates.is_empty() {
        return Vec::new();
    }

    // 1. Weighting phase
    let mut ranked: Vec<(f64, usize)> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| (rank_weight(evaluate(candidate)), index))
        .collect();

    // 2. Ordering phase
    // Weight desc. sort_by is stable, ties keep input order until shuffled below.
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    debug_assert!(ranked.windows(2).all(|w| w[0].0 >= w[1].0));

    // 3. Tie-break and truncate
    let take = capacity.min(ranked.len());
    shuffle_tied_runs(rng, &mut ranked, take);
    ranked.truncate(take);

    ranked
        .into_iter()
        .map(|(_, index)| candidates[index].clone())
        .collect()
}

/// NaN ranks together with negative infinity, below every finite weight.
fn rank_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        f64::NEG_INFINITY
    } else {
        weight
    }
}

/// Shuffle every maximal run of equal weights that starts before `take`.
///
/// Runs entirely past the cut are never returned, so they are left alone.
/// The run straddling the cut is shuffled whole: that is what makes the
/// choice of survivors within it uniform.
fn shuffle_tied_runs<R>(rng: &mut R, ranked: &mut [(f64, usize)], take: usize)
where
    R: Rng + ?Sized,
{
    let mut start = 0;
    while start < take {
        let weight = ranked[start].0;
        let run = ranked[start..]
            .iter()
            .take_while(|(w, _)| *w == weight)
            .count();
        let end = start + run;
        if run > 1 {
            ranked[start..end].shuffle(rng);
        }
        start = end;
    }
}
