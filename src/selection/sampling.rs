use rand::Rng;
use tracing::trace;

/// Draw `capacity` distinct candidates, without replacement, with
/// probability proportional to weight.
///
/// Weight rules:
/// - negative and NaN weights count as zero
/// - when at least one weight is positive, zero-weight candidates are never
///   drawn, so at most `positive_count` items come back
/// - when every weight is zero, every candidate gets weight 1 (uniform)
///
/// Each draw picks a point in `[0, total)` on the cumulative distribution of
/// the candidates not yet chosen. A chosen candidate's bucket is emptied
/// before the next draw, which yields the same distribution as redrawing on
/// collision but always finishes in `take` draws.
///
/// Items are returned in draw order. A zero capacity returns immediately
/// without calling `evaluate`.
pub fn sample_weighted<T, R, F>(
    rng: &mut R,
    candidates: &[T],
    mut evaluate: F,
    capacity: usize,
) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
    F: FnMut(&T) -> f64,
{
    if capacity == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let n = candidates.len();
    let mut weights: Vec<f64> = candidates
        .iter()
        .map(|candidate| sampling_weight(evaluate(candidate)))
        .collect();

    let positive = weights.iter().filter(|w| **w > 0.0).count();
    let pool = if positive == 0 {
        trace!(candidates = n, "all weights are zero, sampling uniformly");
        weights.fill(1.0);
        n
    } else {
        rescale_for_finite_total(&mut weights);
        positive
    };

    let take = capacity.min(pool);
    if take < capacity {
        trace!(requested = capacity, pool, "sample capacity saturated to eligible pool");
    }

    let mut cumulative = Vec::with_capacity(n);
    let mut selected = Vec::with_capacity(take);

    while selected.len() < take {
        let total = fill_cumulative(&weights, &mut cumulative);
        debug_assert!(total > 0.0 && total.is_finite());
        if !(total > 0.0 && total.is_finite()) {
            break;
        }

        let point = rng.gen_range(0.0..total);
        // First bucket whose upper edge lies above the point. Empty buckets
        // share their edge with the previous one and can never match.
        let index = cumulative.partition_point(|&edge| edge <= point);
        debug_assert!(weights[index] > 0.0);

        weights[index] = 0.0;
        selected.push(candidates[index].clone());
    }

    selected
}

/// Floor at zero; `+inf` becomes the largest finite weight.
fn sampling_weight(weight: f64) -> f64 {
    if weight.is_nan() || weight <= 0.0 {
        return 0.0;
    }
    weight.min(f64::MAX)
}

/// Divide every weight by the largest when their sum could overflow.
///
/// Afterwards every weight is in `(0, 1]` or zero, so the total is at most
/// `n`. Positive weights never underflow to zero: that would shrink the
/// eligible pool.
fn rescale_for_finite_total(weights: &mut [f64]) {
    let largest = weights.iter().copied().fold(0.0, f64::max);
    if largest <= f64::MAX / (weights.len() as f64 + 1.0) {
        return;
    }
    trace!(largest, "rescaling sample weights");
    for weight in weights.iter_mut().filter(|w| **w > 0.0) {
        *weight = (*weight / largest).max(f64::MIN_POSITIVE);
    }
}

fn fill_cumulative(weights: &[f64], cumulative: &mut Vec<f64>) -> f64 {
    cumulative.clear();
    let mut running = 0.0;
    for weight in weights {
        running += weight;
        cumulative.push(running);
    }
    running
}
