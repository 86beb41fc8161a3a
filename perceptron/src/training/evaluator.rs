use rand::Rng;

use crate::{
    boundary::TrueBoundary,
    data::{Point, generate_test_set},
    weights::Weights,
};

/// Recomputes every point's `correct` flag under `weights`.
///
/// # Returns
/// The fraction of correctly classified points, `0` for an empty set.
pub fn score_training(weights: &Weights, points: &mut [Point]) -> f64 {
    let mut correct = 0;

    for p in points.iter_mut() {
        p.correct = weights.predict(p.x, p.y) == p.label;
        if p.correct {
            correct += 1;
        }
    }

    correct as f64 / points.len().max(1) as f64
}

/// Computes the fraction of `points` classified correctly under `weights` without touching
/// their flags.
pub fn accuracy(weights: &Weights, points: &[Point]) -> f64 {
    let correct = points
        .iter()
        .filter(|p| weights.predict(p.x, p.y) == p.label)
        .count();

    correct as f64 / points.len().max(1) as f64
}

/// Scores `weights` against `m` freshly sampled held-out points.
///
/// # Args
/// * `rng` - The random source for the held-out sample.
/// * `boundary` - The ground-truth line labelling the sample.
/// * `weights` - The classifier under evaluation.
/// * `m` - The size of the held-out sample.
///
/// # Returns
/// The generalization accuracy.
pub fn evaluate_test<R: Rng + ?Sized>(
    rng: &mut R,
    boundary: &TrueBoundary,
    weights: &Weights,
    m: usize,
) -> f64 {
    let test_set = generate_test_set(rng, m, boundary);
    accuracy(weights, &test_set)
}
