use rand::{Rng, seq::SliceRandom};

use super::score_training;
use crate::{data::Point, weights::Weights};

/// Statistics produced by a single epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpochStats {
    /// Amount of corrections applied during the pass.
    pub mistakes: usize,
    /// Training accuracy after the pass.
    pub accuracy: f64,
}

/// The online perceptron learning rule.
#[derive(Debug, Clone, Copy)]
pub struct Trainer {
    learning_rate: f64,
}

impl Trainer {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of every correction, expected to be positive.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    /// Applies the perceptron rule to a single point, moving the weights towards its label
    /// if the point is misclassified.
    ///
    /// # Arguments
    /// * `weights` - The weights that are going to be modified.
    /// * `point` - The training sample.
    ///
    /// # Returns
    /// Whether a correction was applied.
    pub fn update(&self, weights: &mut Weights, point: &Point) -> bool {
        let Point { x, y, label, .. } = *point;

        if weights.predict(x, y) == label {
            return false;
        }

        self.correct(weights, point);
        true
    }

    /// Moves the weights one step towards the point's label, regardless of the current
    /// prediction: `w += η·t·(1, x, y)`.
    pub fn correct(&self, weights: &mut Weights, point: &Point) {
        let step = self.learning_rate * point.label.value();
        weights.w0 += step;
        weights.w1 += step * point.x;
        weights.w2 += step * point.y;
    }

    /// Performs one pass over `points` in a fresh random order, updating the weights after
    /// every misclassified point, then refreshes every point's `correct` flag.
    ///
    /// # Arguments
    /// * `weights` - The weights being trained.
    /// * `points` - The training set, its order is left untouched.
    /// * `rng` - The random source used to shuffle the visiting order.
    ///
    /// # Returns
    /// The epoch's statistics.
    pub fn run_epoch<R: Rng + ?Sized>(
        &self,
        weights: &mut Weights,
        points: &mut [Point],
        rng: &mut R,
    ) -> EpochStats {
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.shuffle(rng);

        let mistakes = order
            .into_iter()
            .filter(|&i| self.update(weights, &points[i]))
            .count();

        EpochStats {
            mistakes,
            accuracy: score_training(weights, points),
        }
    }
}
