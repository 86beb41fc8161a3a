use rand::Rng;
use serde::{Serialize, Serializer};

use crate::boundary::TrueBoundary;

/// Coordinate range of training points, the margin keeps them off the plot's edges.
pub const TRAIN_RANGE: (f64, f64) = (0.02, 0.98);

/// Coordinate range of held-out test points.
pub const TEST_RANGE: (f64, f64) = (0.0, 1.0);

/// Number of points sampled for the held-out evaluation.
pub const TEST_SET_SIZE: usize = 200;

/// A binary class, serialized as `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Returns the signed value of the class, `+1` or `-1`.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Label::Positive => 1,
            Label::Negative => -1,
        }
    }

    /// Returns the signed value of the class as a float, ready for the update rule.
    #[inline]
    pub fn value(self) -> f64 {
        f64::from(self.sign())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.sign())
    }
}

/// A single labelled sample in the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub label: Label,
    /// Whether the current classifier agrees with `label`.
    pub correct: bool,
}

impl Point {
    /// Creates a new point that hasn't been scored yet.
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self {
            x,
            y,
            label,
            correct: false,
        }
    }
}

/// Samples `n` training points uniformly in `TRAIN_RANGE`², labelled by `boundary`.
///
/// # Args
/// * `rng` - The random source.
/// * `n` - The amount of points.
/// * `boundary` - The ground-truth line.
pub fn generate_training_set<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    boundary: &TrueBoundary,
) -> Vec<Point> {
    generate(rng, n, boundary, TRAIN_RANGE)
}

/// Samples `m` test points uniformly in `TEST_RANGE`², labelled by `boundary`.
///
/// # Args
/// * `rng` - The random source.
/// * `m` - The amount of points.
/// * `boundary` - The ground-truth line.
pub fn generate_test_set<R: Rng + ?Sized>(
    rng: &mut R,
    m: usize,
    boundary: &TrueBoundary,
) -> Vec<Point> {
    generate(rng, m, boundary, TEST_RANGE)
}

fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    boundary: &TrueBoundary,
    (low, high): (f64, f64),
) -> Vec<Point> {
    (0..n)
        .map(|_| {
            let x = rng.random_range(low..=high);
            let y = rng.random_range(low..=high);
            Point::new(x, y, boundary.label(x, y))
        })
        .collect()
}
