use rand::Rng;
use serde::Serialize;

use crate::data::Label;

/// Range the ground-truth slope is drawn from.
pub const SLOPE_RANGE: (f64, f64) = (-2.5, 2.5);

/// Range the ground-truth intercept is drawn from.
pub const INTERCEPT_RANGE: (f64, f64) = (-0.6, 0.6);

/// The ground-truth separating line `y = a·x + b` used to label synthetic points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrueBoundary {
    a: f64,
    b: f64,
}

impl TrueBoundary {
    /// Creates a fixed boundary.
    ///
    /// # Args
    /// * `a` - The slope of the line.
    /// * `b` - The intercept of the line.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Draws a random boundary with its slope in `SLOPE_RANGE` and intercept in `INTERCEPT_RANGE`.
    ///
    /// # Args
    /// * `rng` - The random source.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (a_low, a_high) = SLOPE_RANGE;
        let (b_low, b_high) = INTERCEPT_RANGE;

        Self {
            a: rng.random_range(a_low..=a_high),
            b: rng.random_range(b_low..=b_high),
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Labels a coordinate by the side of the line it lies on, points on the line are positive.
    pub fn label(&self, x: f64, y: f64) -> Label {
        if y - (self.a * x + self.b) >= 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}
