use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::data::Label;

/// Magnitude under which a coefficient is treated as zero when deriving the decision line.
pub const EPSILON: f64 = 1e-9;

/// Range the initial weights are drawn from.
pub const INIT_RANGE: (f64, f64) = (-1.0, 1.0);

/// The learnable parameters of the classifier `f(x, y) = w0 + w1·x + w2·y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Weights {
    pub w0: f64,
    pub w1: f64,
    pub w2: f64,
}

impl Weights {
    pub fn new(w0: f64, w1: f64, w2: f64) -> Self {
        Self { w0, w1, w2 }
    }

    /// Draws every weight uniformly from `INIT_RANGE`.
    ///
    /// # Args
    /// * `rng` - The random source.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (low, high) = INIT_RANGE;

        Self {
            w0: rng.random_range(low..=high),
            w1: rng.random_range(low..=high),
            w2: rng.random_range(low..=high),
        }
    }

    /// The affine score of a coordinate.
    #[inline]
    pub fn raw(&self, x: f64, y: f64) -> f64 {
        self.w0 + self.w1 * x + self.w2 * y
    }

    /// Classifies a coordinate, a score of exactly zero is positive.
    #[inline]
    pub fn predict(&self, x: f64, y: f64) -> Label {
        if self.raw(x, y) >= 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// Derives the line where the score is zero.
    pub fn decision_line(&self) -> DecisionLine {
        let Self { w0, w1, w2 } = *self;

        if w2.abs() < EPSILON {
            if w1.abs() < EPSILON {
                return DecisionLine::Undefined;
            }

            return DecisionLine::Vertical { x: -w0 / w1 };
        }

        DecisionLine::Sloped {
            a: -w1 / w2,
            b: -w0 / w2,
        }
    }
}

/// A renderable form of the classifier's decision boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionLine {
    /// Both coefficients vanish, there is no line to draw.
    Undefined,
    /// The line `x = x`.
    Vertical { x: f64 },
    /// The line `y = a·x + b`.
    Sloped { a: f64, b: f64 },
}

impl DecisionLine {
    pub fn is_defined(&self) -> bool {
        !matches!(self, DecisionLine::Undefined)
    }
}

impl fmt::Display for DecisionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionLine::Undefined => write!(f, "undefined"),
            DecisionLine::Vertical { x } => write!(f, "x = {x:.2}"),
            DecisionLine::Sloped { a, b } => write!(f, "y = {a:.2}x + {b:.2}"),
        }
    }
}
