use serde::{Deserialize, Serialize};

use crate::{PerceptronErr, Result};

pub const DEFAULT_DATASET_SIZE: usize = 200;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_ITERATIONS: usize = 50;

/// Immutable parameters of a single training session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of training points (`N`).
    pub dataset_size: usize,
    /// Step length of every perceptron correction (`η`).
    pub learning_rate: f64,
    /// Epoch budget.
    pub iterations: usize,
    /// Seed of the session's random source, `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl TrainingConfig {
    /// Creates a new configuration without a seed.
    ///
    /// # Args
    /// * `dataset_size` - Number of training points.
    /// * `learning_rate` - Step length of every correction.
    /// * `iterations` - Number of epochs to train for.
    ///
    /// # Returns
    /// A `TrainingConfig` instance, not yet validated.
    pub fn new(dataset_size: usize, learning_rate: f64, iterations: usize) -> Self {
        Self {
            dataset_size,
            learning_rate,
            iterations,
            seed: None,
        }
    }

    /// Returns the same configuration with the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every parameter against its domain.
    ///
    /// # Errors
    /// Returns the first configuration error found:
    /// - `PerceptronErr::InvalidDatasetSize` if `dataset_size == 0`,
    /// - `PerceptronErr::InvalidLearningRate` if `learning_rate` is not positive and finite,
    /// - `PerceptronErr::InvalidIterations` if `iterations == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.dataset_size == 0 {
            return Err(PerceptronErr::InvalidDatasetSize {
                got: self.dataset_size,
            });
        }

        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PerceptronErr::InvalidLearningRate {
                got: self.learning_rate,
            });
        }

        if self.iterations == 0 {
            return Err(PerceptronErr::InvalidIterations {
                got: self.iterations,
            });
        }

        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_DATASET_SIZE,
            DEFAULT_LEARNING_RATE,
            DEFAULT_ITERATIONS,
        )
    }
}
