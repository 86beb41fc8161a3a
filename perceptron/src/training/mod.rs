mod evaluator;
mod trainer;

pub use evaluator::{accuracy, evaluate_test, score_training};
pub use trainer::{EpochStats, Trainer};
