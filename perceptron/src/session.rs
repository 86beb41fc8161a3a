use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    Result,
    boundary::TrueBoundary,
    config::TrainingConfig,
    data::{Point, TEST_SET_SIZE, generate_training_set},
    metrics::{MetricsSeries, MetricsSink, Snapshot},
    training::{Trainer, evaluate_test, score_training},
    view::SessionView,
    weights::{DecisionLine, Weights},
};

/// Lifecycle of a training session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// The epoch budget isn't exhausted yet.
    Running,
    /// Training finished and the held-out evaluation was performed.
    Done { test_accuracy: f64 },
}

/// The observable state returned by every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionState {
    pub epoch: usize,
    pub iterations: usize,
    pub done: bool,
    pub train_accuracy: f64,
    /// Only present once `done` is set.
    pub test_accuracy: Option<f64>,
}

/// A single training run over a fixed synthetic dataset, advanced one epoch per `step`.
///
/// The session exclusively owns its random source, weights, points and epoch index, so
/// callers sharing one must serialize their `step` calls.
pub struct TrainingSession<R: Rng = StdRng> {
    config: TrainingConfig,
    trainer: Trainer,
    boundary: TrueBoundary,
    weights: Weights,
    points: Vec<Point>,

    epoch: usize,
    train_accuracy: f64,
    phase: Phase,

    metrics: MetricsSeries,
    sink: Option<Box<dyn MetricsSink>>,
    rng: R,
}

impl TrainingSession<StdRng> {
    /// Creates a new session seeded from `config.seed`, or from the OS if there is none.
    ///
    /// # Errors
    /// Returns a configuration error if `config` is invalid.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(config, rng)
    }
}

impl<R: Rng> TrainingSession<R> {
    /// Creates a new session drawing the boundary, the initial weights and the training set
    /// from `rng`, in that order.
    ///
    /// # Args
    /// * `config` - The session's parameters, its seed is ignored.
    /// * `rng` - The random source used for every draw and shuffle of the session.
    ///
    /// # Errors
    /// Returns a configuration error if `config` is invalid.
    pub fn with_rng(config: TrainingConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let boundary = TrueBoundary::generate(&mut rng);
        let weights = Weights::random(&mut rng);
        let points = generate_training_set(&mut rng, config.dataset_size, &boundary);

        Self::from_parts(config, boundary, weights, points, rng)
    }

    /// Creates a new session over an explicit boundary, initial weights and training set.
    ///
    /// `config.dataset_size` is replaced by the amount of given points.
    ///
    /// # Errors
    /// Returns a configuration error if the resulting config is invalid.
    pub fn from_parts(
        mut config: TrainingConfig,
        boundary: TrueBoundary,
        weights: Weights,
        mut points: Vec<Point>,
        rng: R,
    ) -> Result<Self> {
        config.dataset_size = points.len();
        config.validate()?;

        let train_accuracy = score_training(&weights, &mut points);
        debug!(
            n = config.dataset_size,
            iterations = config.iterations;
            "session created: boundary y = {:.3}x + {:.3}",
            boundary.a(),
            boundary.b()
        );

        Ok(Self {
            trainer: Trainer::new(config.learning_rate),
            config,
            boundary,
            weights,
            points,
            epoch: 0,
            train_accuracy,
            phase: Phase::Running,
            metrics: MetricsSeries::new(),
            sink: None,
            rng,
        })
    }

    /// Attaches the destination the metrics are exported to once training completes.
    pub fn with_sink<S: MetricsSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Advances the session by one epoch.
    ///
    /// The step that exhausts the epoch budget also evaluates the classifier on a fresh
    /// held-out sample and exports the metrics collected so far, before its own snapshot
    /// is recorded. Steps after that only record another snapshot.
    ///
    /// # Returns
    /// The state after the step.
    pub fn step(&mut self) -> SessionState {
        let finished = match self.phase {
            Phase::Running if self.epoch < self.config.iterations => {
                let stats =
                    self.trainer
                        .run_epoch(&mut self.weights, &mut self.points, &mut self.rng);

                self.epoch += 1;
                self.train_accuracy = stats.accuracy;
                debug!(
                    epoch = self.epoch,
                    mistakes = stats.mistakes;
                    "epoch finished: accuracy={:.4}",
                    stats.accuracy
                );

                self.epoch == self.config.iterations
            }
            Phase::Running => true,
            Phase::Done { .. } => false,
        };

        if finished {
            self.finish();
        }

        self.metrics
            .record(Snapshot::new(self.epoch, self.train_accuracy, &self.weights));

        self.state()
    }

    /// Steps until the epoch budget is exhausted.
    ///
    /// # Returns
    /// The final state.
    pub fn run_to_completion(&mut self) -> SessionState {
        let mut state = self.state();
        while !state.done {
            state = self.step();
        }
        state
    }

    fn finish(&mut self) {
        let test_accuracy = evaluate_test(
            &mut self.rng,
            &self.boundary,
            &self.weights,
            TEST_SET_SIZE,
        );
        self.phase = Phase::Done { test_accuracy };

        info!(
            "training finished after {} epochs: train accuracy={:.4} test accuracy={:.4}",
            self.epoch, self.train_accuracy, test_accuracy
        );

        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.export(&self.metrics) {
                warn!("failed to export metrics: {e}");
            }
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            epoch: self.epoch,
            iterations: self.config.iterations,
            done: self.is_done(),
            train_accuracy: self.train_accuracy,
            test_accuracy: self.test_accuracy(),
        }
    }

    /// Returns a serializable copy of everything a presentation layer renders.
    pub fn view(&self) -> SessionView {
        SessionView::new(self.state(), self.decision_line(), self.points.clone())
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done { .. })
    }

    pub fn current_epoch(&self) -> usize {
        self.epoch
    }

    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    pub fn train_accuracy(&self) -> f64 {
        self.train_accuracy
    }

    pub fn test_accuracy(&self) -> Option<f64> {
        match self.phase {
            Phase::Done { test_accuracy } => Some(test_accuracy),
            Phase::Running => None,
        }
    }

    pub fn decision_line(&self) -> DecisionLine {
        self.weights.decision_line()
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn boundary(&self) -> &TrueBoundary {
        &self.boundary
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn metrics(&self) -> &MetricsSeries {
        &self.metrics
    }
}
