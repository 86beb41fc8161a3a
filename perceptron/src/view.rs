use std::fmt;

use serde::Serialize;

use crate::{data::Point, session::SessionState, weights::DecisionLine};

/// Everything a presentation layer needs to draw one frame of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub epoch: usize,
    pub iterations: usize,
    pub done: bool,
    pub train_accuracy: f64,
    pub test_accuracy: Option<f64>,
    pub line: DecisionLine,
    pub points: Vec<Point>,
}

impl SessionView {
    pub fn new(state: SessionState, line: DecisionLine, points: Vec<Point>) -> Self {
        let SessionState {
            epoch,
            iterations,
            done,
            train_accuracy,
            test_accuracy,
        } = state;

        Self {
            epoch,
            iterations,
            done,
            train_accuracy,
            test_accuracy,
            line,
            points,
        }
    }
}

/// A one-line status summary, e.g. `epoch 50/50 | train acc 97.5% | test acc 96.0% | boundary y = 1.20x + 0.05`.
impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "epoch {}/{} | train acc {:.1}%",
            self.epoch,
            self.iterations,
            self.train_accuracy * 100.
        )?;

        if let (true, Some(test)) = (self.done, self.test_accuracy) {
            write!(f, " | test acc {:.1}%", test * 100.)?;
        }

        if self.line.is_defined() {
            write!(f, " | boundary {}", self.line)?;
        }

        Ok(())
    }
}
