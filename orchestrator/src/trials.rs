use std::{fs::File, io::BufWriter, path::Path};

use log::{debug, info, warn};
use perceptron::{CsvSink, SessionState, SessionView, TrainingSession};
use rayon::prelude::*;

use crate::{OrchestratorError, configs::RunConfig};

/// The outcome of a single training session.
#[derive(Debug, Clone)]
pub struct TrialReport {
    pub trial: usize,
    pub seed: Option<u64>,
    pub state: SessionState,
    pub view: SessionView,
}

/// Aggregated held-out accuracy over every trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// The outcome of a whole run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub trials: Vec<TrialReport>,
}

impl RunReport {
    /// Summarizes the test accuracy of every finished trial.
    ///
    /// # Returns
    /// `None` if no trial has a test accuracy.
    pub fn summary(&self) -> Option<Summary> {
        let accuracies: Vec<f64> = self
            .trials
            .iter()
            .filter_map(|t| t.state.test_accuracy)
            .collect();

        if accuracies.is_empty() {
            return None;
        }

        let mean = accuracies.iter().sum::<f64>() / accuracies.len() as f64;
        let min = accuracies.iter().copied().fold(f64::INFINITY, f64::min);
        let max = accuracies.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Summary { mean, min, max })
    }
}

/// Runs every trial of `config` to completion, in parallel when there's more than one.
///
/// # Errors
/// Returns the first `OrchestratorError` raised while creating a session.
pub fn run(config: &RunConfig) -> Result<RunReport, OrchestratorError> {
    let trials = (0..config.trials)
        .into_par_iter()
        .map(|trial| run_trial(config, trial))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RunReport { trials })
}

fn run_trial(config: &RunConfig, trial: usize) -> Result<TrialReport, OrchestratorError> {
    let training = config.trial_config(trial);
    let sink = CsvSink::new(config.trial_metrics_path(trial));
    let mut session = TrainingSession::new(training)?.with_sink(sink);

    info!(trial = trial; "training {} points for {} epochs", training.dataset_size, training.iterations);

    let state = loop {
        let state = session.step();
        debug!(trial = trial; "{}", session.view());

        if state.done {
            break state;
        }
    };

    let view = session.view();
    info!(trial = trial; "{view}");

    if let Some(path) = config.trial_snapshot_path(trial) {
        if let Err(e) = write_snapshot(&path, &view) {
            warn!("failed to write snapshot to {}: {e}", path.display());
        }
    }

    Ok(TrialReport {
        trial,
        seed: training.seed,
        state,
        view,
    })
}

fn write_snapshot(path: &Path, view: &SessionView) -> Result<(), OrchestratorError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, view).map_err(|source| OrchestratorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn config(dir: &Path, trials: usize) -> RunConfig {
        let mut config = RunConfig {
            metrics_path: dir.join("metrics.csv"),
            snapshot_path: Some(dir.join("view.json")),
            trials,
            ..Default::default()
        };
        config.training.dataset_size = 40;
        config.training.iterations = 5;
        config.training.seed = Some(1);
        config
    }

    #[test]
    fn single_trial_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(&config(dir.path(), 1)).unwrap();

        assert_eq!(report.trials.len(), 1);
        assert!(report.trials[0].state.done);
        assert_eq!(report.trials[0].seed, Some(1));

        let metrics = fs::read_to_string(dir.path().join("metrics.csv")).unwrap();
        assert_eq!(metrics.lines().count(), 5);

        let view: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("view.json")).unwrap())
                .unwrap();
        assert_eq!(view["epoch"], 5);
        assert_eq!(view["points"].as_array().unwrap().len(), 40);
    }

    #[test]
    fn trials_are_independent_and_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), 3);

        let first = run(&config).unwrap();
        let second = run(&config).unwrap();

        let seeds: Vec<_> = first.trials.iter().map(|t| t.seed).collect();
        assert_eq!(seeds, [Some(1), Some(2), Some(3)]);

        for (a, b) in first.trials.iter().zip(&second.trials) {
            assert_eq!(a.state, b.state);
            assert_eq!(a.view, b.view);
        }

        for trial in 0..3 {
            assert!(dir.path().join(format!("metrics_trial{trial}.csv")).exists());
            assert!(dir.path().join(format!("view_trial{trial}.json")).exists());
        }
    }

    #[test]
    fn summary_spans_every_trial() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(&config(dir.path(), 4)).unwrap();
        let summary = report.summary().unwrap();

        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
        assert!((0.0..=1.0).contains(&summary.min));
        assert!((0.0..=1.0).contains(&summary.max));
    }

    #[test]
    fn invalid_training_parameters_fail_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path(), 2);
        config.training.learning_rate = 0.0;

        assert!(matches!(run(&config), Err(OrchestratorError::Training(_))));
    }

    #[test]
    fn empty_report_has_no_summary() {
        assert!(RunReport { trials: Vec::new() }.summary().is_none());
    }
}
