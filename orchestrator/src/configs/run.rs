use std::{
    fs,
    path::{Path, PathBuf},
};

use perceptron::TrainingConfig;
use serde::Deserialize;

use crate::OrchestratorError;

pub const DEFAULT_METRICS_PATH: &str = "metrics.csv";

/// Everything needed to launch one or more independent training sessions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    #[serde(flatten)]
    pub training: TrainingConfig,
    /// Where each session exports its metrics once it's done.
    pub metrics_path: PathBuf,
    /// Where the final view of each session is written as JSON, if anywhere.
    pub snapshot_path: Option<PathBuf>,
    /// Amount of independent sessions to run.
    pub trials: usize,
}

impl RunConfig {
    /// Loads a `RunConfig` from a JSON file, missing fields take their default value.
    ///
    /// # Errors
    /// Returns an `OrchestratorError` if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, OrchestratorError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        serde_json::from_str(&content).map_err(|source| OrchestratorError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the run and its training parameters.
    ///
    /// # Errors
    /// Returns `OrchestratorError::InvalidConfig` if `trials` is zero, or
    /// `OrchestratorError::Training` if the training parameters are invalid.
    pub fn validate(&self) -> Result<(), OrchestratorError> {
        if self.trials == 0 {
            return Err(OrchestratorError::InvalidConfig(
                "at least one trial is required".into(),
            ));
        }

        self.training.validate()?;
        Ok(())
    }

    /// Returns the training parameters of the given trial, seeds are consecutive starting
    /// from the configured one.
    pub fn trial_config(&self, trial: usize) -> TrainingConfig {
        TrainingConfig {
            seed: self.training.seed.map(|s| s.wrapping_add(trial as u64)),
            ..self.training
        }
    }

    /// Returns the metrics path of the given trial.
    pub fn trial_metrics_path(&self, trial: usize) -> PathBuf {
        self.trial_path(&self.metrics_path, trial)
    }

    /// Returns the snapshot path of the given trial, if snapshots were requested.
    pub fn trial_snapshot_path(&self, trial: usize) -> Option<PathBuf> {
        self.snapshot_path
            .as_ref()
            .map(|path| self.trial_path(path, trial))
    }

    fn trial_path(&self, path: &Path, trial: usize) -> PathBuf {
        if self.trials == 1 {
            return path.to_path_buf();
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let name = match path.extension() {
            Some(ext) => format!("{stem}_trial{trial}.{}", ext.to_string_lossy()),
            None => format!("{stem}_trial{trial}"),
        };

        path.with_file_name(name)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            training: TrainingConfig::default(),
            metrics_path: PathBuf::from(DEFAULT_METRICS_PATH),
            snapshot_path: None,
            trials: 1,
        }
    }
}
