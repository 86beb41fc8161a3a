use std::path::PathBuf;

use clap::Parser;
use orchestrator::{OrchestratorError, configs::RunConfig};

#[derive(Parser, Debug)]
#[command(name = "orchestrator")]
#[command(about = "Train a 2-D perceptron on synthetic points and export its metrics")]
pub struct Cli {
    /// JSON run config, flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of training points
    #[arg(short = 'n', long)]
    pub dataset_size: Option<usize>,

    /// Step length of every perceptron correction
    #[arg(short, long)]
    pub learning_rate: Option<f64>,

    /// Number of epochs to train for
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Seed of the first trial, consecutive trials use consecutive seeds
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Metrics CSV path
    #[arg(short, long)]
    pub metrics: Option<PathBuf>,

    /// Write the final view of every trial as JSON
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Number of independent trials, run in parallel
    #[arg(short, long)]
    pub trials: Option<usize>,
}

impl Cli {
    /// Builds the run config from the config file, if any, and the given flags.
    ///
    /// # Errors
    /// Returns an `OrchestratorError` if the config file cannot be read or parsed.
    pub fn into_run_config(self) -> Result<RunConfig, OrchestratorError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(n) = self.dataset_size {
            config.training.dataset_size = n;
        }
        if let Some(lr) = self.learning_rate {
            config.training.learning_rate = lr;
        }
        if let Some(iterations) = self.iterations {
            config.training.iterations = iterations;
        }
        if let Some(seed) = self.seed {
            config.training.seed = Some(seed);
        }
        if let Some(path) = self.metrics {
            config.metrics_path = path;
        }
        if let Some(path) = self.snapshot {
            config.snapshot_path = Some(path);
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }

        Ok(config)
    }
}
