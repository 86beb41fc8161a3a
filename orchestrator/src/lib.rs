pub mod configs;
pub mod error;
mod trials;

pub use error::OrchestratorError;
pub use trials::{RunReport, Summary, TrialReport};

use configs::RunConfig;

/// Runs every training session described by `config` and waits for all of them to finish.
///
/// # Errors
/// Returns an `OrchestratorError` if the configuration is invalid.
pub fn train(config: RunConfig) -> Result<RunReport, OrchestratorError> {
    log::info!("validating run config");
    config.validate()?;

    log::info!(
        "running {} trial(s), metrics at {}",
        config.trials,
        config.metrics_path.display()
    );
    let report = trials::run(&config)?;

    if let Some(summary) = report.summary() {
        log::info!(
            "test accuracy over {} trial(s): mean={:.4} min={:.4} max={:.4}",
            report.trials.len(),
            summary.mean,
            summary.min,
            summary.max
        );
    }

    Ok(report)
}
