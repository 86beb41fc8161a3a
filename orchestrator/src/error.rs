use std::{fmt, io, path::PathBuf};

use perceptron::PerceptronErr;

/// All errors that can occur in the orchestrator.
#[derive(Debug)]
pub enum OrchestratorError {
    /// Invalid run configuration, caught before any session is created.
    InvalidConfig(String),
    /// A session rejected its training parameters.
    Training(PerceptronErr),
    /// The config file isn't valid JSON for a run configuration.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// An underlying I/O error not covered by the above variants.
    Io(io::Error),
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Training(e) => write!(f, "training error: {e}"),
            Self::Json { path, source } => {
                write!(f, "cannot parse '{}': {source}", path.display())
            }
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for OrchestratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Training(e) => Some(e),
            Self::Json { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PerceptronErr> for OrchestratorError {
    fn from(e: PerceptronErr) -> Self {
        Self::Training(e)
    }
}

impl From<io::Error> for OrchestratorError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
