use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire perceptron module.
pub type Result<T> = std::result::Result<T, PerceptronErr>;

/// The perceptron module's error type.
#[derive(Debug)]
pub enum PerceptronErr {
    InvalidDatasetSize { got: usize },
    InvalidLearningRate { got: f64 },
    InvalidIterations { got: usize },
    Csv(csv::Error),
    Io(io::Error),
}

impl PerceptronErr {
    /// Returns `true` if this error was produced while validating a training configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidDatasetSize { .. }
                | Self::InvalidLearningRate { .. }
                | Self::InvalidIterations { .. }
        )
    }
}

impl Display for PerceptronErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptronErr::InvalidDatasetSize { got } => {
                write!(f, "invalid config: the dataset size must be positive, got {got}")
            }
            PerceptronErr::InvalidLearningRate { got } => write!(
                f,
                "invalid config: the learning rate must be a positive finite number, got {got}"
            ),
            PerceptronErr::InvalidIterations { got } => {
                write!(f, "invalid config: the epoch budget must be positive, got {got}")
            }
            PerceptronErr::Csv(e) => write!(f, "csv error: {e}"),
            PerceptronErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for PerceptronErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PerceptronErr::Csv(e) => Some(e),
            PerceptronErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for PerceptronErr {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<io::Error> for PerceptronErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
