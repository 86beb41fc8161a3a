pub mod boundary;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod session;
pub mod training;
pub mod view;
pub mod weights;

pub use boundary::TrueBoundary;
pub use config::TrainingConfig;
pub use data::{Label, Point};
pub use error::{PerceptronErr, Result};
pub use metrics::{CsvSink, MetricsSeries, MetricsSink, Snapshot};
pub use session::{Phase, SessionState, TrainingSession};
pub use view::SessionView;
pub use weights::{DecisionLine, Weights};
