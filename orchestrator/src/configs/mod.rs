mod run;

pub use run::{DEFAULT_METRICS_PATH, RunConfig};
