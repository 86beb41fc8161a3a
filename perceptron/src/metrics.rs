use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::{Result, weights::Weights};

/// The state of the classifier recorded after a single step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub epoch: usize,
    pub train_accuracy: f64,
    pub w0: f64,
    pub w1: f64,
    pub w2: f64,
}

impl Snapshot {
    pub fn new(epoch: usize, train_accuracy: f64, weights: &Weights) -> Self {
        Self {
            epoch,
            train_accuracy,
            w0: weights.w0,
            w1: weights.w1,
            w2: weights.w2,
        }
    }
}

/// Append-only time series of snapshots.
#[derive(Debug, Clone, Default)]
pub struct MetricsSeries {
    snapshots: Vec<Snapshot>,
}

impl MetricsSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Writes the whole series as a table with the header `epoch,train_accuracy,w0,w1,w2`
    /// and one row per snapshot, replacing any previous file.
    ///
    /// # Errors
    /// Returns `PerceptronErr::Csv` if the file can't be created or written.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;

        if self.snapshots.is_empty() {
            writer.write_record(["epoch", "train_accuracy", "w0", "w1", "w2"])?;
        }

        for snapshot in &self.snapshots {
            writer.serialize(snapshot)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Destination of the metrics series once training completes.
pub trait MetricsSink: Send {
    /// Exports the complete series.
    ///
    /// # Errors
    /// Implementations report any I/O failure, the caller decides whether it's fatal.
    fn export(&mut self, series: &MetricsSeries) -> Result<()>;
}

/// Exports the series to a CSV file.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl MetricsSink for CsvSink {
    fn export(&mut self, series: &MetricsSeries) -> Result<()> {
        series.export_csv(&self.path)?;

        let path = self.path.canonicalize().unwrap_or_else(|_| self.path.clone());
        info!(rows = series.len(); "metrics exported to {}", path.display());
        Ok(())
    }
}
