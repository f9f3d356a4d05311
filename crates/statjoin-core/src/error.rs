use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Metric, Region};

/// All errors produced by the statjoin pipeline.
#[derive(Error, Debug)]
pub enum JoinError {
    /// An input CSV file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the file structure.
    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row did not have exactly two fields (state name, value).
    #[error("Row {line} in {path} has {fields} fields, expected 2")]
    RowShape {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    /// A value field could not be parsed as a floating-point number.
    #[error("Invalid numeric value {text:?} for state {state:?} in {path}: {source}")]
    ValueParse {
        path: PathBuf,
        state: String,
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A state was missing a metric when its output row was built.
    #[error("State {state:?} in region {region} has no value for metric {metric}")]
    MissingMetric {
        region: Region,
        state: String,
        metric: Metric,
    },

    /// The output document could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the statjoin crates.
pub type Result<T> = std::result::Result<T, JoinError>;
