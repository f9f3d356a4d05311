//! Domain types for the statjoin batch transform.
//!
//! Defines the region/metric enumerations, the per-state record types that
//! flow through the join, the output document, the run configuration, and
//! the error type shared by all statjoin crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::JoinConfig;
pub use error::{JoinError, Result};
pub use models::{Metric, MetricRecord, OutputDocument, Region, StateRow};
