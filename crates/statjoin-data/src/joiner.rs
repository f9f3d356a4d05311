//! The join itself: merge per-metric tables into per-state rows.
//!
//! One linear pass per region. Metric files are read in configured column
//! order; the first file a state appears in fixes its row position for that
//! region. Nothing is written until every region has joined cleanly.

use indexmap::IndexMap;
use tracing::{debug, warn};

use statjoin_core::models::{MetricRecord, OutputDocument, Region, StateRow};
use statjoin_core::{JoinConfig, JoinError, Result};

use crate::reader::read_metric_file;
use crate::writer::write_document;

/// Drives the whole batch transform for one configuration.
pub struct Joiner {
    config: JoinConfig,
}

impl Joiner {
    pub fn new(config: JoinConfig) -> Self {
        Self { config }
    }

    /// Join every configured region and write the result to the configured
    /// output path. The output file is only touched after all regions have
    /// been processed successfully.
    pub fn run(&self) -> Result<()> {
        let document = self.join()?;
        write_document(&document, &self.config.output_path)
    }

    /// Build the output document in memory without writing it.
    pub fn join(&self) -> Result<OutputDocument> {
        let mut document = OutputDocument::new();
        for &region in &self.config.regions {
            let rows = self.join_region(region)?;
            debug!("Joined {} states for region {}", rows.len(), region);
            document.insert(region.as_str().to_string(), rows);
        }
        Ok(document)
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Read all metric files for `region` and build its rows.
    ///
    /// A state whose record is still incomplete after every file has been
    /// read gets a warning naming its partial record, then fails the run
    /// with [`JoinError::MissingMetric`] on the first absent column. Partial
    /// rows are never emitted; a short row would silently shift the fixed
    /// column positions downstream consumers index into.
    fn join_region(&self, region: Region) -> Result<Vec<StateRow>> {
        let mut joined: IndexMap<String, MetricRecord> = IndexMap::new();

        for &metric in &self.config.metrics {
            let path = self.config.metric_path(region, metric);
            for (state, value) in read_metric_file(&path)? {
                joined.entry(state).or_default().set(metric, value);
            }
        }

        let mut rows: Vec<StateRow> = Vec::with_capacity(joined.len());
        for (state, record) in &joined {
            if record.populated() != self.config.metrics.len() {
                warn!("bad data for {state}: {}", record.summary());
            }

            let mut values: Vec<f64> = Vec::with_capacity(self.config.metrics.len());
            for &metric in &self.config.metrics {
                let value = record.get(metric).ok_or_else(|| JoinError::MissingMetric {
                    region,
                    state: state.clone(),
                    metric,
                })?;
                values.push(value);
            }

            rows.push(StateRow {
                state: state.clone(),
                values,
            });
        }

        Ok(rows)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
