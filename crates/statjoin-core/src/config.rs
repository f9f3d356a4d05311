use std::path::{Path, PathBuf};

use crate::models::{Metric, Region};

/// Everything a join run needs to know: which regions to process, which
/// metrics to read (in output column order), where the input tree lives, and
/// where the result is written.
///
/// Production behavior is fixed; [`JoinConfig::default`] carries the full
/// hardcoded enumeration. Tests substitute their own paths and subsets.
#[derive(Debug, Clone)]
pub struct JoinConfig {
    /// Regions to process, in output order.
    pub regions: Vec<Region>,
    /// Metrics to read per region, in output column order.
    pub metrics: Vec<Metric>,
    /// Root of the input tree (`{data_dir}/{region}/{metric}.csv`).
    pub data_dir: PathBuf,
    /// Where the joined document is written.
    pub output_path: PathBuf,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            regions: vec![Region::Eu, Region::Us],
            metrics: Metric::ALL.to_vec(),
            data_dir: PathBuf::from("data"),
            output_path: PathBuf::from("data.json"),
        }
    }
}

impl JoinConfig {
    /// Like `Default`, but rooted at `base_dir` instead of the working
    /// directory (used for testing).
    pub fn rooted_at(base_dir: &Path) -> Self {
        Self {
            data_dir: base_dir.join("data"),
            output_path: base_dir.join("data.json"),
            ..Self::default()
        }
    }

    /// Path of the CSV file holding `metric` values for `region`.
    pub fn metric_path(&self, region: Region, metric: Metric) -> PathBuf {
        self.data_dir
            .join(region.as_str())
            .join(format!("{}.csv", metric.as_str()))
    }
}
