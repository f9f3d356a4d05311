use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use indexmap::IndexMap;

/// A geographic grouping whose states are joined together.
///
/// Each region owns one input subdirectory (`data/{region}/`) and one key in
/// the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// European countries.
    Eu,
    /// US states.
    Us,
}

impl Region {
    /// The identifier used in input paths and output keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Eu => "eu",
            Region::Us => "us",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named numeric attribute collected per state.
///
/// Each metric owns one input file (`{metric}.csv`) per region and one column
/// in the output rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Gross domestic product.
    Gdp,
    /// Land area.
    Land,
    /// Population.
    Pop,
    /// Human development index.
    Hdi,
}

impl Metric {
    /// Every metric, in the fixed column order used by output rows.
    pub const ALL: [Metric; 4] = [Metric::Gdp, Metric::Land, Metric::Pop, Metric::Hdi];

    /// The identifier used in input filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Gdp => "gdp",
            Metric::Land => "land",
            Metric::Pop => "pop",
            Metric::Hdi => "hdi",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── MetricRecord ──────────────────────────────────────────────────────────────

/// The values collected for one state while its region's metric files are
/// being read.
///
/// One optional slot per metric; a slot stays `None` until the state shows up
/// in that metric's file. A record is complete when every configured metric
/// has been populated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricRecord {
    gdp: Option<f64>,
    land: Option<f64>,
    pop: Option<f64>,
    hdi: Option<f64>,
}

impl MetricRecord {
    /// Store `value` in the slot for `metric`, replacing any earlier value.
    pub fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Gdp => self.gdp = Some(value),
            Metric::Land => self.land = Some(value),
            Metric::Pop => self.pop = Some(value),
            Metric::Hdi => self.hdi = Some(value),
        }
    }

    /// The value stored for `metric`, if any.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Gdp => self.gdp,
            Metric::Land => self.land,
            Metric::Pop => self.pop,
            Metric::Hdi => self.hdi,
        }
    }

    /// Number of populated slots.
    pub fn populated(&self) -> usize {
        Metric::ALL
            .iter()
            .filter(|m| self.get(**m).is_some())
            .count()
    }

    /// Human-readable `metric=value` listing of the populated slots, used in
    /// incomplete-record diagnostics.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = Metric::ALL
            .iter()
            .filter_map(|m| self.get(*m).map(|v| format!("{m}={v}")))
            .collect();
        parts.join(", ")
    }
}

// ── StateRow ──────────────────────────────────────────────────────────────────

/// One state's finished output row: the state name followed by its metric
/// values in fixed column order.
///
/// Serializes as a heterogeneous JSON array, e.g.
/// `["France",2900.0,551695.0,67000000.0,0.903]`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateRow {
    /// The state/province name, unique within its region.
    pub state: String,
    /// Metric values in the configured metric order.
    pub values: Vec<f64>,
}

impl Serialize for StateRow {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(1 + self.values.len()))?;
        seq.serialize_element(&self.state)?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// The full join result: region key → rows, in configured region order.
///
/// `IndexMap` keeps the region insertion order stable through serialization.
pub type OutputDocument = IndexMap<String, Vec<StateRow>>;

// ── Tests ─────────────────────────────────────────────────────────────────────
