//! Core types for the performance report library
//!
//! A [`Document`] is the fully computed comparison: one [`Section`] per test
//! that has both a baseline and an optimized run, each holding one
//! [`DiffRow`] per metric column.

use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while loading or writing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Input file not found: {0:?}")]
    InputNotFound(PathBuf),

    #[error("Input has no header row")]
    MissingHeader,

    #[error("Optimized variant suffix must not be empty")]
    EmptySuffix,

    #[error("Line {line}: invalid value {value:?} for metric '{metric}' of test '{test}'")]
    ValueParseError {
        test: String,
        metric: String,
        value: String,
        line: u64,
    },

    #[error("Line {line}: test '{test}' has {found} values but the header declares {expected} metrics")]
    RowShapeError {
        test: String,
        expected: usize,
        found: usize,
        line: u64,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Comparison of one metric between the baseline and optimized runs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffRow {
    /// Metric (column) name from the CSV header
    pub metric: String,
    /// Value measured without the optimization
    pub baseline: i64,
    /// Value measured with the optimization
    pub optimized: i64,
    /// Relative change in percent, see [`percent_diff`](crate::percent_diff)
    #[serde(serialize_with = "serialize_percent")]
    pub percent_diff: f64,
}

// Non-finite diffs (zero baseline) are written as "inf" / "-inf" / "NaN"
// strings, since JSON numbers cannot represent them.
fn serialize_percent<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

impl DiffRow {
    /// Diff as shown in reports, e.g. `-20.00%`
    pub fn formatted_diff(&self) -> String {
        format!("{:.2}%", self.percent_diff)
    }
}

/// All metric comparisons for a single test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Baseline test name (without the optimization suffix)
    pub test_name: String,
    /// One row per metric, in header order
    pub rows: Vec<DiffRow>,
}

/// A complete performance report, independent of output format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    /// Sections in first-seen order of the baseline tests
    pub sections: Vec<Section>,
    /// Baseline tests left out because no optimized run was recorded
    pub unpaired: Vec<String>,
}

impl Document {
    /// Look up the section for a test by its baseline name
    pub fn section(&self, test_name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.test_name == test_name)
    }
}
