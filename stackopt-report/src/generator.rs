//! Main report generator API
//!
//! [`ReportGenerator`] owns the loaded performance table and turns it into a
//! [`Document`]: load → pair → compute. Rendering and writing are done on the
//! document (see [`crate::report`]).

use crate::config::ReportConfig;
use crate::diff::percent_diff;
use crate::table::MetricTable;
use crate::types::{DiffRow, Document, ReportError, Result, Section};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Pairs baseline and optimized test runs and computes their differences
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: ReportConfig,
    table: MetricTable,
}

impl ReportGenerator {
    /// Load a performance CSV file
    ///
    /// # Arguments
    /// * `path` - Path to the CSV file
    /// * `config` - Report configuration
    ///
    /// # Returns
    /// * `Result<ReportGenerator>` - Err([`ReportError::InputNotFound`]) if the
    ///   file does not exist, or any load error of [`Self::from_reader`]
    ///
    /// # Example
    /// ```no_run
    /// use stackopt_report::{ReportConfig, ReportGenerator};
    /// use std::path::Path;
    ///
    /// let generator = ReportGenerator::from_path(Path::new("perf.csv"), ReportConfig::new()).unwrap();
    /// println!("{} metrics", generator.metrics().len());
    /// ```
    pub fn from_path(path: &Path, config: ReportConfig) -> Result<Self> {
        log::info!("Loading performance data: {:?}", path);

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ReportError::InputNotFound(path.to_path_buf()),
            _ => ReportError::Io(e),
        })?;

        Self::from_reader(file, config)
    }

    /// Load performance data from any CSV source
    pub fn from_reader<R: Read>(reader: R, config: ReportConfig) -> Result<Self> {
        if config.suffix.is_empty() {
            return Err(ReportError::EmptySuffix);
        }

        let table = MetricTable::load(reader, &config)?;
        Ok(Self { config, table })
    }

    /// Metric names in header order
    pub fn metrics(&self) -> &[String] {
        &self.table.metrics
    }

    /// Baseline test names in the order they first appear in the input
    pub fn base_order(&self) -> &[String] {
        &self.table.base_order
    }

    /// Values recorded for a test (baseline or optimized name)
    pub fn row(&self, test_name: &str) -> Option<&[i64]> {
        self.table.rows.get(test_name).map(Vec::as_slice)
    }

    /// Configuration the data was loaded with
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Build the comparison document
    ///
    /// One section per baseline test that has an optimized counterpart, in
    /// first-seen order. Metrics and values are paired by column index.
    pub fn generate(&self) -> Document {
        let mut sections = Vec::new();
        let mut unpaired = Vec::new();

        for base in &self.table.base_order {
            let optimized_name = self.config.optimized_name(base);

            let (Some(baseline), Some(optimized)) =
                (self.row(base), self.row(&optimized_name))
            else {
                log::warn!("Skipping '{}': no '{}' run recorded", base, optimized_name);
                unpaired.push(base.clone());
                continue;
            };

            let rows: Vec<DiffRow> = self
                .table
                .metrics
                .iter()
                .zip(baseline.iter().zip(optimized))
                .map(|(metric, (&baseline, &optimized))| DiffRow {
                    metric: metric.clone(),
                    baseline,
                    optimized,
                    percent_diff: percent_diff(baseline, optimized),
                })
                .collect();

            log::debug!("Section '{}': {} metrics", base, rows.len());
            sections.push(Section {
                test_name: base.clone(),
                rows,
            });
        }

        log::info!(
            "Generated {} sections ({} tests without an optimized run)",
            sections.len(),
            unpaired.len()
        );

        Document {
            title: self.config.title.clone(),
            sections,
            unpaired,
        }
    }
}
