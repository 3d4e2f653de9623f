//! Performance counter table loaded from CSV
//!
//! Layout: the first row is the header (`,metric1,metric2,...`, first cell
//! ignored), every further row is `test_name,value1,value2,...`. Values are
//! aligned with the header by position, so every row must carry exactly one
//! value per metric. Surrounding whitespace is trimmed from every cell, test
//! names included.

use crate::config::ReportConfig;
use crate::types::{ReportError, Result};
use std::collections::HashMap;
use std::io::Read;

/// In-memory table of all test runs
#[derive(Debug, Clone, Default)]
pub(crate) struct MetricTable {
    /// Metric names in header order
    pub metrics: Vec<String>,
    /// Test name -> values (one per metric)
    pub rows: HashMap<String, Vec<i64>>,
    /// Baseline test names in first-seen order
    pub base_order: Vec<String>,
}

impl MetricTable {
    /// Read the whole table from a CSV source
    pub fn load<R: Read>(reader: R, config: &ReportConfig) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let header = records.next().ok_or(ReportError::MissingHeader)??;
        let metrics: Vec<String> = header.iter().skip(1).map(|m| m.trim().to_string()).collect();
        log::debug!("Header declares {} metrics: {:?}", metrics.len(), metrics);

        let mut table = MetricTable {
            metrics,
            ..Default::default()
        };

        for record in records {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let test_name = record.get(0).unwrap_or_default().trim().to_string();
            let values = table.parse_values(&test_name, &record, line)?;

            if !config.is_optimized_variant(&test_name) && !table.rows.contains_key(&test_name) {
                table.base_order.push(test_name.clone());
            }

            if table.rows.insert(test_name.clone(), values).is_some() {
                log::warn!("Line {}: duplicate test '{}', keeping the later row", line, test_name);
            }
        }

        log::debug!(
            "Loaded {} test rows ({} baseline tests)",
            table.rows.len(),
            table.base_order.len()
        );

        Ok(table)
    }

    fn parse_values(
        &self,
        test_name: &str,
        record: &csv::StringRecord,
        line: u64,
    ) -> Result<Vec<i64>> {
        let found = record.len().saturating_sub(1);
        if found != self.metrics.len() {
            return Err(ReportError::RowShapeError {
                test: test_name.to_string(),
                expected: self.metrics.len(),
                found,
                line,
            });
        }

        record
            .iter()
            .skip(1)
            .zip(&self.metrics)
            .map(|(cell, metric)| {
                cell.trim().parse::<i64>().map_err(|_| ReportError::ValueParseError {
                    test: test_name.to_string(),
                    metric: metric.clone(),
                    value: cell.to_string(),
                    line,
                })
            })
            .collect()
    }
}
