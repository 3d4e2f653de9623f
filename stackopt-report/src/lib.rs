//! Stack-Optimization Performance Report Library
//!
//! Compares performance counters of baseline test runs against the same tests
//! run with the stack optimization enabled, and renders the comparison.
//!
//! # Architecture
//!
//! The library is a straight pipeline with no shared state:
//! - Loads a CSV table of performance counters (one row per test run)
//! - Pairs each baseline test with its `$STACKOPT` variant by name
//! - Computes the percent difference of every metric
//! - Renders the resulting [`Document`] as HTML or plain text
//!
//! Command-line handling, configuration files and JSON export live in the
//! application layer (stackopt-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use stackopt_report::{OutputFormat, ReportConfig, ReportGenerator};
//! use std::path::Path;
//!
//! let config = ReportConfig::new().with_title("Nightly run");
//! let generator = ReportGenerator::from_path(Path::new("perf.csv"), config).unwrap();
//!
//! let document = generator.generate();
//! for section in &document.sections {
//!     println!("{}: {} metrics", section.test_name, section.rows.len());
//! }
//!
//! document
//!     .write_to(Path::new("report.html"), OutputFormat::Html)
//!     .unwrap();
//! ```

// Public modules
pub mod config;
pub mod diff;
pub mod generator;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use config::{OutputFormat, ReportConfig};
pub use diff::percent_diff;
pub use generator::ReportGenerator;
pub use types::{DiffRow, Document, ReportError, Result, Section};

// Internal modules (not exposed in public API)
mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name suffix marking the stack-optimized variant of a test
pub const OPTIMIZED_VARIANT_SUFFIX: &str = "$STACKOPT";

/// Input file read when no other path is configured
pub const DEFAULT_INPUT_PATH: &str = "perf.csv";

/// Output file written when no other path is configured
pub const DEFAULT_OUTPUT_PATH: &str = "report.html";

/// Title of the generated document
pub const DEFAULT_TITLE: &str = "Performance report";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: an input with only a header yields an empty document
        let generator =
            ReportGenerator::from_reader(",cycles\n".as_bytes(), ReportConfig::new()).unwrap();
        let document = generator.generate();
        assert!(document.sections.is_empty());
        assert_eq!(document.title, DEFAULT_TITLE);
    }
}
