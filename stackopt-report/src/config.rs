//! Report configuration types
//!
//! The library only needs to know how optimized variants are named and what to
//! call the document. Paths, format selection from files and everything else
//! user-facing are handled by the application layer.

use crate::{DEFAULT_TITLE, OPTIMIZED_VARIANT_SUFFIX};

/// Configuration for the report generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Name suffix identifying the optimized variant of a test
    pub suffix: String,

    /// Document title (HTML `<title>` and TXT banner)
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            suffix: OPTIMIZED_VARIANT_SUFFIX.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the optimized-variant suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Builder method: set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// True if `name` denotes an optimized variant rather than a baseline
    pub fn is_optimized_variant(&self, name: &str) -> bool {
        name.contains(self.suffix.as_str())
    }

    /// Name of the optimized counterpart of a baseline test
    pub fn optimized_name(&self, base: &str) -> String {
        format!("{}{}", base, self.suffix)
    }
}

/// Rendering format for a [`Document`](crate::Document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Txt,
}
