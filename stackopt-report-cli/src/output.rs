//! Report output: HTML and TXT come from the library renderers, JSON is a
//! serde export of the computed document.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stackopt_report::{report::write_atomic, Document, OutputFormat};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Txt,
    Json,
}

/// Render a document in the requested format
pub fn render(document: &Document, format: ReportFormat) -> Result<String> {
    let rendered = match format {
        ReportFormat::Html => document.render(OutputFormat::Html),
        ReportFormat::Txt => document.render(OutputFormat::Txt),
        ReportFormat::Json => serde_json::to_string_pretty(document)
            .context("Failed to serialize report as JSON")?,
    };
    Ok(rendered)
}

/// Render and write a document, replacing `path` if it exists
pub fn write_report(document: &Document, path: &Path, format: ReportFormat) -> Result<()> {
    let rendered = render(document, format)?;
    write_atomic(path, &rendered)
        .with_context(|| format!("Failed to write report: {:?}", path))
}
