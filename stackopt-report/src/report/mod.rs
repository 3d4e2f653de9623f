//! Report rendering and output
//!
//! Renders a [`Document`] as HTML (the default) or as plain-text tables, and
//! writes the result in one step so an aborted run never leaves a partial
//! report behind.

pub mod html;
pub mod txt;

use crate::config::OutputFormat;
use crate::types::{Document, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

impl Document {
    /// Render the whole document in the given format
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Html => html::render(self),
            OutputFormat::Txt => txt::render(self),
        }
    }

    /// Render and write the document, replacing `path` if it exists
    pub fn write_to(&self, path: &Path, format: OutputFormat) -> Result<()> {
        write_atomic(path, &self.render(format))
    }
}

/// Write `contents` to a temporary file next to `path`, then rename it over `path`
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropped (and removed) on any early return
    let mut tmp = NamedTempFile::new_in(dir)?;
    log::debug!("Writing {} bytes via {:?}", contents.len(), tmp.path());

    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    log::info!("Report written: {:?}", path);
    Ok(())
}
