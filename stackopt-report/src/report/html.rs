//! HTML report renderer

use crate::types::{Document, Section};
use std::fmt::Write;

const STYLE: &str = r#"    * {
      font-family: monospace;
    }

    table, th, td {
      border: 1px solid black;
      border-collapse: collapse;
      font-size: 1.2em;
      padding: 4px;
    }
"#;

/// Render a document as a standalone HTML page
pub fn render(document: &Document) -> String {
    let mut h = String::new();

    h.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(h, "  <title>{}</title>", esc(&document.title));
    h.push_str("  <style>\n");
    h.push_str(STYLE);
    h.push_str("  </style>\n</head>\n<body>\n");

    for section in &document.sections {
        render_section(&mut h, section);
    }

    h.push_str("</body></html>\n");
    h
}

fn render_section(h: &mut String, section: &Section) {
    let _ = writeln!(h, "<h1>{}</h1>", esc(&section.test_name));
    h.push_str(
        "<table><thead><tr><td>Metric</td><td>Nonopt</td><td>Opt</td><td>Diff</td></tr></thead><tbody>\n",
    );

    for row in &section.rows {
        let _ = writeln!(
            h,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            esc(&row.metric),
            row.baseline,
            row.optimized,
            row.formatted_diff()
        );
    }

    h.push_str("</tbody></table>\n");
}

fn esc(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
