//! Plain-text report renderer (ASCII tables)

use crate::types::{Document, Section};

const HEADERS: [&str; 4] = ["Metric", "Nonopt", "Opt", "Diff"];

/// Render a document as plain-text tables, one per section
pub fn render(document: &Document) -> String {
    let mut out = String::new();

    out.push_str(&document.title);
    out.push('\n');
    out.push_str(&"=".repeat(document.title.chars().count()));
    out.push('\n');

    for section in &document.sections {
        out.push('\n');
        render_section(&mut out, section);
    }

    out
}

fn render_section(out: &mut String, section: &Section) {
    let cells: Vec<[String; 4]> = section
        .rows
        .iter()
        .map(|row| {
            [
                row.metric.clone(),
                row.baseline.to_string(),
                row.optimized.to_string(),
                row.formatted_diff(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.len());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = separator_line(&widths);

    out.push_str(&section.test_name);
    out.push('\n');
    out.push_str(&separator);
    out.push_str(&table_line(&HEADERS.map(String::from), &widths));
    out.push_str(&separator);
    for line in &cells {
        out.push_str(&table_line(line, &widths));
    }
    out.push_str(&separator);
}

fn separator_line(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

// Metric names are left-aligned, numbers right-aligned
fn table_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            line.push_str(&format!(" {:<width$} |", cell, width = *width));
        } else {
            line.push_str(&format!(" {:>width$} |", cell, width = *width));
        }
    }
    line.push('\n');
    line
}
