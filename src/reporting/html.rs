// src/reporting/html.rs
//! Static HTML report, one table per duplicate pair. Snippets are embedded
//! through handlebars `{{...}}` expansion, so markup-significant characters
//! in scanned source arrive escaped.

use crate::error::{Result, ScanError};
use crate::types::{DuplicatePair, ScanReport, SnippetLoc};
use chrono::Local;
use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const TEMPLATE: &str = include_str!("report.hbs");
const TEMPLATE_NAME: &str = "duplicate_report";

#[derive(Serialize)]
struct PairView {
    path: String,
    first_line: String,
    second_line: String,
    first_text: String,
    second_text: String,
    percent: String,
}

#[derive(Serialize)]
struct ReportView {
    generated: String,
    total: usize,
    pairs: Vec<PairView>,
}

/// Renders the report and writes it to
/// `<report_dir>/duplicate_report_<YYYYMMDD_HHMMSS>.html`, creating the
/// directory if needed. Existing reports are never touched; timestamped
/// files accumulate across runs.
///
/// # Errors
/// Returns a report error if the directory cannot be created or the file
/// cannot be written, and a template error if rendering fails.
pub fn write_report(report: &ScanReport, report_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(report_dir).map_err(|source| ScanError::Report {
        source,
        path: report_dir.to_path_buf(),
    })?;

    let now = Local::now();
    let file_name = format!("duplicate_report_{}.html", now.format("%Y%m%d_%H%M%S"));
    let path = report_dir.join(file_name);

    let html = render(report, &now.format("%Y-%m-%d %H:%M:%S").to_string())?;
    fs::write(&path, html).map_err(|source| ScanError::Report {
        source,
        path: path.clone(),
    })?;

    Ok(path)
}

/// Renders the report document without touching the filesystem.
///
/// # Errors
/// Returns a template error if registration or rendering fails.
pub fn render(report: &ScanReport, generated: &str) -> Result<String> {
    let mut registry = Handlebars::new();
    registry
        .register_template_string(TEMPLATE_NAME, TEMPLATE)
        .map_err(|err| ScanError::Template(err.to_string()))?;

    let view = ReportView {
        generated: generated.to_string(),
        total: report.pair_count(),
        pairs: report.pairs.iter().map(pair_view).collect(),
    };

    registry
        .render(TEMPLATE_NAME, &view)
        .map_err(|err| ScanError::Template(err.to_string()))
}

fn pair_view(pair: &DuplicatePair) -> PairView {
    PairView {
        path: pair.path.display().to_string(),
        first_line: line_label(&pair.first),
        second_line: line_label(&pair.second),
        first_text: pair.first.text.clone(),
        second_text: pair.second.text.clone(),
        percent: pair.percent(),
    }
}

fn line_label(snippet: &SnippetLoc) -> String {
    snippet
        .line
        .map_or_else(|| "Unknown".to_string(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DuplicatePair, ScanReport, SnippetLoc};
    use std::path::PathBuf;

    fn sample_report(text: &str) -> ScanReport {
        ScanReport {
            pairs: vec![DuplicatePair {
                path: PathBuf::from("routes.py"),
                first: SnippetLoc {
                    text: text.to_string(),
                    line: Some(3),
                },
                second: SnippetLoc {
                    text: text.to_string(),
                    line: None,
                },
                score: 0.965,
            }],
            files_scanned: 1,
            files_skipped: 0,
            duration_ms: 5,
        }
    }

    #[test]
    fn snippets_are_escaped() {
        let html = render(&sample_report("def f():\n    x = \"<b>\"\n"), "now").unwrap();
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("x = \"<b>\""));
    }

    #[test]
    fn unresolved_lines_render_as_unknown() {
        let html = render(&sample_report("def f():\n    pass\n"), "now").unwrap();
        assert!(html.contains("Line 3:"));
        assert!(html.contains("Line Unknown:"));
    }

    #[test]
    fn percentage_has_two_decimals() {
        let html = render(&sample_report("def f():\n    pass\n"), "now").unwrap();
        assert!(html.contains("96.50%"));
    }
}
