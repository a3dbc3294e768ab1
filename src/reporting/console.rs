// src/reporting/console.rs
use crate::types::{DuplicatePair, ScanReport, SnippetLoc};
use colored::Colorize;
use std::path::Path;

/// Prints every duplicate pair as a two-column table with the similarity
/// percentage in the header row, followed by a count line.
pub fn print_report(report: &ScanReport) {
    if !report.has_duplicates() {
        println!("{}", "No duplicates found.".green().bold());
        return;
    }

    rule("Duplicates Found");

    for pair in &report.pairs {
        print_pair(pair);
    }

    println!(
        "{} {}",
        "Total duplicate pairs detected:".bold(),
        report.pair_count().to_string().green().bold()
    );
}

/// Prints the end-of-run summary. The HTML report path is shown when one
/// was written.
pub fn print_summary(report: &ScanReport, report_path: Option<&Path>) {
    rule("Scan Complete");

    println!(
        "Scanned {} files ({} skipped) in {}ms.",
        report.files_scanned, report.files_skipped, report.duration_ms
    );

    if let Some(path) = report_path {
        println!(
            "{} {}",
            "HTML report saved to:".cyan().bold(),
            path.display()
        );
    }
}

fn print_pair(pair: &DuplicatePair) {
    println!("{}", format!("File: {}", pair.path.display()).cyan().bold());

    let mut rows = pair_rows(pair).into_iter();
    if let Some(header) = rows.next() {
        println!("  {}", header.bold());
    }
    for row in rows {
        println!("  {}", row.dimmed());
    }
    println!();
}

/// Lays both snippets out as aligned columns. The header row carries the
/// per-function labels and the similarity cell; body rows pair the snippets
/// line by line, padding the shorter one.
fn pair_rows(pair: &DuplicatePair) -> Vec<String> {
    let left: Vec<&str> = pair.first.text.trim().lines().collect();
    let right: Vec<&str> = pair.second.text.trim().lines().collect();

    let header_left = format!("Function 1 (line {})", line_label(&pair.first));
    let header_right = format!("Function 2 (line {})", line_label(&pair.second));

    let width = left
        .iter()
        .map(|l| l.len())
        .chain([header_left.len()])
        .max()
        .unwrap_or(0);

    let mut rows = vec![format!(
        "{header_left:<width$} | {header_right} | {}",
        pair.percent()
    )];

    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        rows.push(format!("{l:<width$} | {r}"));
    }

    rows
}

fn line_label(snippet: &SnippetLoc) -> String {
    snippet
        .line
        .map_or_else(|| "Unknown".to_string(), |n| n.to_string())
}

fn rule(title: &str) {
    println!("{}", format!("==== {title} ====").blue().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_pair() -> DuplicatePair {
        DuplicatePair {
            path: PathBuf::from("routes.py"),
            first: SnippetLoc {
                text: "def a():\n    return 1\n".to_string(),
                line: Some(3),
            },
            second: SnippetLoc {
                text: "def b():\n    x = 2\n    return x\n".to_string(),
                line: None,
            },
            score: 0.965,
        }
    }

    #[test]
    fn header_row_carries_labels_and_percentage() {
        let rows = pair_rows(&sample_pair());
        assert!(rows[0].contains("Function 1 (line 3)"));
        assert!(rows[0].contains("Function 2 (line Unknown)"));
        assert!(rows[0].contains("96.50%"));
    }

    #[test]
    fn body_rows_cover_the_longer_snippet() {
        let rows = pair_rows(&sample_pair());
        // Header plus one row per line of the longer snippet.
        assert_eq!(rows.len(), 4);
        assert!(rows[3].contains("return x"));
    }

    #[test]
    fn column_separator_stays_aligned() {
        let rows = pair_rows(&sample_pair());
        let sep = rows[0].find(" | ").unwrap();
        assert!(rows.iter().all(|row| row.find(" | ") == Some(sep)));
    }
}
