// src/engine.rs
//! Orchestrates one scan: list files, then per file preprocess, extract and
//! search for duplicate pairs. Single-threaded and synchronous; one file's
//! content is held in memory at a time.

use crate::config::ScanConfig;
use crate::discovery;
use crate::duplicates;
use crate::error::Result;
use crate::extract;
use crate::preprocess;
use crate::types::{ScanReport, SourceFile};
use std::fs;
use std::time::Instant;

/// Runs the full duplicate scan described by `config`.
///
/// # Errors
/// Returns an error for invalid configuration or an unusable scan root.
/// Per-file read failures are recoverable: the file is skipped with a
/// warning and counted in `files_skipped`.
pub fn scan(config: &ScanConfig) -> Result<ScanReport> {
    config.validate()?;

    let started = Instant::now();
    let files = discovery::discover(config)?;
    let mut report = ScanReport::default();

    for path in files {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("WARN: skipping {}: {err}", path.display());
                report.files_skipped += 1;
                continue;
            }
        };

        if config.verbose {
            eprintln!("Scanning {}", path.display());
        }

        let source = SourceFile { path, content };
        let preprocessed = preprocess::preprocess(&source.content);
        let functions = extract::extract_functions(&preprocessed);
        let pairs =
            duplicates::find_duplicates_in_file(&source, &functions, config.similarity_threshold);

        report.pairs.extend(pairs);
        report.files_scanned += 1;
    }

    report.duration_ms = started.elapsed().as_millis();
    Ok(report)
}
