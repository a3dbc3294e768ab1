// src/discovery.rs
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Lists the files under the configured root that carry one of the
/// configured extensions, sorted for deterministic scan order.
///
/// # Errors
/// Returns a configuration error if the root is missing or not a directory.
/// Individual walk errors (unreadable subdirectories, broken links) are
/// counted and reported as warnings, not failures.
pub fn discover(config: &ScanConfig) -> Result<Vec<PathBuf>> {
    if !config.root.is_dir() {
        return Err(ScanError::Config(format!(
            "scan root {} is not a directory",
            config.root.display()
        )));
    }

    let mut paths = Vec::new();
    let mut errors = 0usize;

    for item in WalkDir::new(&config.root).follow_links(false) {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && config.matches_extension(entry.path()) {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 && config.verbose {
        eprintln!("WARN: Encountered {errors} errors during file walk");
    }

    paths.sort();
    Ok(paths)
}
