// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Failed to write report: {source} (path: {path})")]
    Report {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Template error: {0}")]
    Template(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
