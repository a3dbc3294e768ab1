use crate::error::{Result, ScanError};
use std::path::PathBuf;

/// Default similarity threshold, tuned for sensitivity on short functions.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;

/// Default directory for generated HTML reports.
pub const DEFAULT_REPORT_DIR: &str = "reports";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub similarity_threshold: f64,
    pub report_dir: PathBuf,
    pub verbose: bool,
}

impl ScanConfig {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is outside (0, 1] or the extension
    /// list is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.similarity_threshold.is_finite()
            || self.similarity_threshold <= 0.0
            || self.similarity_threshold > 1.0
        {
            return Err(ScanError::Config(format!(
                "similarity threshold must be in (0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.extensions.is_empty() {
            return Err(ScanError::Config(
                "at least one file extension is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true if the file name carries one of the configured
    /// extensions. A leading dot on the configured value is accepted.
    #[must_use]
    pub fn matches_extension(&self, path: &std::path::Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .map(|e| e.strip_prefix('.').unwrap_or(e))
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: vec!["py".to_string()],
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            verbose: false,
        }
    }
}
