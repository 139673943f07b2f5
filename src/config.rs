//! Configuration management and validation.
//!
//! Provides the processing parameters for batch ingest: concurrency, batch
//! sizing, upload limits and acceptance strictness.

use crate::constants::{DEFAULT_BATCH_SIZE, DEFAULT_EXTENSIONS, DEFAULT_MAX_FILE_SIZE_BYTES};
use crate::error::{LasError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Global configuration for LAS processing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LasConfig {
    /// Number of files parsed concurrently
    pub workers: usize,

    /// Depth records per persistence batch
    pub batch_size: usize,

    /// Largest file accepted, in bytes
    pub max_file_size_bytes: u64,

    /// Accepted file extensions, compared case-insensitively
    pub extensions: Vec<String>,

    /// Descend into subdirectories when the input is a directory
    pub recursive: bool,

    /// Require increasing depths and a positive step before accepting a file
    pub strict_validation: bool,
}

impl Default for LasConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            batch_size: DEFAULT_BATCH_SIZE,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            recursive: true,
            strict_validation: true,
        }
    }
}

impl LasConfig {
    /// Load configuration overrides from a JSON file
    ///
    /// Keys missing from the file keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LasError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: LasConfig = serde_json::from_str(&content)?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);

        config.validate()?;
        Ok(config)
    }

    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Create configuration with custom batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the upload size limit in megabytes, saturating at `u64::MAX` bytes
    pub fn with_max_file_size_mb(mut self, megabytes: u64) -> Self {
        self.max_file_size_bytes = megabytes.saturating_mul(BYTES_PER_MB);
        self
    }

    /// Set the upload size limit in megabytes, rejecting values that overflow
    pub fn try_with_max_file_size_mb(self, megabytes: u64) -> Result<Self> {
        if megabytes.checked_mul(BYTES_PER_MB).is_none() {
            return Err(LasError::configuration(format!(
                "Maximum file size of {} MB is too large",
                megabytes
            )));
        }
        Ok(self.with_max_file_size_mb(megabytes))
    }

    /// Replace the accepted extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Only look at files directly inside the input directory
    pub fn without_recursion(mut self) -> Self {
        self.recursive = false;
        self
    }

    /// Accept upward logs and negative steps
    pub fn with_lenient_validation(mut self) -> Self {
        self.strict_validation = false;
        self
    }

    /// Check the configuration for values that would stall processing
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(LasError::configuration(
                "Number of workers must be greater than 0",
            ));
        }

        if self.batch_size == 0 {
            return Err(LasError::configuration(
                "Batch size must be greater than 0",
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(LasError::configuration(
                "Maximum file size must be greater than 0",
            ));
        }

        if self.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(LasError::configuration(
                "At least one file extension must be accepted",
            ));
        }

        Ok(())
    }

    /// Whether a path carries one of the accepted extensions
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }
}
