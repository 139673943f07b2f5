//! Error handling for LAS processing operations.
//!
//! The parser itself never fails on malformed input; these errors cover the
//! layers around it: file access, acceptance checks before ingest,
//! configuration and command execution.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported file {path}: {reason}")]
    UnsupportedFile { path: PathBuf, reason: String },

    #[error("File {path} is {size} bytes, exceeding the {limit} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("LAS file rejected: {}", reasons.join("; "))]
    Rejected { reasons: Vec<String> },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl LasError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unsupported file error
    pub fn unsupported_file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnsupportedFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Reasons attached to a rejected file, empty for every other variant
    pub fn rejection_reasons(&self) -> &[String] {
        match self {
            Self::Rejected { reasons } => reasons,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, LasError>;
