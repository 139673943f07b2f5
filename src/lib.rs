//! LAS Processor Library
//!
//! A Rust library for reading Log ASCII Standard (LAS) well-log files into
//! structured well metadata and depth-indexed curve data.
//!
//! This library provides tools for:
//! - Lenient, single-pass parsing of LAS text into sections, curves and rows
//! - Normalizing well information into typed metadata
//! - Acceptance checks and depth-record batching before persistence
//! - Depth-range queries and per-curve statistics over parsed rows
//! - Concurrent processing of whole directories of LAS files

pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod models;
pub mod parser;
pub mod processor;
pub mod query;
pub mod records;
pub mod validation;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::LasConfig;
pub use error::{LasError, Result};
pub use metadata::WellMetadata;
pub use models::{CurveDefinition, DataRow, ParseResult, WellInfoEntry};
pub use parser::{ParseStats, parse_las, parse_las_with_stats};
pub use processor::{IngestSink, LasProcessor, LoggingSink, MemorySink, ProcessingStats};
