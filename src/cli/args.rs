//! Command-line argument definitions for the LAS processor
//!
//! Defines the CLI interface using the clap derive API. Logging flags are
//! global so they can follow any subcommand.

use crate::config::LasConfig;
use crate::constants::DEFAULT_QUERY_LIMIT;
use crate::error::{LasError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the LAS well-log processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "las-processor",
    version,
    about = "Parse, validate and query LAS well-log files",
    long_about = "Reads Log ASCII Standard (LAS) well-log files into well metadata, a curve \
                  catalog and depth-indexed data rows. Files can be inspected one at a time, \
                  processed in bulk for ingest, or queried by depth range and curve."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse one file and print its metadata and curve catalog
    Inspect(InspectArgs),
    /// Validate and batch a file or a directory of files for ingest
    Process(ProcessArgs),
    /// Summary statistics for selected curves
    Stats(StatsArgs),
    /// Rows within a depth range, as JSON
    Query(QueryArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// LAS file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// LAS file or directory containing LAS files
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Number of files processed concurrently
    #[arg(short = 'w', long = "workers", value_name = "COUNT")]
    pub workers: Option<usize>,

    /// Depth records per persistence batch
    #[arg(short = 'b', long = "batch-size", value_name = "ROWS")]
    pub batch_size: Option<usize>,

    /// Largest accepted file in megabytes
    #[arg(long = "max-size-mb", value_name = "MB")]
    pub max_size_mb: Option<u64>,

    /// Accept upward logs and negative steps
    #[arg(long = "no-strict")]
    pub no_strict: bool,

    /// Only process files directly inside the input directory
    #[arg(long = "no-recursive")]
    pub no_recursive: bool,

    /// JSON configuration file; command-line flags take precedence
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format for the run summary
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// LAS file to summarize
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Curves to summarize; every non-depth curve when omitted
    #[arg(long = "curves", value_name = "LIST")]
    pub curves: Option<CurveList>,

    /// Shallowest depth to include
    #[arg(long = "start", value_name = "DEPTH", allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Deepest depth to include
    #[arg(long = "end", value_name = "DEPTH", allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// LAS file to query
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Shallowest depth to include
    #[arg(long = "start", value_name = "DEPTH", allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Deepest depth to include
    #[arg(long = "end", value_name = "DEPTH", allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Curves to keep in each row
    #[arg(long = "curves", value_name = "LIST")]
    pub curves: Option<CurveList>,

    /// Maximum number of rows returned
    #[arg(long = "limit", default_value_t = DEFAULT_QUERY_LIMIT)]
    pub limit: usize,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated curve mnemonics
#[derive(Debug, Clone, PartialEq)]
pub struct CurveList {
    pub curves: Vec<String>,
}

impl FromStr for CurveList {
    type Err = LasError;

    fn from_str(s: &str) -> Result<Self> {
        let curves: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if curves.is_empty() {
            return Err(LasError::configuration("Curve list cannot be empty"));
        }

        Ok(CurveList { curves })
    }
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ProcessArgs {
    /// Build the processing configuration
    ///
    /// Starts from the configuration file when one is given, then applies the
    /// command-line overrides.
    pub fn to_config(&self) -> Result<LasConfig> {
        let mut config = match &self.config_file {
            Some(path) => LasConfig::from_json_file(path)?,
            None => LasConfig::default(),
        };

        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if let Some(batch_size) = self.batch_size {
            config = config.with_batch_size(batch_size);
        }
        if let Some(megabytes) = self.max_size_mb {
            config = config.try_with_max_file_size_mb(megabytes)?;
        }
        if self.no_strict {
            config = config.with_lenient_validation();
        }
        if self.no_recursive {
            config = config.without_recursion();
        }

        config.validate()?;
        Ok(config)
    }
}

impl StatsArgs {
    /// Validate the depth range
    pub fn validate(&self) -> Result<()> {
        validate_range(self.start, self.end)
    }
}

impl QueryArgs {
    /// Validate the depth range and row limit
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(LasError::configuration("Limit must be greater than 0"));
        }
        validate_range(self.start, self.end)
    }
}

fn validate_range(start: Option<f64>, end: Option<f64>) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(LasError::configuration(format!(
                "Start depth {} is greater than end depth {}",
                start, end
            )));
        }
    }
    Ok(())
}
