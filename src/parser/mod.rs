//! LAS parser for well-log files
//!
//! Converts the text of a Log ASCII Standard file into well information, a
//! curve catalog and depth-indexed data rows. The parser is lenient:
//! a line it cannot understand contributes nothing and parsing carries on, so
//! it never returns an error. Callers decide whether a degenerate result is
//! acceptable (see [`crate::validation`]).
//!
//! ## Architecture
//!
//! - [`section`] - Section header detection with keyword priority
//! - [`lines`] - Version, well and curve line classifiers
//! - [`data`] - Data line tokenizer and lenient number parsing
//! - [`scanner`] - The single-pass fold tying the pieces together
//! - [`stats`] - Counters describing what was skipped
//!
//! ## Usage
//!
//! ```rust
//! use las_processor::parser::parse_las;
//!
//! let result = parse_las("~CURVE\nDEPT.ft : Depth\n~ASCII\n100.0\n");
//! assert_eq!(result.curves.len(), 1);
//! assert_eq!(result.data.len(), 1);
//! ```

pub mod data;
pub mod lines;
pub mod scanner;
pub mod section;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use scanner::ParseState;
pub use section::Section;
pub use stats::ParseStats;

use crate::models::ParseResult;
use tracing::debug;

/// Parse result together with the statistics of the run
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub result: ParseResult,
    pub stats: ParseStats,
}

/// Parse the full text of a LAS file
pub fn parse_las(content: &str) -> ParseResult {
    parse_las_with_stats(content).result
}

/// Parse the full text of a LAS file, keeping the parse statistics
pub fn parse_las_with_stats(content: &str) -> ParseOutcome {
    let (result, stats) = content
        .lines()
        .fold(ParseState::new(), ParseState::step)
        .finish();

    debug!(
        "Parsed LAS content: version={:?}, {} well entries, {} curves, {} rows, {} lines skipped",
        result.version,
        result.well_info.len(),
        result.curves.len(),
        result.data.len(),
        stats.lines_skipped
    );

    ParseOutcome { result, stats }
}
