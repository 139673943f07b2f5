//! Parsing statistics for LAS processing
//!
//! The parser never fails on a bad line, so these counters are the only
//! record of how much of a file was actually understood.

use serde::{Deserialize, Serialize};

use super::section::Section;

/// Counters collected during one parse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines in the input, including blanks and comments
    pub total_lines: usize,

    /// Section header lines, in the order encountered
    pub sections: Vec<Section>,

    /// Header lines that matched no known section
    pub unknown_sections: usize,

    /// Lines inside a classified section that no classifier accepted
    pub lines_skipped: usize,

    /// Data rows produced
    pub data_rows: usize,

    /// Data rows with fewer tokens than curves
    pub short_rows: usize,

    /// Data tokens that did not parse and were stored as null
    pub null_tokens: usize,

    /// Data tokens beyond the last curve
    pub extra_tokens: usize,

    /// Line-numbered notes for skipped lines, for debugging
    pub warnings: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line a classifier could not use
    pub fn record_skipped(&mut self, line_number: usize, section: Section, line: &str) {
        self.lines_skipped += 1;
        self.warnings
            .push(format!("Line {} ({}): skipped '{}'", line_number, section, line));
    }

    /// Whether the data section was reached
    pub fn saw_data_section(&self) -> bool {
        self.sections.contains(&Section::Data)
    }

    /// Share of data rows that carried every curve, as a percentage
    pub fn complete_row_rate(&self) -> f64 {
        if self.data_rows == 0 {
            0.0
        } else {
            ((self.data_rows - self.short_rows) as f64 / self.data_rows as f64) * 100.0
        }
    }

    /// True when no header line was skipped and no data line was short
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0 && self.short_rows == 0 && self.unknown_sections == 0
    }
}
