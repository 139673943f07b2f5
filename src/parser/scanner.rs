//! Single-pass section scanner
//!
//! Parsing is a fold over the lines of the file: [`ParseState::step`] takes
//! the accumulator by value, applies one line and hands it back. Once the
//! data header is seen every following line is a data line, so sections after
//! `~ASCII` are never revisited.

use tracing::{debug, trace};

use super::data::tokenize_aligned;
use super::lines::{parse_curve_line, parse_version_line, parse_well_line};
use super::section::{Section, detect_section, is_section_header};
use super::stats::ParseStats;
use crate::constants::COMMENT_MARKER;
use crate::models::{CurveDefinition, ParseResult};

/// Accumulator threaded through the scan
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    section: Option<Section>,
    line_number: usize,
    /// Set once a curve reuses an earlier mnemonic
    duplicate_mnemonics: bool,
    result: ParseResult,
    stats: ParseStats,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section the scanner is currently in, `None` before the first header
    /// or after an unrecognised one
    pub fn section(&self) -> Option<Section> {
        self.section
    }

    pub fn in_data(&self) -> bool {
        self.section == Some(Section::Data)
    }

    /// Result accumulated so far
    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Apply one raw line and return the updated state
    pub fn step(mut self, raw_line: &str) -> Self {
        self.line_number += 1;
        self.stats.total_lines += 1;

        let line = raw_line.trim();

        if self.in_data() {
            self.push_data_line(line);
            return self;
        }

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return self;
        }

        if is_section_header(line) {
            self.enter_section(line);
            return self;
        }

        match self.section {
            Some(Section::Version) => {
                if self.result.version.is_none() {
                    self.result.version = parse_version_line(line);
                }
            }
            Some(Section::Well) => match parse_well_line(line) {
                Some((key, entry)) => {
                    self.result.well_info.insert(key, entry);
                }
                None => self.skip(Section::Well, line),
            },
            Some(Section::Curve) => match parse_curve_line(line) {
                Some(curve) => self.push_curve(curve),
                None => self.skip(Section::Curve, line),
            },
            Some(Section::Parameter) | Some(Section::Data) | None => {}
        }

        self
    }

    /// Consume the state, yielding the result and its statistics
    pub fn finish(self) -> (ParseResult, ParseStats) {
        (self.result, self.stats)
    }

    fn enter_section(&mut self, line: &str) {
        self.section = detect_section(line);
        match self.section {
            Some(section) => {
                debug!("Line {}: entering {} section", self.line_number, section);
                self.stats.sections.push(section);
            }
            None => {
                debug!("Line {}: ignoring unknown section '{}'", self.line_number, line);
                self.stats.unknown_sections += 1;
            }
        }
    }

    fn push_curve(&mut self, curve: CurveDefinition) {
        if self.result.curve(&curve.mnemonic).is_some() {
            self.duplicate_mnemonics = true;
        }
        self.result.curves.push(curve);
    }

    fn push_data_line(&mut self, line: &str) {
        let Some(tokenized) =
            tokenize_aligned(line, &self.result.curves, self.duplicate_mnemonics)
        else {
            return;
        };

        self.stats.data_rows += 1;
        self.stats.null_tokens += tokenized.null_tokens;
        self.stats.extra_tokens += tokenized.extra_tokens;
        if tokenized.missing_curves > 0 {
            self.stats.short_rows += 1;
        }
        self.result.data.push(tokenized.row);
    }

    fn skip(&mut self, section: Section, line: &str) {
        trace!("Line {}: skipped {} line '{}'", self.line_number, section, line);
        self.stats.record_skipped(self.line_number, section, line);
    }
}
