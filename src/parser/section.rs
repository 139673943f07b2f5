//! Section header detection
//!
//! A header line starts with `~`. Its section is decided by substring match on
//! the lowercased line, in a fixed keyword priority, so `~Well Data` is a well
//! section and not the data section.

use crate::constants::{SECTION_MARKER, section_keywords};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical sections of a LAS file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Version,
    Well,
    Curve,
    Parameter,
    /// The `~ASCII` data block; everything after it is data
    Data,
}

impl Section {
    /// Whether lines of this section feed one of the line classifiers
    pub fn is_classified(&self) -> bool {
        matches!(self, Section::Version | Section::Well | Section::Curve)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Version => "VERSION",
            Section::Well => "WELL",
            Section::Curve => "CURVE",
            Section::Parameter => "PARAMETER",
            Section::Data => "DATA",
        };
        f.write_str(name)
    }
}

/// True for lines that open a new section
pub fn is_section_header(line: &str) -> bool {
    line.starts_with(SECTION_MARKER)
}

/// Classify a header line, `None` when no keyword matches
pub fn detect_section(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();

    if lower.contains(section_keywords::VERSION) {
        Some(Section::Version)
    } else if lower.contains(section_keywords::WELL) {
        Some(Section::Well)
    } else if lower.contains(section_keywords::CURVE) {
        Some(Section::Curve)
    } else if lower.contains(section_keywords::PARAMETER) {
        Some(Section::Parameter)
    } else if lower.contains(section_keywords::ASCII) || lower.contains(section_keywords::DATA) {
        Some(Section::Data)
    } else {
        None
    }
}
