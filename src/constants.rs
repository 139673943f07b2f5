//! Application constants for the LAS processor
//!
//! Section keywords, default values and the well mnemonics recognised by the
//! metadata normalizer.

// =============================================================================
// LAS Syntax
// =============================================================================

/// First character of every section header line
pub const SECTION_MARKER: char = '~';

/// First character of a comment line
pub const COMMENT_MARKER: char = '#';

/// Separator between the mnemonic/value part and the description of a line
pub const DESCRIPTION_SEPARATOR: char = ':';

/// Separator between a mnemonic and its unit (`DEPT.ft`)
pub const UNIT_SEPARATOR: char = '.';

/// Section header keywords, matched case-insensitively in this order
pub mod section_keywords {
    pub const VERSION: &str = "version";
    pub const WELL: &str = "well";
    pub const CURVE: &str = "curve";
    pub const PARAMETER: &str = "parameter";
    pub const ASCII: &str = "ascii";
    pub const DATA: &str = "data";
}

// =============================================================================
// Defaults
// =============================================================================

/// Unit assigned to a curve declared without one
pub const DEFAULT_CURVE_UNIT: &str = "UNKN";

/// Null value assumed when the well section carries no `NULL` entry
pub const DEFAULT_NULL_VALUE: f64 = -9999.0;

/// Well name reported when the well section carries no `WELL` entry
pub const UNKNOWN_WELL_NAME: &str = "Unknown";

/// Curve mnemonics that carry the depth index, in lookup precedence
pub const DEPTH_MNEMONICS: &[&str] = &["Depth", "DEPT"];

/// Rows handed to the persistence layer per batch
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Largest accepted upload (100 MiB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;

/// File extensions accepted by the processor
pub const DEFAULT_EXTENSIONS: &[&str] = &["las"];

/// Rows returned by a depth query when no limit is given
pub const DEFAULT_QUERY_LIMIT: usize = 10_000;

// =============================================================================
// Well Section Mnemonics
// =============================================================================

/// Normalized (camel-cased) keys of the well entries mapped onto metadata
pub mod well_keys {
    pub const WELL: &str = "well";
    pub const COMPANY: &str = "comp";
    pub const FIELD: &str = "fld";
    pub const LOCATION: &str = "loc";
    pub const COUNTRY: &str = "ctry";
    pub const STATE: &str = "stat";
    pub const UWI: &str = "uwi";
    pub const API: &str = "api";
    pub const START: &str = "strt";
    pub const STOP: &str = "stop";
    pub const STEP: &str = "step";
    pub const NULL: &str = "null";
    pub const DATE: &str = "date";
}
