//! Line classifiers for the version, well and curve sections
//!
//! Every classifier is lenient: a line it cannot make sense of yields `None`
//! and the caller moves on. Lines have the general shape
//! `MNEM.UNIT  VALUE : DESCRIPTION`.

use crate::constants::{DEFAULT_CURVE_UNIT, DESCRIPTION_SEPARATOR, UNIT_SEPARATOR};
use crate::models::{CurveDefinition, WellInfoEntry};
use regex::Regex;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)VERS\.?\s+([0-9.]+)").expect("valid version pattern"));

/// Split a line at its first colon into the trimmed left part and description
///
/// Colons inside the description are kept verbatim. Returns `None` when the
/// line has no colon.
pub fn split_description(line: &str) -> Option<(&str, &str)> {
    line.split_once(DESCRIPTION_SEPARATOR)
        .map(|(left, description)| (left.trim(), description.trim()))
}

/// Extract the version number from a `VERS.` line
pub fn parse_version_line(line: &str) -> Option<String> {
    VERSION_PATTERN
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse a well information line into its normalized key and entry
///
/// The mnemonic is the first token up to its first `.`, the value is the last
/// token of the left part. Middle tokens are dropped.
pub fn parse_well_line(line: &str) -> Option<(String, WellInfoEntry)> {
    let (left, description) = split_description(line)?;

    let tokens: Vec<&str> = left.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let mnemonic = tokens[0]
        .split(UNIT_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_string();
    let value = tokens[tokens.len() - 1].to_string();

    let entry = WellInfoEntry {
        value,
        description: description.to_string(),
        mnemonic: mnemonic.clone(),
    };
    Some((camel_case(&mnemonic), entry))
}

/// Parse a curve definition line
///
/// Rejects lines without a colon and mnemonics that are empty or start with `#`.
pub fn parse_curve_line(line: &str) -> Option<CurveDefinition> {
    let (left, description) = split_description(line)?;

    let full_mnemonic = left.split_whitespace().next()?;
    let mut parts = full_mnemonic.split(UNIT_SEPARATOR);
    let mnemonic = parts.next().unwrap_or_default();
    let unit = parts.next().filter(|u| !u.is_empty());

    if mnemonic.is_empty() || mnemonic.starts_with('#') {
        return None;
    }

    Some(CurveDefinition {
        mnemonic: mnemonic.to_string(),
        unit: unit.unwrap_or(DEFAULT_CURVE_UNIT).to_string(),
        description: description.to_string(),
    })
}

/// Normalize a mnemonic into a well information key
///
/// Lowercases the mnemonic and folds `_x` into `X`, so `STRT` becomes `strt`
/// and `DATE_LOGGED` becomes `dateLogged`.
pub fn camel_case(mnemonic: &str) -> String {
    let lower = mnemonic.to_lowercase();
    let mut result = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}
