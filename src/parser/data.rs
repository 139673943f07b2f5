//! Data section tokenizer
//!
//! Turns each line after the data header into a [`DataRow`] aligned by
//! position against the curve catalog.

use crate::constants::{COMMENT_MARKER, SECTION_MARKER};
use crate::models::{CurveDefinition, DataRow};
use std::collections::HashSet;

/// Outcome of tokenizing one data line
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedLine {
    pub row: DataRow,
    /// Tokens that did not parse as numbers and were stored as null
    pub null_tokens: usize,
    /// Tokens beyond the last curve, ignored
    pub extra_tokens: usize,
    /// Curves left without a value because the line ran out of tokens
    pub missing_curves: usize,
}

/// True for lines of the data section that carry no sample
pub fn is_skipped_data_line(line: &str) -> bool {
    line.is_empty() || line.starts_with(COMMENT_MARKER) || line.starts_with(SECTION_MARKER)
}

/// Tokenize one trimmed data line
///
/// Returns `None` for blank, comment and section lines. Curve `i` receives
/// token `i`; curves past the last token get no entry in the row.
pub fn tokenize_data_line(line: &str, curves: &[CurveDefinition]) -> Option<TokenizedLine> {
    tokenize_aligned(line, curves, has_duplicate_mnemonics(curves))
}

/// Whether two curves share a mnemonic
pub fn has_duplicate_mnemonics(curves: &[CurveDefinition]) -> bool {
    let mut seen = HashSet::with_capacity(curves.len());
    !curves.iter().all(|curve| seen.insert(curve.mnemonic.as_str()))
}

/// Tokenize one trimmed data line against a curve list whose duplicate
/// status is already known
///
/// With unique mnemonics every value is appended directly; with duplicates a
/// later column replaces the earlier value in place.
pub fn tokenize_aligned(
    line: &str,
    curves: &[CurveDefinition],
    duplicate_mnemonics: bool,
) -> Option<TokenizedLine> {
    if is_skipped_data_line(line) {
        return None;
    }

    let values: Vec<Option<f64>> = line.split_whitespace().map(parse_number).collect();
    let null_tokens = values.iter().filter(|v| v.is_none()).count();

    let mut row = DataRow::with_capacity(curves.len().min(values.len()));
    for (curve, value) in curves.iter().zip(values.iter()) {
        if duplicate_mnemonics {
            row.insert(curve.mnemonic.clone(), *value);
        } else {
            row.push(curve.mnemonic.clone(), *value);
        }
    }

    Some(TokenizedLine {
        row,
        null_tokens,
        extra_tokens: values.len().saturating_sub(curves.len()),
        missing_curves: curves.len().saturating_sub(values.len()),
    })
}

/// Parse the leading decimal number of a token
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent and the literal `Infinity`. Trailing garbage after a valid prefix
/// is ignored (`12.5ft` reads as 12.5); a token without a numeric prefix, or
/// one reading as NaN, is `None`.
pub fn parse_number(token: &str) -> Option<f64> {
    let token = token.trim_start();
    let bytes = token.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if token[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    token[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}
