//! Tests for the data line tokenizer and number parsing

use crate::models::CurveDefinition;
use crate::parser::data::{
    has_duplicate_mnemonics, is_skipped_data_line, parse_number, tokenize_aligned,
    tokenize_data_line,
};

fn curves(names: &[&str]) -> Vec<CurveDefinition> {
    names
        .iter()
        .map(|name| CurveDefinition::new(*name, "UNKN", ""))
        .collect()
}

#[test]
fn test_parse_number_plain_values() {
    assert_eq!(parse_number("100.0"), Some(100.0));
    assert_eq!(parse_number("-999.25"), Some(-999.25));
    assert_eq!(parse_number("+3"), Some(3.0));
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("5."), Some(5.0));
    assert_eq!(parse_number("1e3"), Some(1000.0));
    assert_eq!(parse_number("2.5E-1"), Some(0.25));
}

#[test]
fn test_parse_number_keeps_numeric_prefix() {
    assert_eq!(parse_number("12.5ft"), Some(12.5));
    assert_eq!(parse_number("0.45,"), Some(0.45));
    // an exponent marker without digits is not part of the number
    assert_eq!(parse_number("1e"), Some(1.0));
    assert_eq!(parse_number("7e+"), Some(7.0));
}

#[test]
fn test_parse_number_infinity() {
    assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
    assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
    assert_eq!(parse_number("+Infinity"), Some(f64::INFINITY));
}

#[test]
fn test_parse_number_rejections() {
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("-"), None);
    assert_eq!(parse_number("."), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("inf"), None);
}

#[test]
fn test_skipped_data_lines() {
    assert!(is_skipped_data_line(""));
    assert!(is_skipped_data_line("# comment"));
    assert!(is_skipped_data_line("~Other"));
    assert!(!is_skipped_data_line("100.0 50.2"));
}

#[test]
fn test_tokenize_full_line() {
    let curves = curves(&["DEPT", "GR"]);
    let tokenized = tokenize_data_line("100.0  50.2", &curves).unwrap();

    assert_eq!(tokenized.row.len(), 2);
    assert_eq!(tokenized.row.value("DEPT"), Some(100.0));
    assert_eq!(tokenized.row.value("GR"), Some(50.2));
    assert_eq!(tokenized.null_tokens, 0);
    assert_eq!(tokenized.extra_tokens, 0);
    assert_eq!(tokenized.missing_curves, 0);
}

#[test]
fn test_tokenize_short_line_omits_trailing_curves() {
    let curves = curves(&["DEPT", "GR", "RHOB"]);
    let tokenized = tokenize_data_line("100.0", &curves).unwrap();

    assert_eq!(tokenized.row.len(), 1);
    assert!(tokenized.row.contains_key("DEPT"));
    assert!(!tokenized.row.contains_key("GR"));
    assert_eq!(tokenized.row.get("RHOB"), None);
    assert_eq!(tokenized.missing_curves, 2);
}

#[test]
fn test_tokenize_extra_tokens_are_ignored() {
    let curves = curves(&["DEPT"]);
    let tokenized = tokenize_data_line("100.0 1 2 3", &curves).unwrap();

    assert_eq!(tokenized.row.keys().collect::<Vec<_>>(), vec!["DEPT"]);
    assert_eq!(tokenized.extra_tokens, 3);
}

#[test]
fn test_tokenize_bad_token_is_null() {
    let curves = curves(&["DEPT", "GR"]);
    let tokenized = tokenize_data_line("100.0 n/a", &curves).unwrap();

    assert_eq!(tokenized.row.get("GR"), Some(None));
    assert_eq!(tokenized.row.value("GR"), None);
    assert_eq!(tokenized.null_tokens, 1);
}

#[test]
fn test_tokenize_without_curves() {
    let tokenized = tokenize_data_line("100.0 50.2", &[]).unwrap();

    assert!(tokenized.row.is_empty());
    assert_eq!(tokenized.extra_tokens, 2);
}

#[test]
fn test_tokenize_skips_comment_lines() {
    let curves = curves(&["DEPT"]);
    assert!(tokenize_data_line("# note", &curves).is_none());
    assert!(tokenize_data_line("", &curves).is_none());
}

#[test]
fn test_duplicate_mnemonic_detection() {
    assert!(!has_duplicate_mnemonics(&curves(&["DEPT", "GR", "RHOB"])));
    assert!(has_duplicate_mnemonics(&curves(&["DEPT", "GR", "GR"])));
    assert!(!has_duplicate_mnemonics(&[]));
}

#[test]
fn test_duplicate_curve_replaces_earlier_value() {
    let curves = curves(&["DEPT", "GR", "GR"]);
    let tokenized = tokenize_data_line("100.0 1.0 2.0", &curves).unwrap();

    assert_eq!(tokenized.row.keys().collect::<Vec<_>>(), vec!["DEPT", "GR"]);
    assert_eq!(tokenized.row.value("GR"), Some(2.0));
}

#[test]
fn test_unique_curves_fill_row_in_order() {
    let names: Vec<String> = (0..300).map(|i| format!("C{}", i)).collect();
    let curves: Vec<CurveDefinition> = names
        .iter()
        .map(|name| CurveDefinition::new(name.as_str(), "UNKN", ""))
        .collect();
    let line = (0..300).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");

    let tokenized = tokenize_aligned(&line, &curves, false).unwrap();

    assert_eq!(tokenized.row.len(), 300);
    assert_eq!(tokenized.row.value("C0"), Some(0.0));
    assert_eq!(tokenized.row.value("C299"), Some(299.0));
    assert_eq!(tokenized.missing_curves, 0);
}
