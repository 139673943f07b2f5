//! End-to-end tests for the LAS parser

use super::{create_minimal_las, create_sample_las, create_temp_file};
use crate::models::CurveDefinition;
use crate::parser::{ParseState, Section, parse_las, parse_las_with_stats};
use std::thread;

#[test]
fn test_minimal_file_round_trip() {
    let result = parse_las(&create_minimal_las());

    assert_eq!(result.version.as_deref(), Some("2.0"));
    assert_eq!(result.well_info["well"].value, "WELLX");
    assert_eq!(result.well_info["well"].description, "Well name");

    let metadata = result.well_metadata();
    assert_eq!(metadata.well_name, "WELLX");
    assert_eq!(metadata.start_depth, 100.0);
    assert_eq!(metadata.stop_depth, 102.0);
    assert_eq!(metadata.step, 1.0);
    assert_eq!(metadata.null_value, -999.25);

    assert_eq!(
        result.curves,
        vec![
            CurveDefinition::new("DEPT", "ft", "Depth"),
            CurveDefinition::new("GR", "api", "Gamma ray"),
        ]
    );

    assert_eq!(result.data.len(), 3);
    assert_eq!(result.data[0].value("DEPT"), Some(100.0));
    assert_eq!(result.data[1].value("GR"), Some(52.1));
    assert_eq!(result.data[2].value("GR"), Some(-999.25));
}

#[test]
fn test_minimal_file_stats() {
    let outcome = parse_las_with_stats(&create_minimal_las());
    let stats = outcome.stats;

    assert_eq!(stats.total_lines, 15);
    assert_eq!(
        stats.sections,
        vec![Section::Version, Section::Well, Section::Curve, Section::Data]
    );
    assert_eq!(stats.data_rows, 3);
    assert!(stats.is_clean());
    assert_eq!(stats.complete_row_rate(), 100.0);
    assert!(stats.warnings.is_empty());
}

#[test]
fn test_sample_file() {
    let outcome = parse_las_with_stats(&create_sample_las());
    let result = outcome.result;

    assert_eq!(result.version.as_deref(), Some("2.0"));
    assert_eq!(result.well_info.len(), 10);
    // only the last token before the colon is kept
    assert_eq!(result.well_info["comp"].value, "INC.");
    assert_eq!(result.well_info["fld"].value, "WILDCAT");
    assert_eq!(result.well_info["date"].description, "LOG DATE: 13-DEC-86");

    assert_eq!(result.curve_names(), vec!["DEPT", "DT", "RHOB", "NPHI"]);
    assert_eq!(result.curves[1].unit, "UNKN");
    assert_eq!(result.curves[2].unit, "K/M3");

    assert_eq!(result.data.len(), 3);
    let last = &result.data[2];
    assert_eq!(last.value("DEPT"), Some(1669.75));
    assert_eq!(last.value("DT"), Some(-999.25));
    assert_eq!(last.get("NPHI"), Some(None));

    let metadata = result.well_metadata();
    assert_eq!(metadata.well_name, "AAAAA_2");
    assert_eq!(metadata.step, -0.125);
    assert_eq!(metadata.uwi.as_deref(), Some("100123401234W500"));
    assert_eq!(
        metadata.parsed_date(),
        chrono::NaiveDate::from_ymd_opt(1986, 12, 13)
    );

    let stats = outcome.stats;
    assert_eq!(
        stats.sections,
        vec![
            Section::Version,
            Section::Well,
            Section::Curve,
            Section::Parameter,
            Section::Data
        ]
    );
    assert_eq!(stats.null_tokens, 1);
    assert_eq!(stats.lines_skipped, 0);
}

#[test]
fn test_short_rows_omit_trailing_curves() {
    let content = "~CURVE\nDEPT.ft : d\nGR.api : g\nRHOB.g/cc : r\n~ASCII\n100.0 50.0\n101.0\n";
    let outcome = parse_las_with_stats(content);

    let rows = &outcome.result.data;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 2);
    assert!(!rows[0].contains_key("RHOB"));
    assert_eq!(rows[1].keys().collect::<Vec<_>>(), vec!["DEPT"]);
    assert_eq!(outcome.stats.short_rows, 2);
    assert!(!outcome.stats.is_clean());
}

#[test]
fn test_rejected_curve_does_not_shift_alignment() {
    let content = "~CURVE\nDEPT.ft : depth\n.ft : bad\nGR.api : gamma\n~ASCII\n100.0 42.0\n";
    let outcome = parse_las_with_stats(content);

    assert_eq!(outcome.result.curve_names(), vec!["DEPT", "GR"]);
    assert_eq!(outcome.result.data[0].value("GR"), Some(42.0));
    assert_eq!(outcome.stats.lines_skipped, 1);
    assert!(outcome.stats.warnings[0].contains("CURVE"));
}

#[test]
fn test_well_line_without_colon_is_ignored() {
    let content = "~WELL\nWELL. WELLX Well name\nSTRT.ft 10 : start\n";
    let outcome = parse_las_with_stats(content);

    assert!(!outcome.result.well_info.contains_key("well"));
    assert_eq!(outcome.result.well_info["strt"].value, "10");
    assert_eq!(outcome.result.well_metadata().well_name, "Unknown");
    assert_eq!(outcome.stats.lines_skipped, 1);
}

#[test]
fn test_last_well_entry_wins() {
    let content = "~WELL\nWELL. FIRST : name\nWELL. SECOND : name again\n";
    let result = parse_las(content);

    assert_eq!(result.well_info.len(), 1);
    assert_eq!(result.well_info["well"].value, "SECOND");
}

#[test]
fn test_first_version_wins() {
    let content = "~VERSION\nVERS. 1.2 : first\nVERS. 2.0 : second\n";
    assert_eq!(parse_las(content).version.as_deref(), Some("1.2"));
}

#[test]
fn test_sections_after_data_are_data() {
    let content = "~CURVE\nDEPT.ft : d\n~ASCII\n100.0\n~WELL\nWELL. LATE : name\n101.0\n";
    let outcome = parse_las_with_stats(content);

    // the second header is skipped as a data line, the well line is a null row
    assert!(outcome.result.well_info.is_empty());
    assert_eq!(outcome.result.data.len(), 3);
    assert_eq!(outcome.result.data[1].get("DEPT"), Some(None));
    assert_eq!(outcome.result.data[2].value("DEPT"), Some(101.0));
    assert_eq!(outcome.stats.sections, vec![Section::Curve, Section::Data]);
}

#[test]
fn test_unknown_section_lines_are_ignored() {
    let content = "~Other Information\nWELL. NOPE : ignored\n~WELL\nWELL. YES : name\n";
    let outcome = parse_las_with_stats(content);

    assert_eq!(outcome.result.well_info["well"].value, "YES");
    assert_eq!(outcome.stats.unknown_sections, 1);
    assert_eq!(outcome.stats.lines_skipped, 0);
}

#[test]
fn test_out_of_order_sections() {
    let content = "~CURVE\nDEPT.ft : d\n~WELL\nWELL. W1 : name\n~VERSION\nVERS. 3.0 : v\n~ASCII\n5\n";
    let result = parse_las(content);

    assert_eq!(result.version.as_deref(), Some("3.0"));
    assert_eq!(result.well_info["well"].value, "W1");
    assert_eq!(result.data.len(), 1);
}

#[test]
fn test_short_data_header_is_not_recognized() {
    let content = "~CURVE\nDEPT.ft : d\n~A  DEPT\n100.0\n";
    let outcome = parse_las_with_stats(content);

    assert!(outcome.result.data.is_empty());
    assert!(!outcome.stats.saw_data_section());
    assert_eq!(outcome.stats.unknown_sections, 1);
}

#[test]
fn test_crlf_line_endings() {
    let content = create_minimal_las().replace('\n', "\r\n");
    let result = parse_las(&content);

    assert_eq!(result, parse_las(&create_minimal_las()));
    assert_eq!(result.well_info["null"].value, "-999.25");
}

#[test]
fn test_empty_input() {
    let outcome = parse_las_with_stats("");

    assert!(outcome.result.is_empty());
    assert!(outcome.result.version.is_none());
    assert!(outcome.result.well_info.is_empty());
    assert_eq!(outcome.stats.total_lines, 0);
}

#[test]
fn test_data_without_curves_yields_empty_rows() {
    let result = parse_las("~ASCII\n100.0 1.0\n");

    assert_eq!(result.data.len(), 1);
    assert!(result.data[0].is_empty());
}

#[test]
fn test_row_keys_come_from_curves() {
    let result = parse_las(&create_sample_las());
    let names = result.curve_names();

    for row in &result.data {
        assert!(row.keys().all(|key| names.contains(&key)));
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let content = create_sample_las();
    assert_eq!(parse_las(&content), parse_las(&content));
}

#[test]
fn test_manual_fold_matches_parse_las() {
    let content = create_minimal_las();
    let state = content.lines().take(12).fold(ParseState::new(), ParseState::step);

    assert!(state.in_data());
    assert_eq!(state.result().curves.len(), 2);
    assert!(state.result().data.is_empty());

    let (result, _) = content
        .lines()
        .skip(12)
        .fold(state, ParseState::step)
        .finish();
    assert_eq!(result, parse_las(&content));
}

#[test]
fn test_parse_from_temp_file() {
    let temp_file = create_temp_file(&create_sample_las());
    let content = std::fs::read_to_string(temp_file.path()).unwrap();

    let result = parse_las(&content);
    assert_eq!(result.data.len(), 3);
    assert_eq!(result.curves.len(), 4);
}

#[test]
fn test_concurrent_parsing() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let content = if i % 2 == 0 {
                    create_minimal_las()
                } else {
                    create_sample_las()
                };
                parse_las(&content)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], results[2]);
    assert_eq!(results[1], results[3]);
    assert_eq!(results[0].data.len(), 3);
    assert_eq!(results[1].curves.len(), 4);
}

#[test]
fn test_duplicate_curve_mnemonics() {
    let content = "~CURVE\nDEPT.ft : d\nGR.api : first\nGR.api : second\n~ASCII\n100.0 1.0 2.0\n";
    let result = parse_las(content);

    assert_eq!(result.curves.len(), 3);
    assert_eq!(result.data[0].len(), 2);
    assert_eq!(result.data[0].value("GR"), Some(2.0));
}
