//! Acceptance checks applied before a parsed file is ingested.
//!
//! The parser returns whatever it could extract; this module decides whether
//! that is enough to create a well record. Every failed check is reported,
//! not just the first one.

use crate::error::{LasError, Result};
use crate::metadata::WellMetadata;
use crate::models::ParseResult;
use tracing::debug;

/// Collect the reasons a parsed file should be rejected
///
/// Strict mode additionally requires `start_depth < stop_depth` and a positive
/// step. Lenient mode accepts upward logs with a negative step and only needs
/// the depth bounds to be present.
pub fn rejection_reasons(
    result: &ParseResult,
    metadata: &WellMetadata,
    strict: bool,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if result.curves.is_empty() {
        reasons.push("no curve definitions found".to_string());
    }
    if result.data.is_empty() {
        reasons.push("no data rows found".to_string());
    }

    if metadata.start_depth.is_nan() {
        reasons.push("start depth (STRT) is missing or not numeric".to_string());
    }
    if metadata.stop_depth.is_nan() {
        reasons.push("stop depth (STOP) is missing or not numeric".to_string());
    }

    if strict {
        if metadata.has_depth_range() && metadata.start_depth >= metadata.stop_depth {
            reasons.push(format!(
                "start depth {} is not below stop depth {}",
                metadata.start_depth, metadata.stop_depth
            ));
        }

        if metadata.step.is_nan() {
            reasons.push("step (STEP) is missing or not numeric".to_string());
        } else if metadata.step <= 0.0 {
            reasons.push(format!("step {} is not positive", metadata.step));
        }
    }

    reasons
}

/// Fail with [`LasError::Rejected`] when any acceptance check fails
pub fn validate_for_ingest(
    result: &ParseResult,
    metadata: &WellMetadata,
    strict: bool,
) -> Result<()> {
    let reasons = rejection_reasons(result, metadata, strict);
    if reasons.is_empty() {
        Ok(())
    } else {
        debug!("Rejecting well '{}': {:?}", metadata.well_name, reasons);
        Err(LasError::Rejected { reasons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_las;

    const VALID: &str = "~WELL
STRT.ft 100.0 : start
STOP.ft 102.0 : stop
STEP.ft 1.0 : step
~CURVE
DEPT.ft : Depth
~ASCII
100.0
";

    #[test]
    fn test_valid_file_is_accepted() {
        let result = parse_las(VALID);
        let metadata = result.well_metadata();
        assert!(validate_for_ingest(&result, &metadata, true).is_ok());
    }

    #[test]
    fn test_empty_file_collects_every_reason() {
        let result = parse_las("");
        let metadata = result.well_metadata();

        let reasons = rejection_reasons(&result, &metadata, true);
        assert_eq!(reasons.len(), 5);
        assert!(reasons[0].contains("no curve"));
        assert!(reasons[1].contains("no data"));

        match validate_for_ingest(&result, &metadata, true) {
            Err(LasError::Rejected { reasons }) => assert_eq!(reasons.len(), 5),
            other => panic!("Expected Rejected error, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_depths_and_negative_step() {
        let content = VALID
            .replace("STRT.ft 100.0", "STRT.ft 102.0")
            .replace("STOP.ft 102.0", "STOP.ft 100.0")
            .replace("STEP.ft 1.0", "STEP.ft -1.0");
        let result = parse_las(&content);
        let metadata = result.well_metadata();

        let strict = rejection_reasons(&result, &metadata, true);
        assert_eq!(strict.len(), 2);
        assert!(strict[0].contains("not below"));
        assert!(strict[1].contains("not positive"));

        assert!(rejection_reasons(&result, &metadata, false).is_empty());
    }
}
