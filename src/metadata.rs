//! Well metadata normalization.
//!
//! Flattens the well information section into the scalar fields needed to
//! create a well record. Numeric fields that are missing or unparseable are
//! `NaN`, which callers must read as "unknown" and never as zero. The null
//! sentinel is the exception: it falls back to -9999 so that sentinel
//! filtering keeps working.

use crate::constants::{DEFAULT_NULL_VALUE, UNKNOWN_WELL_NAME, well_keys};
use crate::models::{ParseResult, WellInfo};
use crate::parser::data::parse_number;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layouts seen in the `DATE` line of real files
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%y", "%d-%b-%Y", "%Y/%m/%d", "%d/%m/%Y"];

/// Scalar well fields derived from the well information section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellMetadata {
    pub well_name: String,
    pub company: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub uwi: Option<String>,
    pub api: Option<String>,
    pub start_depth: f64,
    pub stop_depth: f64,
    pub step: f64,
    pub null_value: f64,
    /// Raw `DATE` value, left unparsed
    pub date_analyzed: Option<String>,
}

impl WellMetadata {
    /// Map the known well mnemonics onto metadata fields
    pub fn from_well_info(well_info: &WellInfo) -> Self {
        let text = |key: &str| well_info.get(key).map(|entry| entry.value.clone());
        let number = |key: &str| {
            well_info
                .get(key)
                .and_then(|entry| parse_number(&entry.value))
                .unwrap_or(f64::NAN)
        };

        let null_value = well_info
            .get(well_keys::NULL)
            .and_then(|entry| parse_number(&entry.value))
            .unwrap_or(DEFAULT_NULL_VALUE);

        Self {
            well_name: text(well_keys::WELL).unwrap_or_else(|| UNKNOWN_WELL_NAME.to_string()),
            company: text(well_keys::COMPANY),
            field: text(well_keys::FIELD),
            location: text(well_keys::LOCATION),
            country: text(well_keys::COUNTRY),
            state: text(well_keys::STATE),
            uwi: text(well_keys::UWI),
            api: text(well_keys::API),
            start_depth: number(well_keys::START),
            stop_depth: number(well_keys::STOP),
            step: number(well_keys::STEP),
            null_value,
            date_analyzed: text(well_keys::DATE),
        }
    }

    /// Interpret the raw `DATE` value, `None` when absent or in an unknown layout
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date_analyzed.as_deref()?.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    }

    /// Whether both depth bounds are known
    pub fn has_depth_range(&self) -> bool {
        !self.start_depth.is_nan() && !self.stop_depth.is_nan()
    }

    /// Whether a sample equals the file's null sentinel
    pub fn is_null_value(&self, value: f64) -> bool {
        value == self.null_value
    }
}

impl ParseResult {
    /// Derived metadata view of this result's well information
    pub fn well_metadata(&self) -> WellMetadata {
        WellMetadata::from_well_info(&self.well_info)
    }
}
