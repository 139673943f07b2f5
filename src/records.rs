//! Ingest records handed to the persistence layer.
//!
//! Each data row becomes one [`DepthRecord`] tagged with its depth; records
//! are delivered in fixed-size batches so very large files never need a
//! single bulk insert.

use crate::constants::DEPTH_MNEMONICS;
use crate::metadata::WellMetadata;
use crate::models::{DataRow, ParseResult};
use serde::Serialize;
use tracing::warn;

/// One data row keyed by its depth
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthRecord {
    pub depth: f64,
    pub measurements: DataRow,
}

/// Summary reported once a file has been ingested
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellSummary {
    pub well_name: String,
    pub version: Option<String>,
    pub start_depth: f64,
    pub stop_depth: f64,
    pub curve_count: usize,
    pub data_point_count: usize,
}

impl WellSummary {
    pub fn new(result: &ParseResult, metadata: &WellMetadata) -> Self {
        Self {
            well_name: metadata.well_name.clone(),
            version: result.version.clone(),
            start_depth: metadata.start_depth,
            stop_depth: metadata.stop_depth,
            curve_count: result.curves.len(),
            data_point_count: result.data.len(),
        }
    }
}

/// Depth of a row, taken from `Depth` and then `DEPT`
///
/// A null in the preferred column falls through to the next one.
pub fn depth_of(row: &DataRow) -> Option<f64> {
    DEPTH_MNEMONICS
        .iter()
        .find_map(|mnemonic| row.value(mnemonic))
}

/// Build the depth record for a row, `None` when it carries no depth
pub fn to_depth_record(row: &DataRow) -> Option<DepthRecord> {
    depth_of(row).map(|depth| DepthRecord {
        depth,
        measurements: row.clone(),
    })
}

/// Split the rows of a result into batches of depth records
///
/// Rows without a depth value are dropped with a warning. A `batch_size` of
/// zero is treated as one.
pub fn record_batches(result: &ParseResult, batch_size: usize) -> Vec<Vec<DepthRecord>> {
    let batch_size = batch_size.max(1);
    let mut dropped = 0usize;

    let batches: Vec<Vec<DepthRecord>> = result
        .data
        .chunks(batch_size)
        .map(|chunk| {
            chunk
                .iter()
                .filter_map(|row| {
                    let record = to_depth_record(row);
                    if record.is_none() {
                        dropped += 1;
                    }
                    record
                })
                .collect()
        })
        .filter(|batch: &Vec<DepthRecord>| !batch.is_empty())
        .collect();

    if dropped > 0 {
        warn!("Dropped {} data rows without a depth value", dropped);
    }

    batches
}
