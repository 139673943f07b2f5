//! Depth-range queries and per-curve statistics over parsed rows.
//!
//! Null filtering happens here rather than in the parser: rows keep the null
//! sentinel as written, and statistics drop both parse failures and values
//! equal to the well's null value.

use crate::constants::DEFAULT_QUERY_LIMIT;
use crate::models::DataRow;
use crate::records::depth_of;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Row selection by depth range and curve subset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthQuery {
    pub start: Option<f64>,
    pub end: Option<f64>,
    /// Curves to keep; empty keeps every curve
    pub curves: Vec<String>,
    pub limit: usize,
}

impl Default for DepthQuery {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            curves: Vec::new(),
            limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

/// One row selected by a [`DepthQuery`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthPoint {
    pub depth: f64,
    pub values: DataRow,
}

impl DepthQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: f64) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_curves<I, S>(mut self, curves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.curves = curves.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Whether a depth falls inside the inclusive range
    pub fn contains(&self, depth: f64) -> bool {
        self.start.is_none_or(|start| depth >= start) && self.end.is_none_or(|end| depth <= end)
    }

    /// Select rows in range, ordered by depth ascending
    ///
    /// Rows without a depth are never selected. With a curve subset, each
    /// point keeps only the requested curves present in its row.
    pub fn run(&self, rows: &[DataRow]) -> Vec<DepthPoint> {
        let mut points: Vec<DepthPoint> = rows
            .iter()
            .filter_map(|row| depth_of(row).map(|depth| (depth, row)))
            .filter(|(depth, _)| self.contains(*depth))
            .map(|(depth, row)| DepthPoint {
                depth,
                values: self.project(row),
            })
            .collect();

        points.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));
        points.truncate(self.limit);
        points
    }

    fn project(&self, row: &DataRow) -> DataRow {
        if self.curves.is_empty() {
            return row.clone();
        }
        self.curves
            .iter()
            .filter_map(|curve| row.get(curve).map(|value| (curve.clone(), value)))
            .collect()
    }
}

/// Summary statistics of one curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveStatistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub p25: f64,
    pub p75: f64,
}

/// Statistics of a curve over the given rows
///
/// Absent entries, nulls and values equal to `null_value` are excluded.
/// Returns `None` when no value remains.
pub fn curve_statistics(rows: &[DataRow], curve: &str, null_value: f64) -> Option<CurveStatistics> {
    let mut values: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.value(curve))
        .filter(|value| *value != null_value)
        .collect();

    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
    let at = |fraction: f64| values[((count as f64 * fraction).floor() as usize).min(count - 1)];

    Some(CurveStatistics {
        count,
        min: values[0],
        max: values[count - 1],
        mean,
        median: values[count / 2],
        std_dev: variance.sqrt(),
        p25: at(0.25),
        p75: at(0.75),
    })
}

/// Statistics for several curves at once, `None` for curves with no values
pub fn statistics_by_curve(
    rows: &[DataRow],
    curves: &[String],
    null_value: f64,
) -> BTreeMap<String, Option<CurveStatistics>> {
    curves
        .iter()
        .map(|curve| (curve.clone(), curve_statistics(rows, curve, null_value)))
        .collect()
}
