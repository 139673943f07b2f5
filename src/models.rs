//! Core data structures produced by the LAS parser.
//!
//! Defines curve definitions, well information entries, data rows and the
//! parse result handed to the persistence and query layers.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A named, unit-tagged measurement channel declared in the curve section
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
pub struct CurveDefinition {
    pub mnemonic: String,
    pub unit: String,
    pub description: String,
}

impl CurveDefinition {
    pub fn new(
        mnemonic: impl Into<String>,
        unit: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            unit: unit.into(),
            description: description.into(),
        }
    }
}

/// One line of the well information section
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct WellInfoEntry {
    /// Last whitespace-separated token before the description
    pub value: String,
    pub description: String,
    /// Mnemonic as written in the file, before normalization
    pub mnemonic: String,
}

/// Well information keyed by normalized mnemonic; the last occurrence wins
pub type WellInfo = BTreeMap<String, WellInfoEntry>;

/// One sample of every curve present on a data line
///
/// Entries keep curve order. A curve whose column lies beyond the tokens of
/// its line has no entry at all, while a token that failed to parse is stored
/// as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRow {
    values: Vec<(String, Option<f64>)>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Set the value of a curve, replacing an earlier entry for the same mnemonic
    pub fn insert(&mut self, mnemonic: impl Into<String>, value: Option<f64>) {
        let mnemonic = mnemonic.into();
        match self.values.iter_mut().find(|(key, _)| *key == mnemonic) {
            Some(entry) => entry.1 = value,
            None => self.values.push((mnemonic, value)),
        }
    }

    /// Append a value without checking for an earlier entry
    ///
    /// Only valid when `mnemonic` is not already in the row.
    pub fn push(&mut self, mnemonic: impl Into<String>, value: Option<f64>) {
        self.values.push((mnemonic.into(), value));
    }

    /// Entry for a curve: `None` when absent, `Some(None)` when present but null
    pub fn get(&self, mnemonic: &str) -> Option<Option<f64>> {
        self.values
            .iter()
            .find(|(key, _)| key == mnemonic)
            .map(|(_, value)| *value)
    }

    /// Numeric value of a curve, `None` when absent or null
    pub fn value(&self, mnemonic: &str) -> Option<f64> {
        self.get(mnemonic).flatten()
    }

    pub fn contains_key(&self, mnemonic: &str) -> bool {
        self.values.iter().any(|(key, _)| key == mnemonic)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl FromIterator<(String, Option<f64>)> for DataRow {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        let mut row = DataRow::new();
        for (mnemonic, value) in iter {
            row.insert(mnemonic, value);
        }
        row
    }
}

impl Serialize for DataRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Everything extracted from one LAS file
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Value of the `VERS` line, `None` when the version section has none
    pub version: Option<String>,
    pub well_info: WellInfo,
    /// Curve catalog in column order
    pub curves: Vec<CurveDefinition>,
    /// Data rows in file order
    pub data: Vec<DataRow>,
}

impl ParseResult {
    /// True when the file yielded neither curves nor data rows
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty() && self.data.is_empty()
    }

    /// Curve mnemonics in column order
    pub fn curve_names(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.mnemonic.as_str()).collect()
    }

    /// Look up a curve definition by mnemonic
    pub fn curve(&self, mnemonic: &str) -> Option<&CurveDefinition> {
        self.curves.iter().find(|c| c.mnemonic == mnemonic)
    }
}
