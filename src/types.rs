//! Core types for the analytics pipeline.
//!
//! A [`RawTable`] is what a decoder hands over; [`ColumnClassification`] and
//! [`ChartData`] are what the pipeline derives from it. None of these are
//! persisted, they are rebuilt whenever a new table is loaded.

use crate::data::{DataError, DataResult};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

// ============================================================================
// Raw Table Types
// ============================================================================

/// A single cell value as decoded from a spreadsheet or delimited file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    /// True for `Empty` and for text that is blank after trimming
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Display form used for chart labels and distinct-value counting
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => {
                // Whole numbers print without a trailing ".0"
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Empty => String::new(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Decoded table: row 0 is the header row, the rest are data rows.
///
/// Rows may be ragged. A row shorter than the header reads as `Empty` in
/// its missing trailing positions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTable {
    rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Fails with [`DataError::InsufficientData`] unless there is a header
    /// row and at least one data row.
    pub fn ensure_usable(&self) -> DataResult<()> {
        if self.rows.len() < 2 {
            return Err(DataError::InsufficientData {
                rows: self.rows.len(),
            });
        }
        Ok(())
    }

    /// Header names, trimmed
    pub fn headers(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.iter().map(CellValue::to_display_string).collect())
            .unwrap_or_default()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Number of data rows (header excluded)
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Data rows without the header
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Position of the first column with the given (trimmed) header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers().iter().position(|h| h == name)
    }

    /// Cell of a data row, `Empty` when the row is short
    pub fn cell<'a>(row: &'a [CellValue], col: usize) -> &'a CellValue {
        row.get(col).unwrap_or(&EMPTY_CELL)
    }

    /// Values of one column across all data rows
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &CellValue> {
        self.data_rows().iter().map(move |row| Self::cell(row, col))
    }
}

// ============================================================================
// Classification Types
// ============================================================================

/// Semantic type inferred for a column
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
    DateLike,
    #[default]
    Unclassified,
}

impl ColumnKind {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::DateLike => "date-like",
            ColumnKind::Unclassified => "unclassified",
        }
    }

    pub fn all() -> &'static [ColumnKind] {
        &[
            ColumnKind::Numeric,
            ColumnKind::Categorical,
            ColumnKind::DateLike,
            ColumnKind::Unclassified,
        ]
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts the classifier based its decision on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Non-empty values
    pub non_empty: usize,
    /// Distinct non-empty values
    pub distinct: usize,
    /// Values passing the numeric test
    pub numeric: usize,
    /// Values shaped like `yyyy-MM-dd`
    pub dates: usize,
}

/// Classification of one column
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub index: usize,
    pub name: String,
    pub kind: ColumnKind,
    pub stats: ColumnStats,
}

/// Selected chart axes, by header name
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    pub x: Option<String>,
    pub y: Option<String>,
}

// ============================================================================
// Chart Types
// ============================================================================

/// The `{ name, value }` shape consumed by every chart renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One data row keyed by header, with a synthetic 1-based id.
///
/// Serializes as a flat object: `{"id": 1, "Month": "Jan", ...}`.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePreviewRow {
    pub id: usize,
    fields: Vec<(String, CellValue)>,
}

impl TablePreviewRow {
    /// Build a row from header/value pairs; keys must already be unique
    pub fn new(id: usize, fields: Vec<(String, CellValue)>) -> Self {
        Self { id, fields }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl Serialize for TablePreviewRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(crate::constants::PREVIEW_ID_FIELD, &self.id)?;
        for (key, value) in &self.fields {
            if key == crate::constants::PREVIEW_ID_FIELD {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Everything the chart and preview renderers need for one axis selection
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    /// Header used for point names
    pub x_axis: String,
    /// Header used for point values, `None` when falling back
    pub y_axis: Option<String>,
    /// One point per row, truncated
    pub bar: Vec<ChartPoint>,
    /// Same points as `bar`
    pub line: Vec<ChartPoint>,
    /// Grouped percentage shares
    pub donut: Vec<ChartPoint>,
    /// Every data row, untruncated. Shared between builds of the same table.
    pub table: Arc<[TablePreviewRow]>,
    /// Data rows left out of `bar` and `line`
    pub omitted_rows: usize,
}

impl ChartData {
    /// Caption for the truncated bar/line charts, if anything was cut
    pub fn omitted_rows_message(&self) -> Option<String> {
        (self.omitted_rows > 0).then(|| format!("{} more rows not shown", self.omitted_rows))
    }
}
