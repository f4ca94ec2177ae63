//! Test helpers and builders for reducing boilerplate in tests.
//!
//! - `TestTableBuilder` - Builder pattern for creating raw tables
//! - `text_row()` / `cells()` - Row shorthands
//! - `donut_total()` - Sum of donut percentages

use esg_analytics::types::{CellValue, ChartPoint, RawTable};

// ============================================================================
// TestTableBuilder - Builder pattern for creating test tables
// ============================================================================

/// Builder for creating test tables.
///
/// # Example
/// ```ignore
/// let table = TestTableBuilder::new(&["Month", "Sales"])
///     .with_row(cells(&["Jan", "100"]))
///     .with_numeric_column_rows("Site", 30)
///     .build();
/// ```
pub struct TestTableBuilder {
    rows: Vec<Vec<CellValue>>,
}

impl TestTableBuilder {
    /// Create a builder with the given header row.
    pub fn new(headers: &[&str]) -> Self {
        Self {
            rows: vec![text_row(headers)],
        }
    }

    /// Add a data row.
    pub fn with_row(mut self, row: Vec<CellValue>) -> Self {
        self.rows.push(row);
        self
    }

    /// Add many data rows.
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Vec<CellValue>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Add `count` rows of `(label, value)` where labels cycle through
    /// `labels` and values are `1.5 * i + 0.25` (all distinct).
    pub fn with_labelled_values(mut self, labels: &[&str], count: usize) -> Self {
        for i in 0..count {
            self.rows.push(vec![
                CellValue::from(labels[i % labels.len()]),
                CellValue::Number(1.5 * i as f64 + 0.25),
            ]);
        }
        self
    }

    pub fn build(self) -> RawTable {
        RawTable::new(self.rows)
    }
}

/// A row of text cells.
pub fn text_row(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}

/// A row of text cells with `""` read as empty.
pub fn cells(values: &[&str]) -> Vec<CellValue> {
    values
        .iter()
        .map(|v| if v.is_empty() { CellValue::Empty } else { CellValue::from(*v) })
        .collect()
}

/// The `[["Month","Sales"],["Jan",100],["Feb",200],["Jan",50]]` table.
pub fn monthly_sales() -> RawTable {
    TestTableBuilder::new(&["Month", "Sales"])
        .with_row(vec![CellValue::from("Jan"), CellValue::Number(100.0)])
        .with_row(vec![CellValue::from("Feb"), CellValue::Number(200.0)])
        .with_row(vec![CellValue::from("Jan"), CellValue::Number(50.0)])
        .build()
}

/// Sum of all slice percentages.
pub fn donut_total(donut: &[ChartPoint]) -> f64 {
    donut.iter().map(|p| p.value).sum()
}
