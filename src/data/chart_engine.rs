//! Chart data processing engine
//!
//! Turns a [`RawTable`] plus an axis selection into the series consumed by
//! the bar, line and donut renderers and the rows of the preview table.
//!
//! Bar and line keep one point per record in row order. The donut groups by
//! label, sums, and reports each group as a share of the grand total.

use crate::constants::DONUT_OTHER_LABEL;
use crate::data::DataResult;
use crate::data::classifier::{column_stats, kind_from_stats};
use crate::data::numeric::coerce_number;
use crate::perf::ScopedTimer;
use crate::settings::AnalyticsSettings;
use crate::types::{ChartData, ChartPoint, ColumnKind, RawTable, TablePreviewRow};
use std::collections::HashMap;
use std::sync::Arc;

/// Where each row's value comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueSource {
    /// The selected Y column
    Column(usize),
    /// A Y header that is not in the table; every value reads as 0
    Missing,
    /// No Y column and a numeric X column: X's own values
    OwnValues(usize),
    /// No Y column: every row counts 1
    Count,
}

/// Build all chart series with the default settings.
///
/// `x_axis` defaults to the first header. When `y_axis` is omitted a numeric
/// X column supplies its own values, otherwise rows are counted.
pub fn build_chart_data(
    table: &RawTable,
    x_axis: Option<&str>,
    y_axis: Option<&str>,
) -> DataResult<ChartData> {
    build_chart_data_with(table, x_axis, y_axis, &AnalyticsSettings::default())
}

/// Build all chart series with explicit limits
pub fn build_chart_data_with(
    table: &RawTable,
    x_axis: Option<&str>,
    y_axis: Option<&str>,
    settings: &AnalyticsSettings,
) -> DataResult<ChartData> {
    table.ensure_usable()?;
    build_chart_series(table, x_axis, y_axis, settings, preview_rows(table).into())
}

/// Build the bar, line and donut series around an already built preview.
///
/// The preview does not depend on the axis selection, so callers that
/// remap axes on the same table can build it once and share it.
pub fn build_chart_series(
    table: &RawTable,
    x_axis: Option<&str>,
    y_axis: Option<&str>,
    settings: &AnalyticsSettings,
    preview: Arc<[TablePreviewRow]>,
) -> DataResult<ChartData> {
    table.ensure_usable()?;
    let _timer = ScopedTimer::new("build_chart_data", settings.slow_operation_ms);

    let headers = table.headers();
    let x_col = resolve_x_column(table, x_axis);
    let x_label = headers.get(x_col).cloned().unwrap_or_default();

    let source = match y_axis {
        Some(name) => match table.column_index(name) {
            Some(col) => ValueSource::Column(col),
            None => {
                tracing::warn!("Y axis column '{}' not found, values read as 0", name);
                ValueSource::Missing
            }
        },
        None => {
            let x_kind = kind_from_stats(&column_stats(table.column_values(x_col)), settings);
            if x_kind == ColumnKind::Numeric {
                ValueSource::OwnValues(x_col)
            } else {
                ValueSource::Count
            }
        }
    };

    let records: Vec<(String, f64)> = table
        .data_rows()
        .iter()
        .map(|row| {
            let name = RawTable::cell(row, x_col).to_display_string();
            let value = match source {
                ValueSource::Column(col) | ValueSource::OwnValues(col) => {
                    coerce_number(RawTable::cell(row, col))
                }
                ValueSource::Missing => 0.0,
                ValueSource::Count => 1.0,
            };
            (name, value)
        })
        .collect();

    let bar: Vec<ChartPoint> = records
        .iter()
        .take(settings.max_chart_rows)
        .map(|(name, value)| ChartPoint::new(name.clone(), *value))
        .collect();
    let omitted_rows = records.len() - bar.len();

    let donut = donut_series(&records, settings.max_donut_slices, settings.donut_other_bucket);

    tracing::debug!(
        x_axis = %x_label,
        y_axis = ?y_axis,
        points = bar.len(),
        omitted_rows,
        slices = donut.len(),
        "Built chart data"
    );

    Ok(ChartData {
        x_axis: x_label,
        y_axis: y_axis.map(|y| y.trim().to_string()),
        line: bar.clone(),
        bar,
        donut,
        table: preview,
        omitted_rows,
    })
}

/// Index of the requested X column, falling back to the first header
fn resolve_x_column(table: &RawTable, x_axis: Option<&str>) -> usize {
    match x_axis {
        Some(name) => table.column_index(name).unwrap_or_else(|| {
            tracing::warn!("X axis column '{}' not found, using first column", name);
            0
        }),
        None => 0,
    }
}

/// Group records by name and express each group as a percentage share.
///
/// Groups are ordered by descending absolute total (ties keep first-seen
/// order) and cut to `max_slices`. Dropped groups vanish unless
/// `other_bucket` is set, in which case they are summed into one trailing
/// "Other" slice. A zero grand total yields no slices.
pub fn donut_series(
    records: &[(String, f64)],
    max_slices: usize,
    other_bucket: bool,
) -> Vec<ChartPoint> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (name, value) in records {
        match index.get(name.as_str()) {
            Some(&i) => groups[i].1 += value,
            None => {
                index.insert(name.as_str(), groups.len());
                groups.push((name.clone(), *value));
            }
        }
    }

    let total: f64 = groups.iter().map(|(_, v)| v).sum();
    if total == 0.0 || !total.is_finite() {
        return Vec::new();
    }

    groups.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let rest = if groups.len() > max_slices {
        groups.split_off(max_slices)
    } else {
        Vec::new()
    };

    let mut slices: Vec<ChartPoint> = groups
        .into_iter()
        .map(|(name, value)| ChartPoint::new(name, percentage(value, total)))
        .collect();

    if other_bucket && !rest.is_empty() {
        let other: f64 = rest.iter().map(|(_, v)| v).sum();
        slices.push(ChartPoint::new(DONUT_OTHER_LABEL, percentage(other, total)));
    }

    slices
}

/// Share of `total`, rounded to 2 decimal places
fn percentage(value: f64, total: f64) -> f64 {
    (value / total * 10_000.0).round() / 100.0
}

/// Every data row keyed by header, with 1-based ids.
///
/// A repeated header keeps its first position and takes the value of its
/// last column.
pub fn preview_rows(table: &RawTable) -> Vec<TablePreviewRow> {
    let columns = preview_columns(&table.headers());
    table
        .data_rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let fields = columns
                .iter()
                .map(|(header, col)| (header.clone(), RawTable::cell(row, *col).clone()))
                .collect();
            TablePreviewRow::new(i + 1, fields)
        })
        .collect()
}

/// Unique headers in first-seen order, each with the last column carrying it
fn preview_columns(headers: &[String]) -> Vec<(String, usize)> {
    let mut columns: Vec<(String, usize)> = Vec::with_capacity(headers.len());
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(headers.len());
    for (col, header) in headers.iter().enumerate() {
        match seen.get(header.as_str()) {
            Some(&i) => columns[i].1 = col,
            None => {
                seen.insert(header.as_str(), columns.len());
                columns.push((header.clone(), col));
            }
        }
    }
    columns
}
