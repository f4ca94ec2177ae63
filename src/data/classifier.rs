//! Column type inference
//!
//! Classifies every column of a [`RawTable`] as numeric, categorical,
//! date-like or unclassified using only the values themselves.
//!
//! Precedence is numeric > categorical > date-like > unclassified, with one
//! twist: a mostly-numeric column that also passes the categorical test is
//! categorical. Integer-coded answers such as a 1-5 satisfaction score are
//! labels to group by, not quantities to add up.

use crate::data::DataResult;
use crate::data::numeric::{cell_is_date, cell_number};
use crate::perf::ScopedTimer;
use crate::settings::AnalyticsSettings;
use crate::types::{
    AxisSelection, CellValue, ColumnClassification, ColumnKind, ColumnStats, RawTable,
};
use std::collections::HashSet;

/// Classify every header column using the default thresholds.
///
/// Fails with [`crate::data::DataError::InsufficientData`] when the table
/// has no data row.
pub fn classify_columns(table: &RawTable) -> DataResult<Vec<ColumnClassification>> {
    classify_columns_with(table, &AnalyticsSettings::default())
}

/// Classify every header column using the given thresholds
pub fn classify_columns_with(
    table: &RawTable,
    settings: &AnalyticsSettings,
) -> DataResult<Vec<ColumnClassification>> {
    table.ensure_usable()?;
    let _timer = ScopedTimer::new("classify_columns", settings.slow_operation_ms);

    let classifications: Vec<ColumnClassification> = table
        .headers()
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let stats = column_stats(table.column_values(index));
            let kind = kind_from_stats(&stats, settings);
            ColumnClassification {
                index,
                name,
                kind,
                stats,
            }
        })
        .collect();

    tracing::debug!(
        columns = classifications.len(),
        rows = table.data_row_count(),
        numeric = count_kind(&classifications, ColumnKind::Numeric),
        categorical = count_kind(&classifications, ColumnKind::Categorical),
        "Classified columns"
    );

    Ok(classifications)
}

/// Gather the counts the heuristic needs from one column's values
pub fn column_stats<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> ColumnStats {
    let mut stats = ColumnStats::default();
    let mut distinct: HashSet<String> = HashSet::new();

    for value in values.into_iter().filter(|v| !v.is_empty()) {
        stats.non_empty += 1;
        if cell_number(value).is_some() {
            stats.numeric += 1;
        }
        if cell_is_date(value) {
            stats.dates += 1;
        }
        distinct.insert(value.to_display_string());
    }

    stats.distinct = distinct.len();
    stats
}

/// Apply the precedence rules to a column's counts
pub fn kind_from_stats(stats: &ColumnStats, settings: &AnalyticsSettings) -> ColumnKind {
    if stats.non_empty == 0 {
        return ColumnKind::Unclassified;
    }

    let categorical = is_categorical(stats, settings);
    let mostly_numeric = stats.numeric * 2 > stats.non_empty;

    if mostly_numeric && !categorical {
        ColumnKind::Numeric
    } else if categorical {
        ColumnKind::Categorical
    } else if is_mostly_dates(stats, settings) {
        ColumnKind::DateLike
    } else {
        ColumnKind::Unclassified
    }
}

/// More than one distinct value, low cardinality by either threshold, and
/// not a date column
fn is_categorical(stats: &ColumnStats, settings: &AnalyticsSettings) -> bool {
    if stats.distinct <= 1 || is_mostly_dates(stats, settings) {
        return false;
    }
    let ratio_limit = settings.categorical_ratio * stats.non_empty as f64;
    (stats.distinct as f64) < ratio_limit || stats.distinct < settings.categorical_max_distinct
}

fn is_mostly_dates(stats: &ColumnStats, settings: &AnalyticsSettings) -> bool {
    stats.dates as f64 > settings.date_ratio * stats.non_empty as f64
}

fn count_kind(classifications: &[ColumnClassification], kind: ColumnKind) -> usize {
    classifications.iter().filter(|c| c.kind == kind).count()
}

/// Pick the initial chart axes before the user remaps them.
///
/// X is the first categorical column, else the first date-like column, else
/// the first header. Y is the first numeric column other than X, or none.
pub fn suggest_axes(classifications: &[ColumnClassification]) -> AxisSelection {
    let first_of = |kind: ColumnKind| classifications.iter().find(|c| c.kind == kind);

    let x = first_of(ColumnKind::Categorical)
        .or_else(|| first_of(ColumnKind::DateLike))
        .or_else(|| classifications.first());

    let y = classifications
        .iter()
        .filter(|c| c.kind == ColumnKind::Numeric)
        .find(|c| x.map(|x| x.index != c.index).unwrap_or(true));

    AxisSelection {
        x: x.map(|c| c.name.clone()),
        y: y.map(|c| c.name.clone()),
    }
}
