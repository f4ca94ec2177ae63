//! Unit tests for column classification.

use crate::helpers::{TestTableBuilder, cells, monthly_sales, text_row};
use esg_analytics::data::{DataError, classify_columns, suggest_axes};
use esg_analytics::types::{CellValue, ColumnKind, RawTable};

fn kinds(table: &RawTable) -> Vec<ColumnKind> {
    classify_columns(table)
        .unwrap()
        .into_iter()
        .map(|c| c.kind)
        .collect()
}

#[test]
fn test_one_classification_per_header() {
    let table = TestTableBuilder::new(&["Site", "Scope", "Emissions", "Audited", "Notes"])
        .with_row(cells(&["Oslo", "1", "12.5", "2024-01-31", ""]))
        .with_row(cells(&["Bergen", "2"]))
        .with_row(cells(&["Oslo", "1", "8", "2024-02-29", "late", "extra cell"]))
        .build();

    let columns = classify_columns(&table).unwrap();
    assert_eq!(columns.len(), 5);
    for (i, column) in columns.iter().enumerate() {
        assert_eq!(column.index, i);
        assert!(ColumnKind::all().contains(&column.kind));
    }
    assert_eq!(columns[4].name, "Notes");
}

#[test]
fn test_headers_are_trimmed() {
    let table = TestTableBuilder::new(&["  Month ", "Sales"])
        .with_row(text_row(&["Jan", "1"]))
        .build();
    let columns = classify_columns(&table).unwrap();
    assert_eq!(columns[0].name, "Month");
}

#[test]
fn test_insufficient_data() {
    let header_only = TestTableBuilder::new(&["Month", "Sales"]).build();
    assert!(matches!(
        classify_columns(&header_only),
        Err(DataError::InsufficientData { rows: 1 })
    ));
    assert!(matches!(
        classify_columns(&RawTable::default()),
        Err(DataError::InsufficientData { rows: 0 })
    ));
}

#[test]
fn test_repeated_labels_are_categorical() {
    let table = TestTableBuilder::new(&["Grade"])
        .with_rows(["A", "B", "A", "C", "B", "A"].iter().map(|v| text_row(&[*v])))
        .build();
    assert_eq!(kinds(&table), vec![ColumnKind::Categorical]);
}

#[test]
fn test_satisfaction_scores_are_categorical() {
    let table = TestTableBuilder::new(&["Satisfaction"])
        .with_rows((0..50).map(|i| vec![CellValue::Number((i % 5 + 1) as f64)]))
        .build();
    assert_eq!(kinds(&table), vec![ColumnKind::Categorical]);
}

#[test]
fn test_high_cardinality_values_are_numeric() {
    let table = TestTableBuilder::new(&["Site", "Emissions"])
        .with_labelled_values(&["Oslo", "Bergen", "Trondheim"], 30)
        .build();
    assert_eq!(kinds(&table), vec![ColumnKind::Categorical, ColumnKind::Numeric]);
}

#[test]
fn test_formatted_numbers_count_as_numeric() {
    let table = TestTableBuilder::new(&["Spend"])
        .with_rows((0..25).map(|i| text_row(&[format!("${},{:03}.50", i + 1, i * 7).as_str()])))
        .build();
    assert_eq!(kinds(&table), vec![ColumnKind::Numeric]);
}

#[test]
fn test_numeric_needs_a_majority() {
    // 12 numbers, 13 free-text notes: 25 distinct values, no majority
    let table = TestTableBuilder::new(&["Mixed"])
        .with_rows((0..12).map(|i| vec![CellValue::Number(i as f64 * 3.3)]))
        .with_rows((0..13).map(|i| text_row(&[format!("note {}", i).as_str()])))
        .build();
    assert_eq!(kinds(&table), vec![ColumnKind::Unclassified]);
}

#[test]
fn test_dates_are_not_categorical() {
    let dates = ["2024-01-31", "2024-02-29", "2024-03-31"];
    let table = TestTableBuilder::new(&["Period"])
        .with_rows((0..9).map(|i| text_row(&[dates[i % 3]])))
        .build();
    assert_eq!(kinds(&table), vec![ColumnKind::DateLike]);
}

#[test]
fn test_many_distinct_dates_are_date_like() {
    let table = TestTableBuilder::new(&["Reported"])
        .with_rows((1..=28).map(|d| text_row(&[format!("2023-02-{:02}", d).as_str()])))
        .build();
    assert_eq!(kinds(&table), vec![ColumnKind::DateLike]);
}

#[test]
fn test_free_text_is_unclassified() {
    let table = TestTableBuilder::new(&["Comment"])
        .with_rows((0..30).map(|i| text_row(&[format!("comment number {}", i).as_str()])))
        .build();
    assert_eq!(kinds(&table), vec![ColumnKind::Unclassified]);
}

#[test]
fn test_empty_column_is_unclassified() {
    let table = TestTableBuilder::new(&["Site", "Blank"])
        .with_row(cells(&["Oslo", ""]))
        .with_row(cells(&["Bergen", "   "]))
        .build();
    let columns = classify_columns(&table).unwrap();
    assert_eq!(columns[1].kind, ColumnKind::Unclassified);
    assert_eq!(columns[1].stats.non_empty, 0);
}

#[test]
fn test_no_chartable_columns_is_not_an_error() {
    let table = TestTableBuilder::new(&["Only"])
        .with_row(text_row(&["same"]))
        .with_row(text_row(&["same"]))
        .build();
    let columns = classify_columns(&table).unwrap();
    assert!(columns
        .iter()
        .all(|c| c.kind != ColumnKind::Numeric && c.kind != ColumnKind::Categorical));
}

#[test]
fn test_suggested_axes() {
    let table = TestTableBuilder::new(&["Site", "Emissions"])
        .with_labelled_values(&["Oslo", "Bergen"], 30)
        .build();
    let axes = suggest_axes(&classify_columns(&table).unwrap());
    assert_eq!(axes.x.as_deref(), Some("Site"));
    assert_eq!(axes.y.as_deref(), Some("Emissions"));

    // Low-cardinality sales figures read as categories, so no Y is suggested
    let axes = suggest_axes(&classify_columns(&monthly_sales()).unwrap());
    assert_eq!(axes.x.as_deref(), Some("Month"));
    assert_eq!(axes.y, None);
}
