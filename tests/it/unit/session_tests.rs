//! Unit tests for the analytics session.

use crate::helpers::{TestTableBuilder, monthly_sales};
use esg_analytics::data::DataError;
use esg_analytics::session::AnalyticsSession;
use esg_analytics::settings::AnalyticsSettings;
use esg_analytics::types::{ColumnKind, RawTable};
use std::sync::Arc;

fn emissions_table() -> RawTable {
    TestTableBuilder::new(&["Site", "Emissions"])
        .with_labelled_values(&["Oslo", "Bergen", "Trondheim"], 30)
        .build()
}

#[test]
fn test_operations_before_load() {
    let mut session = AnalyticsSession::default();
    assert!(!session.is_loaded());
    assert!(matches!(session.chart_data(), Err(DataError::NoTableLoaded)));
    assert!(matches!(session.classifications(), Err(DataError::NoTableLoaded)));
    assert!(matches!(session.set_x_axis("Site"), Err(DataError::NoTableLoaded)));
}

#[test]
fn test_load_suggests_axes() {
    let mut session = AnalyticsSession::default();
    let columns = session.load(emissions_table()).unwrap();
    assert_eq!(columns.len(), 2);

    let axes = session.axes().unwrap();
    assert_eq!(axes.x.as_deref(), Some("Site"));
    assert_eq!(axes.y.as_deref(), Some("Emissions"));
    assert_eq!(session.columns_of_kind(ColumnKind::Numeric).unwrap(), vec!["Emissions"]);

    let chart = session.chart_data().unwrap();
    assert_eq!(chart.x_axis, "Site");
    assert_eq!(chart.bar.len(), 20);
    assert_eq!(chart.omitted_rows, 10);
    assert_eq!(chart.donut.len(), 3);
}

#[test]
fn test_remap_axes() {
    let mut session = AnalyticsSession::default();
    session.load(emissions_table()).unwrap();

    session.set_x_axis(" Emissions ").unwrap();
    session.set_y_axis(None).unwrap();
    let chart = session.chart_data().unwrap();
    assert_eq!(chart.x_axis, "Emissions");
    assert_eq!(chart.y_axis, None);
    // Numeric X without Y charts its own values
    assert_eq!(chart.bar[1].value, 1.75);

    session.set_x_axis("Site").unwrap();
    let chart = session.chart_data().unwrap();
    assert!(chart.bar.iter().all(|p| p.value == 1.0));
}

#[test]
fn test_unknown_axis_is_rejected() {
    let mut session = AnalyticsSession::default();
    session.load(emissions_table()).unwrap();

    assert!(matches!(
        session.set_x_axis("Region"),
        Err(DataError::UnknownColumn(name)) if name == "Region"
    ));
    assert!(matches!(session.set_y_axis(Some("Cost")), Err(DataError::UnknownColumn(_))));
    assert_eq!(session.axes().unwrap().x.as_deref(), Some("Site"));
}

#[test]
fn test_failed_load_keeps_previous_table() {
    let mut session = AnalyticsSession::default();
    session.load(monthly_sales()).unwrap();

    let header_only = TestTableBuilder::new(&["Month"]).build();
    assert!(matches!(
        session.load(header_only),
        Err(DataError::InsufficientData { .. })
    ));
    assert_eq!(session.table().unwrap().data_row_count(), 3);
}

#[test]
fn test_new_load_replaces_state() {
    let mut session = AnalyticsSession::default();
    session.load(emissions_table()).unwrap();
    session.set_y_axis(None).unwrap();

    session.load(monthly_sales()).unwrap();
    let axes = session.axes().unwrap();
    assert_eq!(axes.x.as_deref(), Some("Month"));
    assert_eq!(axes.y, None);

    session.clear();
    assert!(!session.is_loaded());
}

#[test]
fn test_settings_change_reclassifies() {
    let mut session = AnalyticsSession::default();
    session.load(monthly_sales()).unwrap();
    assert_eq!(session.columns_of_kind(ColumnKind::Categorical).unwrap().len(), 2);

    session
        .set_settings(AnalyticsSettings {
            categorical_max_distinct: 2,
            categorical_ratio: 0.0,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(session.columns_of_kind(ColumnKind::Numeric).unwrap(), vec!["Sales"]);
}

#[test]
fn test_remap_shares_preview_rows() {
    let mut session = AnalyticsSession::default();
    session.load(emissions_table()).unwrap();

    let before = session.chart_data().unwrap();
    session.set_x_axis("Emissions").unwrap();
    session.set_y_axis(None).unwrap();
    let after = session.chart_data().unwrap();

    assert_eq!(after.table.len(), 30);
    assert!(Arc::ptr_eq(&before.table, &after.table));

    session.load(monthly_sales()).unwrap();
    let reloaded = session.chart_data().unwrap();
    assert!(!Arc::ptr_eq(&before.table, &reloaded.table));
    assert_eq!(reloaded.table.len(), 3);
}
