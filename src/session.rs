//! Analytics session state.
//!
//! Holds the table the user is currently looking at together with its
//! derived classification and the axis selection. Callers own the session
//! and pass it where it is needed; loading a new table replaces everything
//! derived from the previous one.

use crate::data::{
    DataError, DataResult, build_chart_series, classify_columns_with, preview_rows, suggest_axes,
};
use crate::settings::AnalyticsSettings;
use crate::types::{
    AxisSelection, ChartData, ColumnClassification, ColumnKind, RawTable, TablePreviewRow,
};
use std::sync::Arc;

/// A loaded table and what was derived from it
#[derive(Clone, Debug)]
struct LoadedTable {
    table: RawTable,
    classifications: Vec<ColumnClassification>,
    axes: AxisSelection,
    /// Built once per table, axis remaps reuse it
    preview: Arc<[TablePreviewRow]>,
}

#[derive(Clone, Debug, Default)]
pub struct AnalyticsSession {
    settings: AnalyticsSettings,
    current: Option<LoadedTable>,
}

impl AnalyticsSession {
    pub fn new(settings: AnalyticsSettings) -> Self {
        Self {
            settings,
            current: None,
        }
    }

    pub fn settings(&self) -> &AnalyticsSettings {
        &self.settings
    }

    /// Replace the settings; the loaded table is reclassified
    pub fn set_settings(&mut self, settings: AnalyticsSettings) -> DataResult<()> {
        self.settings = settings;
        if let Some(current) = self.current.as_mut() {
            current.classifications = classify_columns_with(&current.table, &self.settings)?;
        }
        Ok(())
    }

    /// Classify a new table and pick its initial axes.
    ///
    /// On error the previously loaded table is left untouched.
    pub fn load(&mut self, table: RawTable) -> DataResult<&[ColumnClassification]> {
        let classifications = classify_columns_with(&table, &self.settings)?;
        let axes = suggest_axes(&classifications);
        tracing::info!(
            rows = table.data_row_count(),
            columns = classifications.len(),
            x_axis = ?axes.x,
            y_axis = ?axes.y,
            "Table loaded into session"
        );
        let preview = preview_rows(&table).into();
        let current = self.current.insert(LoadedTable {
            table,
            classifications,
            axes,
            preview,
        });
        Ok(current.classifications.as_slice())
    }

    /// Drop the loaded table
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn table(&self) -> DataResult<&RawTable> {
        self.loaded().map(|c| &c.table)
    }

    pub fn classifications(&self) -> DataResult<&[ColumnClassification]> {
        self.loaded().map(|c| c.classifications.as_slice())
    }

    pub fn axes(&self) -> DataResult<&AxisSelection> {
        self.loaded().map(|c| &c.axes)
    }

    /// Header names of every column of the given kind
    pub fn columns_of_kind(&self, kind: ColumnKind) -> DataResult<Vec<&str>> {
        Ok(self
            .classifications()?
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.as_str())
            .collect())
    }

    /// Remap the X axis to another header
    pub fn set_x_axis(&mut self, name: &str) -> DataResult<()> {
        let current = self.loaded_mut()?;
        let name = known_column(&current.table, name)?;
        current.axes.x = Some(name);
        Ok(())
    }

    /// Remap or clear the Y axis
    pub fn set_y_axis(&mut self, name: Option<&str>) -> DataResult<()> {
        let current = self.loaded_mut()?;
        current.axes.y = match name {
            Some(name) => Some(known_column(&current.table, name)?),
            None => None,
        };
        Ok(())
    }

    /// Chart series for the current axis selection
    pub fn chart_data(&self) -> DataResult<ChartData> {
        let current = self.loaded()?;
        build_chart_series(
            &current.table,
            current.axes.x.as_deref(),
            current.axes.y.as_deref(),
            &self.settings,
            Arc::clone(&current.preview),
        )
    }

    fn loaded(&self) -> DataResult<&LoadedTable> {
        self.current.as_ref().ok_or(DataError::NoTableLoaded)
    }

    fn loaded_mut(&mut self) -> DataResult<&mut LoadedTable> {
        self.current.as_mut().ok_or(DataError::NoTableLoaded)
    }
}

/// Trimmed header name, if the table has it
fn known_column(table: &RawTable, name: &str) -> DataResult<String> {
    let name = name.trim();
    table
        .column_index(name)
        .map(|_| name.to_string())
        .ok_or_else(|| DataError::UnknownColumn(name.to_string()))
}
