//! File loading
//!
//! Picks a decoder from the file extension and enforces the size limits
//! before anything is held in memory.

use crate::data::csv_parser::{detect_delimiter, parse_csv_content_with_limit};
use crate::data::error::{DataError, DataResult};
use crate::data::json_parser::parse_json_content;
use crate::settings::AnalyticsSettings;
use crate::types::RawTable;
use std::path::Path;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Decoder chosen for a file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Delimited,
    Json,
}

impl TableFormat {
    /// Format for a path, from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" | "tsv" | "txt" => Some(Self::Delimited),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Check if a file path is a data file this crate can decode
pub fn is_data_file(path: &Path) -> bool {
    TableFormat::from_path(path).is_some()
}

/// Load and decode a table with the default limits
pub fn load_table(path: &Path) -> DataResult<RawTable> {
    load_table_with(path, &AnalyticsSettings::default())
}

/// Load and decode a table.
///
/// # Errors
/// - [`DataError::UnsupportedFormat`] for an unknown extension
/// - [`DataError::TooLarge`] when the file exceeds `max_file_size_mb`
/// - [`DataError::TooManyRows`] when the table exceeds `max_rows`
pub fn load_table_with(path: &Path, settings: &AnalyticsSettings) -> DataResult<RawTable> {
    let format = TableFormat::from_path(path)
        .ok_or_else(|| DataError::UnsupportedFormat(path.display().to_string()))?;

    // Check file size before reading
    let len = std::fs::metadata(path)?.len();
    if len > settings.max_file_size_mb as u64 * BYTES_PER_MB {
        return Err(DataError::TooLarge {
            size_mb: len.div_ceil(BYTES_PER_MB),
            max_mb: settings.max_file_size_mb,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let table = match format {
        TableFormat::Delimited => {
            let delimiter = detect_delimiter(Some(path), &content);
            parse_csv_content_with_limit(&content, delimiter, settings.max_rows)?
        }
        TableFormat::Json => {
            let table = parse_json_content(&content)?;
            if table.data_row_count() > settings.max_rows {
                return Err(DataError::TooManyRows {
                    rows: table.data_row_count(),
                    max_rows: settings.max_rows,
                });
            }
            table
        }
    };

    tracing::info!(
        path = %path.display(),
        rows = table.data_row_count(),
        columns = table.column_count(),
        "Loaded table"
    );
    Ok(table)
}
