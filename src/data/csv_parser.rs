//! CSV and TSV decoding
//!
//! Decodes delimited text into a [`RawTable`]. Cells stay untyped text;
//! deciding what a column holds is the classifier's job.

use crate::constants::MAX_ROWS;
use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, RawTable};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

/// Decode CSV/TSV content with the default row limit
pub fn parse_csv_content(content: &str, delimiter: char) -> DataResult<RawTable> {
    parse_csv_content_with_limit(content, delimiter, MAX_ROWS)
}

/// Decode CSV/TSV content.
///
/// Quoted fields may contain delimiters, doubled quotes and newlines.
/// Records may be ragged. Lines with nothing but blanks are skipped and the
/// first remaining record is the header row.
///
/// # Errors
/// - [`DataError::EmptyFile`] when no record has any content
/// - [`DataError::TooManyRows`] when more than `max_rows` data rows follow the header
pub fn parse_csv_content_with_limit(
    content: &str,
    delimiter: char,
    max_rows: usize,
) -> DataResult<RawTable> {
    if !delimiter.is_ascii() {
        return Err(DataError::InvalidData(format!(
            "Delimiter must be a single ASCII character, got {:?}",
            delimiter
        )));
    }

    let content = content.trim_start_matches('\u{feff}');
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter as u8)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_blank_record(&record) {
            continue;
        }
        // Header row plus max_rows data rows
        if rows.len() > max_rows {
            return Err(DataError::TooManyRows {
                rows: rows.len(), // data rows so far plus the one that exceeded the limit
                max_rows,
            });
        }
        rows.push(record.iter().map(text_cell).collect());
    }

    if rows.is_empty() {
        return Err(DataError::EmptyFile);
    }

    tracing::debug!(
        rows = rows.len() - 1,
        columns = rows[0].len(),
        delimiter = ?delimiter,
        "Decoded delimited text"
    );

    Ok(RawTable::new(rows))
}

fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn text_cell(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(field.to_string())
    }
}

/// Detect the delimiter to use for parsing
///
/// A `.tsv` extension means tab. Otherwise the most frequent of tab,
/// semicolon and comma across the first five lines wins, with comma as the
/// default.
pub fn detect_delimiter(path: Option<&Path>, content: &str) -> char {
    if let Some(ext) = path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        if ext.eq_ignore_ascii_case("tsv") {
            return '\t';
        }
    }

    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let semicolon_count = first_lines.matches(';').count();

    if tab_count > comma_count && tab_count > semicolon_count {
        '\t'
    } else if semicolon_count > comma_count {
        ';'
    } else {
        ','
    }
}
