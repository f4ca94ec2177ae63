//! Cell-level tests shared by the classifier and the chart engine.
//!
//! The numeric test and numeric coercion use the same stripping rule, so a
//! value the classifier counts as numeric always coerces to the number it
//! was counted as.

use chrono::NaiveDate;
use crate::constants::NUMERIC_STRIP_CHARS;
use crate::types::CellValue;

/// Parse a formatted number such as `"$1,234.56"` or `"12%"`.
///
/// Currency symbols, commas and percent signs are stripped along with
/// surrounding whitespace. Only finite results count.
///
/// # Examples
/// - `"123"` -> `Some(123.0)`
/// - `"$1,234.56"` -> `Some(1234.56)`
/// - `"45%"` -> `Some(45.0)`
/// - `"abc"` -> `None`
/// - `"inf"` -> `None`
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !NUMERIC_STRIP_CHARS.contains(c))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric value of a cell, if it passes the numeric test
pub fn cell_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
        CellValue::Text(s) => parse_numeric(s),
        CellValue::Empty => None,
    }
}

/// Lenient coercion: anything that is not a number becomes 0
pub fn coerce_number(cell: &CellValue) -> f64 {
    cell_number(cell).unwrap_or(0.0)
}

/// True when the trimmed value is a real `yyyy-MM-dd` calendar date
pub fn is_iso_date(raw: &str) -> bool {
    let s = raw.trim();
    // parse_from_str accepts unpadded fields; insist on the fixed shape
    if s.len() != 10 || s.as_bytes()[4] != b'-' || s.as_bytes()[7] != b'-' {
        return false;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Date test for a cell; only text cells can hold dates
pub fn cell_is_date(cell: &CellValue) -> bool {
    matches!(cell, CellValue::Text(s) if is_iso_date(s))
}
