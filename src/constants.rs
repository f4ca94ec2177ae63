//! Analytics-wide constants.
//!
//! Default thresholds for column classification and chart shaping. Every
//! value here can be overridden through [`crate::settings::AnalyticsSettings`].

// ============================================================================
// Column Classification
// ============================================================================

/// A column is categorical when its distinct count is below this share of
/// its non-empty values...
pub const CATEGORICAL_DISTINCT_RATIO: f64 = 0.3;

/// ...or below this absolute count, whichever is looser.
pub const CATEGORICAL_MAX_DISTINCT: usize = 20;

/// Share of `yyyy-MM-dd` values above which a column counts as date-like
/// and is never treated as categorical.
pub const DATE_VALUE_RATIO: f64 = 0.5;

/// Characters stripped from a cell before it is parsed as a number.
pub const NUMERIC_STRIP_CHARS: &[char] = &['$', '€', '£', '¥', '₹', ',', '%'];

// ============================================================================
// Chart Shaping
// ============================================================================

/// Points rendered by the bar and line charts.
pub const MAX_CHART_ROWS: usize = 20;

/// Slices kept in the donut chart.
pub const MAX_DONUT_SLICES: usize = 8;

/// Label of the collapsed long-tail donut slice when enabled.
pub const DONUT_OTHER_LABEL: &str = "Other";

/// Synthetic row number key in the preview table.
pub const PREVIEW_ID_FIELD: &str = "id";

// ============================================================================
// Data Limits
// ============================================================================

/// Maximum file size for loading, in megabytes.
pub const MAX_FILE_SIZE_MB: usize = 100;

/// Maximum number of data rows accepted from a decoded file.
pub const MAX_ROWS: usize = 100_000;

/// Classification or aggregation slower than this is logged.
pub const SLOW_OPERATION_MS: f64 = 50.0;
