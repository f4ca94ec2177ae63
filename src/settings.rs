//! Analytics settings.
//!
//! Thresholds and limits are read from a JSON file so they can be tuned
//! without rebuilding. Every field is optional in the file; missing fields
//! take the defaults from [`crate::constants`].
//!
//! ```json
//! { "categorical_max_distinct": 12, "donut_other_bucket": true }
//! ```

use crate::constants::{
    CATEGORICAL_DISTINCT_RATIO, CATEGORICAL_MAX_DISTINCT, DATE_VALUE_RATIO, MAX_CHART_ROWS,
    MAX_DONUT_SLICES, MAX_FILE_SIZE_MB, MAX_ROWS, SLOW_OPERATION_MS,
};
use crate::data::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const SETTINGS_DIR: &str = "esg-analytics";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Distinct/non-empty ratio under which a column is categorical
    pub categorical_ratio: f64,
    /// Distinct count under which a column is categorical
    pub categorical_max_distinct: usize,
    /// Share of ISO dates above which a column is date-like
    pub date_ratio: f64,
    /// Points kept in bar and line series
    pub max_chart_rows: usize,
    /// Slices kept in the donut series
    pub max_donut_slices: usize,
    /// Collapse dropped donut groups into one "Other" slice
    pub donut_other_bucket: bool,
    pub max_file_size_mb: usize,
    pub max_rows: usize,
    /// Threshold for slow-operation warnings
    pub slow_operation_ms: f64,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            categorical_ratio: CATEGORICAL_DISTINCT_RATIO,
            categorical_max_distinct: CATEGORICAL_MAX_DISTINCT,
            date_ratio: DATE_VALUE_RATIO,
            max_chart_rows: MAX_CHART_ROWS,
            max_donut_slices: MAX_DONUT_SLICES,
            donut_other_bucket: false,
            max_file_size_mb: MAX_FILE_SIZE_MB,
            max_rows: MAX_ROWS,
            slow_operation_ms: SLOW_OPERATION_MS,
        }
    }
}

impl AnalyticsSettings {
    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DataResult<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| DataError::Settings(format!("{}: {}", path.display(), e)))
    }

    /// Write as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> DataResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// `<config dir>/esg-analytics/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}
