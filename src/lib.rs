//! Spreadsheet analytics for ESG reporting dashboards.
//!
//! Takes a decoded table (header row plus data rows), infers what each
//! column holds and derives chart-ready series for bar, line and donut
//! renderers together with a flat preview table.
//!
//! ```ignore
//! use esg_analytics::data::{build_chart_data, classify_columns, parse_csv_content};
//!
//! let table = parse_csv_content("Month,Sales\nJan,100\nFeb,200", ',')?;
//! let columns = classify_columns(&table)?;
//! let chart = build_chart_data(&table, Some("Month"), Some("Sales"))?;
//! ```

pub mod constants;
pub mod data;
pub mod logging;
pub mod perf;
pub mod session;
pub mod settings;
pub mod types;
