//! Data loading and analysis module
//!
//! Decoders turn files into a [`crate::types::RawTable`]; the classifier and
//! chart engine derive everything the dashboard renders from it.
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` which uses the `DataError` type.
//! Analysis itself only fails with `InsufficientData`; malformed cells are
//! coerced rather than rejected. Decoding adds:
//! - `TooLarge`: File exceeds size limits
//! - `TooManyRows`: Dataset exceeds row limits
//! - `Io`: File system errors
//! - `Csv`/`Json`: Parse errors

mod chart_engine;
mod classifier;
mod csv_parser;
mod error;
mod json_parser;
mod loader;
pub mod numeric;

pub use chart_engine::*;
pub use classifier::*;
pub use csv_parser::*;
pub use error::*;
pub use json_parser::*;
pub use loader::*;
