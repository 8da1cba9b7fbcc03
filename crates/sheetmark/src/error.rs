//! Error types for sheetmark

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetmark
///
/// Configuration misuse is always fatal to the calling operation and produces
/// no partial output. Malformed cell content is never an error: type coercion
/// substitutes documented defaults, and constraint violations are returned as
/// data, not raised.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed data region
    #[error("Invalid data region: start column {start} is greater than end column {end}")]
    InvalidRegion { start: u16, end: u16 },

    /// A field used with column-indexed binding lacks a declared column
    #[error("Field `{0}` does not declare a column index")]
    MissingColumnIndex(&'static str),

    /// Column-indexed binding requires at least one declared column
    #[error("Record schema declares no column indexes")]
    NoColumnIndexes,

    /// Field-name lookup against the record schema failed
    #[error("Unknown field `{0}` in record schema")]
    UnknownField(String),

    /// Sheet model error
    #[error(transparent)]
    Sheet(#[from] sheetmark_core::Error),

    /// The validation backend itself failed
    #[error("Validation backend failed: {0}")]
    Validation(String),
}
