//! Convenience re-exports for the common import-validate-annotate flow
//!
//! ```rust
//! use sheetmark::prelude::*;
//! ```

pub use crate::annotate::SheetErrorExt;
pub use crate::cell_error::{
    CellError, CellErrorCollection, CellViolation, MessageFormatter,
};
pub use crate::constraint::{ConstraintKind, RecordValidator, Violation};
pub use crate::error::{Error, Result};
pub use crate::reader::RowReader;
pub use crate::region::DataRegion;
pub use crate::schema::{RowRecord, Schema, SchemaBuilder};
pub use crate::validator::RowValidator;

pub use sheetmark_core::{CellValue, Workbook, Worksheet};
