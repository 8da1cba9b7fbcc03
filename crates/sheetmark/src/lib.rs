//! # sheetmark
//!
//! Bind spreadsheet rows to typed records, validate them against declarative
//! constraints, and mark every violation on the original sheet: a highlighted
//! fill plus an explanatory comment at the exact cell of the failure.
//!
//! Built for batch data-import pipelines where end users upload a sheet and
//! get the same sheet back with inline error markers.
//!
//! The flow:
//!
//! 1. [`RowReader`] binds a rectangular [`DataRegion`] of a sheet to records
//!    implementing [`RowRecord`], coercing cell text leniently (malformed
//!    content becomes documented defaults, never an error);
//! 2. [`RowValidator`] runs an injected [`RecordValidator`] over the records
//!    and resolves every [`Violation`] to a [`CellError`] with concrete sheet
//!    coordinates and a message from the injected [`MessageFormatter`];
//! 3. [`SheetErrorExt`] paints the resulting [`CellErrorCollection`] onto the
//!    worksheet.
//!
//! ## Example
//!
//! ```rust
//! use sheetmark::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Signup {
//!     email: String,
//!     age: i64,
//! }
//!
//! impl RowRecord for Signup {
//!     fn schema() -> Schema<Self> {
//!         Schema::builder()
//!             .text("email", |s: &mut Signup, v| s.email = v)
//!             .integer("age", |s, v| s.age = v)
//!             .build()
//!     }
//! }
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value_at(0, 0, "a@example.com").unwrap();
//! sheet.set_cell_value_at(0, 1, "17").unwrap();
//!
//! let region = DataRegion::new(0, 0, 1).unwrap();
//! let signups: Vec<Signup> = RowReader::read(&workbook, 0, &region).unwrap();
//!
//! let check = |s: &Signup| -> sheetmark::Result<Vec<Violation>> {
//!     Ok(if s.age < 18 {
//!         vec![Violation::new("age", ConstraintKind::Min { value: 18 })]
//!     } else {
//!         vec![]
//!     })
//! };
//! let format = |v: &CellViolation| format!("violates {}", v.constraint.name());
//!
//! let errors = RowValidator::new(check, format)
//!     .validate(&signups, &region)
//!     .unwrap();
//! assert_eq!(errors.len(), 1);
//!
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! for error in &errors {
//!     sheet.mark_error(error);
//! }
//! assert!(sheet.has_comment_at(0, 1));
//! ```

pub mod annotate;
pub mod cell_error;
pub mod constraint;
pub mod error;
pub mod prelude;
pub mod reader;
pub mod region;
pub mod schema;
pub mod validator;

pub use annotate::{SheetErrorExt, ERROR_FILL_COLOR};
pub use cell_error::{CellError, CellErrorCollection, CellViolation, MessageFormatter};
pub use constraint::{ConstraintKind, RecordValidator, Violation};
pub use error::{Error, Result};
pub use reader::RowReader;
pub use region::DataRegion;
pub use schema::{RowRecord, Schema, SchemaBuilder};
pub use validator::RowValidator;

// Re-export the sheet model this crate operates on
pub use sheetmark_core::{
    address, CellComment, CellData, CellValue, Color, CommentAnchor, FillStyle, FontStyle,
    SheetRow, Style, Workbook, Worksheet,
};
