//! # sheetmark-core
//!
//! In-memory sheet model for the sheetmark import-validation library.
//!
//! This crate provides the fundamental types sheetmark operates on:
//! - [`CellValue`] - Cell values (numbers, strings, booleans, dates, formulas)
//! - [`Style`] and friends - Cell formatting (fonts, fills)
//! - [`CellComment`] - Per-cell notes with an optional anchor box
//! - [`Workbook`], [`Worksheet`] - The document structures
//! - [`address`] - Column letters / cell address encoding
//!
//! File format parsing and writing are deliberately absent: a workbook here is
//! what an upstream reader hands over, and what a downstream writer
//! re-serializes after annotation.
//!
//! ## Example
//!
//! ```rust
//! use sheetmark_core::{Workbook, CellValue};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value_at(0, 0, "Hello").unwrap();
//! sheet.set_cell_value_at(0, 1, 42.0).unwrap();
//!
//! assert_eq!(sheet.value_at(0, 1), CellValue::Number(42.0));
//! ```

pub mod address;
pub mod cell;
pub mod comment;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellData, CellValue};
pub use comment::{CellComment, CommentAnchor};
pub use error::{Error, Result};
pub use style::{Color, FillStyle, FontStyle, Style, StylePool};
pub use workbook::Workbook;
pub use worksheet::{SheetRow, Worksheet};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
