//! Sheet annotator: paint cell errors onto a live worksheet
//!
//! Three independent operations, exposed as an extension trait on
//! [`Worksheet`]: wiping previous error formatting from a region, marking one
//! resolved [`CellError`], and scanning a region for holes (blank rows inside
//! an otherwise contiguous data block).
//!
//! None of the operations raise for missing rows or cells; absence means
//! there is nothing to do. Marking is not idempotent: re-marking a cell
//! concatenates messages instead of replacing them, so callers re-running a
//! validation cycle clear first.

use sheetmark_core::{
    address, CellComment, Color, CommentAnchor, FillStyle, SheetRow, Worksheet,
};

use crate::cell_error::CellError;
use crate::region::DataRegion;

/// Solid background applied to error cells (lemon chiffon)
pub const ERROR_FILL_COLOR: Color = Color::rgb(255, 250, 205);

/// Author tag attached to error comments
// TODO make the author configurable
const ERROR_COMMENT_AUTHOR: &str = "sheetmark";

/// Error-annotation operations on a worksheet
pub trait SheetErrorExt {
    /// Remove error formatting and comments from every existing cell in the
    /// region's bounds
    ///
    /// Rows run from the region's start to `last_row` (inclusive), clamped to
    /// the sheet's last physical row; `None` means unbounded. Fills reset to
    /// no-fill/automatic, other style attributes stay untouched.
    fn clear_errors(&mut self, region: &DataRegion, last_row: Option<u32>);

    /// Highlight the error's cell and attach its message as a comment
    ///
    /// No-op when the cell does not exist. If the cell already carries a
    /// comment, the old text and the new message merge into one comment body
    /// (the format allows a single comment per cell).
    fn mark_error(&mut self, error: &CellError);

    /// Detect a hole in the region's data block
    ///
    /// True when the start row is blank, or when a blank row shows up between
    /// two non-blank rows further down. Rows are scanned up to `last_row`
    /// clamped to the sheet's last physical row. A missing row counts as
    /// blank; a blank row is one whose every cell across the region's columns
    /// is blank.
    fn has_any_blank_rows(&self, region: &DataRegion, last_row: Option<u32>) -> bool;
}

impl SheetErrorExt for Worksheet {
    fn clear_errors(&mut self, region: &DataRegion, last_row: Option<u32>) {
        let Some(sheet_last) = self.last_row() else {
            return;
        };
        let end = last_row.map_or(sheet_last, |lr| lr.min(sheet_last));

        for row_num in region.start_row()..=end {
            if self.row(row_num).is_none() {
                continue;
            }
            for col_num in region.columns() {
                if self.cell_at(row_num, col_num).is_none() {
                    continue;
                }

                // Removes foreground fill, keeps the rest of the style
                let mut style = self
                    .cell_style_at(row_num, col_num)
                    .cloned()
                    .unwrap_or_default();
                style.fill = FillStyle::None;
                let _ = self.set_cell_style_at(row_num, col_num, &style);

                // Removes cell comment
                self.remove_comment_at(row_num, col_num);
            }
        }
    }

    fn mark_error(&mut self, error: &CellError) {
        let row = error.actual_row_index();
        let col = error.actual_col_index();

        // Finds the cell
        if self.cell_at(row, col).is_none() {
            log::trace!(
                "no cell at {}; error mark skipped",
                address::cell_coordinate(row, col)
            );
            return;
        }

        // More than one cell comment is not allowed, so any previous comment
        // text is folded into the new one
        let text = match self.comment_at(row, col) {
            Some(previous) => format!("{}, {}", previous.text, error.message()),
            None => error.message().to_string(),
        };
        self.remove_comment_at(row, col);

        // Places the comment box at plus 2 cells horizontally and 1 cell
        // vertically from the marked cell
        let anchor = CommentAnchor::new(row, col, row + 1, col + 2);
        self.set_comment_at(
            row,
            col,
            CellComment::new(ERROR_COMMENT_AUTHOR, text).with_anchor(anchor),
        );

        // Applies the error highlight on top of whatever style the cell has
        let mut style = self.cell_style_at(row, col).cloned().unwrap_or_default();
        style.fill = FillStyle::solid(ERROR_FILL_COLOR);
        let _ = self.set_cell_style_at(row, col, &style);
    }

    fn has_any_blank_rows(&self, region: &DataRegion, last_row: Option<u32>) -> bool {
        // A blank first row is itself a hole: no data starts where expected
        if is_blank_row(self.row(region.start_row()), region) {
            return true;
        }

        let Some(sheet_last) = self.last_row() else {
            return false;
        };
        let end = last_row.map_or(sheet_last, |lr| lr.min(sheet_last));

        let mut found_non_blank_row = false;
        let mut found_blank_after_non_blank = false;
        for row_num in region.start_row() + 1..=end {
            if is_blank_row(self.row(row_num), region) {
                if found_non_blank_row {
                    found_blank_after_non_blank = true;
                }
            } else {
                if found_blank_after_non_blank {
                    return true;
                }
                found_non_blank_row = true;
            }
        }

        false
    }
}

/// A missing row is blank; an existing one is blank when every cell across
/// the region's columns is blank
fn is_blank_row(row: Option<&SheetRow>, region: &DataRegion) -> bool {
    match row {
        None => true,
        Some(row) => region
            .columns()
            .all(|col| row.cell(col).map_or(true, |cell| cell.value.is_blank())),
    }
}
