//! Worksheet type

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::cell::{CellData, CellValue};
use crate::comment::CellComment;
use crate::error::{Error, Result};
use crate::style::{Style, StylePool};
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
///
/// Cells are stored sparsely, row-major. A row that was never touched is
/// structurally absent ([`Worksheet::row`] returns `None`); a row holding only
/// empty cells exists physically. Callers that care about gaps in a data block
/// rely on this distinction.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Row index → physical row
    rows: BTreeMap<u32, SheetRow>,
    /// Shared style pool for deduplication
    style_pool: StylePool,
    /// Cell comments (keyed by (row, col))
    comments: AHashMap<(u32, u16), CellComment>,
    /// Unique comment authors
    comment_authors: Vec<String>,
}

/// A physically present row of cells
#[derive(Debug, Default)]
pub struct SheetRow {
    /// Column index → cell
    cells: BTreeMap<u16, CellData>,
}

impl SheetRow {
    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&CellData> {
        self.cells.get(&col)
    }

    /// Iterate over the row's cells: (col, cell)
    pub fn cells(&self) -> impl Iterator<Item = (u16, &CellData)> {
        self.cells.iter().map(|(&c, d)| (c, d))
    }

    /// Number of cells physically present in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            style_pool: StylePool::new(),
            comments: AHashMap::new(),
            comment_authors: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Row Access ===

    /// Get a physical row, or `None` if the row was never touched
    pub fn row(&self, row: u32) -> Option<&SheetRow> {
        self.rows.get(&row)
    }

    /// The highest physical row index, or `None` for an untouched sheet
    pub fn last_row(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.cells.get(&col))
    }

    /// Get a mutable cell by row and column indices
    pub fn cell_at_mut(&mut self, row: u32, col: u16) -> Option<&mut CellData> {
        self.rows.get_mut(&row).and_then(|r| r.cells.get_mut(&col))
    }

    /// Get cell value by indices (empty if the cell does not exist)
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell_at(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    // === Cell Modification ===

    /// Set a cell value by row and column indices
    ///
    /// Setting [`CellValue::Empty`] still materializes the cell (and its row):
    /// the cell is blank but physically present.
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;

        let value = value.into();
        let row_entry = self.rows.entry(row).or_default();
        match row_entry.cells.entry(col) {
            // An existing cell keeps its style
            Entry::Occupied(mut entry) => entry.get_mut().value = value,
            Entry::Vacant(entry) => {
                entry.insert(CellData::new(value));
            }
        }
        Ok(())
    }

    /// Remove a cell; the row stays physically present even if emptied
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        if let Some(row_entry) = self.rows.get_mut(&row) {
            row_entry.cells.remove(&col);
        }
        self.comments.remove(&(row, col));
    }

    // === Styles ===

    /// Set a cell style by row and column indices
    ///
    /// The cell must already exist; styling a missing cell is an error.
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        let style_index = self.style_pool.get_or_insert(style.clone());
        let cell = self
            .cell_at_mut(row, col)
            .ok_or_else(|| Error::other(format!("no cell at ({}, {})", row, col)))?;
        cell.style_index = style_index;
        Ok(())
    }

    /// Get the non-default style applied to a cell, if any
    pub fn cell_style_at(&self, row: u32, col: u16) -> Option<&Style> {
        let idx = self.cell_at(row, col).map(|c| c.style_index)?;
        if idx == 0 {
            None
        } else {
            self.style_pool.get(idx)
        }
    }

    /// Get a style by its index in this worksheet's style pool
    pub fn style_by_index(&self, style_index: u32) -> Option<&Style> {
        self.style_pool.get(style_index)
    }

    // === Cell Comments ===

    /// Set a comment on a cell by row and column indices
    pub fn set_comment_at(&mut self, row: u32, col: u16, comment: CellComment) {
        // Track unique authors
        if !comment.author.is_empty() && !self.comment_authors.contains(&comment.author) {
            self.comment_authors.push(comment.author.clone());
        }
        self.comments.insert((row, col), comment);
    }

    /// Get a comment from a cell by row and column indices
    pub fn comment_at(&self, row: u32, col: u16) -> Option<&CellComment> {
        self.comments.get(&(row, col))
    }

    /// Remove a comment from a cell by row and column indices
    pub fn remove_comment_at(&mut self, row: u32, col: u16) -> Option<CellComment> {
        self.comments.remove(&(row, col))
    }

    /// Check if a cell has a comment
    pub fn has_comment_at(&self, row: u32, col: u16) -> bool {
        self.comments.contains_key(&(row, col))
    }

    /// Get the number of comments in this worksheet
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Get the list of unique comment authors
    pub fn comment_authors(&self) -> &[String] {
        &self.comment_authors
    }

    // === Bulk Queries ===

    /// Get the number of physically present cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.cells.len()).sum()
    }

    /// Check if the worksheet has no cells
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all cells: (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .iter()
            .flat_map(|(&row, r)| r.cells.iter().map(move |(&col, cell)| (row, col, cell)))
    }

    // === Internal ===

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}
