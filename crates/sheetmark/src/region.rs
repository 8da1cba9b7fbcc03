//! The rectangular data region of a sheet

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// The rectangular block of a sheet holding importable data
///
/// Rows run from `start_row` downward without a declared end (reading stops at
/// the first structural gap); columns span the inclusive
/// `start_col..=end_col` range. All indices are 0-based. Constructed once per
/// read/validate operation and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataRegion {
    start_row: u32,
    start_col: u16,
    end_col: u16,
}

impl DataRegion {
    /// Create a new data region
    ///
    /// Fails when `start_col` is greater than `end_col`.
    pub fn new(start_row: u32, start_col: u16, end_col: u16) -> Result<Self> {
        if start_col > end_col {
            return Err(Error::InvalidRegion {
                start: start_col,
                end: end_col,
            });
        }

        Ok(Self {
            start_row,
            start_col,
            end_col,
        })
    }

    /// First data row (0-based)
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// First data column (0-based)
    pub fn start_col(&self) -> u16 {
        self.start_col
    }

    /// Last data column (0-based, inclusive)
    pub fn end_col(&self) -> u16 {
        self.end_col
    }

    /// The inclusive column index range
    pub fn columns(&self) -> RangeInclusive<u16> {
        self.start_col..=self.end_col
    }

    /// Number of columns in the region
    pub fn column_count(&self) -> u16 {
        self.end_col - self.start_col + 1
    }
}
