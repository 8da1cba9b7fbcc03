//! Cell addressing helpers
//!
//! Columns use the spreadsheet letter scheme (A, B, ..., Z, AA, ...), rows are
//! plain 0-based indices. Both directions of the column encoding are provided.

use crate::error::{Error, Result};
use crate::MAX_COLS;

/// Convert a 0-based column index to its letters form (0 = A, 25 = Z, 26 = AA, ...)
///
/// # Examples
/// ```
/// use sheetmark_core::address::column_name;
///
/// assert_eq!(column_name(0), "A");
/// assert_eq!(column_name(701), "ZZ");
/// assert_eq!(column_name(702), "AAA");
/// ```
pub fn column_name(col: u16) -> String {
    let mut n = col as i32;
    let mut name = String::new();

    while n >= 0 {
        let c = (b'A' + (n % 26) as u8) as char;
        name.insert(0, c);
        n = n / 26 - 1;
    }

    name
}

/// Convert a letters form back to the 0-based column index (A = 0, Z = 25, AA = 26, ...)
pub fn column_from_name(name: &str) -> Result<u16> {
    if name.is_empty() {
        return Err(Error::InvalidColumnName("empty column name".into()));
    }

    let mut col: u32 = 0;
    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnName(format!(
                "invalid column letter '{}' in '{}'",
                c, name
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    let col = col - 1;
    if col >= MAX_COLS as u32 {
        return Err(Error::ColumnOutOfBounds(col as u16, MAX_COLS - 1));
    }

    Ok(col as u16)
}

/// Format a cell position as letters plus the 0-based row number (e.g. `"A6"`)
///
/// Note the row stays 0-based; callers that want the 1-based display row of a
/// spreadsheet UI add 1 themselves.
pub fn cell_address(row: u32, col: u16) -> String {
    format!("{}{}", column_name(col), row)
}

/// Format a cell position as a `"col,row"` pair, useful as a debug id
pub fn cell_coordinate(row: u32, col: u16) -> String {
    format!("{},{}", col, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(1), "B");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(column_name(51), "AZ");
        assert_eq!(column_name(52), "BA");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
        assert_eq!(column_name(16383), "XFD"); // Max Excel column
    }

    #[test]
    fn test_column_from_name() {
        assert_eq!(column_from_name("A").unwrap(), 0);
        assert_eq!(column_from_name("Z").unwrap(), 25);
        assert_eq!(column_from_name("AA").unwrap(), 26);
        assert_eq!(column_from_name("ZZ").unwrap(), 701);
        assert_eq!(column_from_name("AAA").unwrap(), 702);
        assert_eq!(column_from_name("XFD").unwrap(), 16383);

        // Case insensitive
        assert_eq!(column_from_name("a").unwrap(), 0);
        assert_eq!(column_from_name("aa").unwrap(), 26);
    }

    #[test]
    fn test_column_from_name_errors() {
        assert!(column_from_name("").is_err());
        assert!(column_from_name("A1").is_err());
        assert!(column_from_name("XFE").is_err()); // Past the column limit
    }

    #[test]
    fn test_cell_address() {
        assert_eq!(cell_address(6, 0), "A6");
        assert_eq!(cell_address(0, 27), "AB0");
    }

    #[test]
    fn test_cell_coordinate() {
        assert_eq!(cell_coordinate(6, 0), "0,6");
        assert_eq!(cell_coordinate(3, 12), "12,3");
    }

    proptest! {
        #[test]
        fn column_name_round_trips(col in 0u16..MAX_COLS) {
            prop_assert_eq!(column_from_name(&column_name(col)).unwrap(), col);
        }
    }
}
