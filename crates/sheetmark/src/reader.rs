//! Row reader: bind sheet rows to typed records
//!
//! Two entry points, one per binding strategy. Both walk the sheet from the
//! region's start row and stop, without error, at the first structurally
//! absent row. A row that exists but holds only blank cells still produces a
//! record: gap detection across a data block is the annotator's concern, not
//! the reader's.

use sheetmark_core::{SheetRow, Workbook};

use crate::error::Result;
use crate::region::DataRegion;
use crate::schema::{RowRecord, Schema};

/// Reads a rectangular region of a sheet into typed records
pub struct RowReader;

impl RowReader {
    /// Read with positional binding
    ///
    /// The record's fields, in schema declaration order, map one-to-one onto
    /// the region's columns in order. Missing cells (including columns past
    /// the region's width) bind as absent, so coercion yields defaults.
    pub fn read<T: RowRecord>(
        workbook: &Workbook,
        sheet_index: usize,
        region: &DataRegion,
    ) -> Result<Vec<T>> {
        let sheet = workbook.try_worksheet(sheet_index)?;
        let schema = T::schema();

        let mut records = Vec::new();
        let mut row_index = region.start_row();
        while let Some(row) = sheet.row(row_index) {
            let texts: Vec<String> = region
                .columns()
                .map(|col| cell_text(row, col))
                .collect();

            let mut record = T::default();
            for (position, field) in schema.fields.iter().enumerate() {
                let raw = texts.get(position).map(String::as_str).unwrap_or("");
                (field.apply)(&mut record, raw);
            }
            records.push(record);
            row_index += 1;
        }

        log::debug!(
            "bound {} record(s) from rows {}..{} of sheet {}",
            records.len(),
            region.start_row(),
            row_index,
            sheet_index
        );
        Ok(records)
    }

    /// Read with column-indexed binding
    ///
    /// Every schema field must pin an absolute column via
    /// [`SchemaBuilder::at`](crate::schema::SchemaBuilder::at); the check runs
    /// before any row is touched and fails with
    /// [`Error::MissingColumnIndex`](crate::Error::MissingColumnIndex) or
    /// [`Error::NoColumnIndexes`](crate::Error::NoColumnIndexes).
    pub fn read_indexed<T: RowRecord>(
        workbook: &Workbook,
        sheet_index: usize,
        region: &DataRegion,
    ) -> Result<Vec<T>> {
        let sheet = workbook.try_worksheet(sheet_index)?;
        let schema = T::schema();
        schema.require_column_indexes()?;

        let mut records = Vec::new();
        let mut row_index = region.start_row();
        while let Some(row) = sheet.row(row_index) {
            records.push(Self::bind_indexed(row, &schema)?);
            row_index += 1;
        }

        Ok(records)
    }

    fn bind_indexed<T: RowRecord>(row: &SheetRow, schema: &Schema<T>) -> Result<T> {
        let mut record = T::default();
        for field in &schema.fields {
            // require_column_indexes guarantees the pin; re-checked rather
            // than unwrapped so a broken invariant surfaces as an error
            let col = field
                .column
                .ok_or(crate::error::Error::MissingColumnIndex(field.name))?;
            let raw = cell_text(row, col);
            (field.apply)(&mut record, &raw);
        }
        Ok(record)
    }
}

/// The display text of a cell, `""` when the cell is absent
fn cell_text(row: &SheetRow, col: u16) -> String {
    row.cell(col).map(|c| c.value.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::schema::Schema;
    use pretty_assertions::assert_eq;
    use sheetmark_core::CellValue;

    #[derive(Debug, Default, PartialEq)]
    struct Member {
        name: String,
        age: i64,
        active: bool,
    }

    impl RowRecord for Member {
        fn schema() -> Schema<Self> {
            Schema::builder()
                .text("name", |m: &mut Member, v| m.name = v)
                .integer("age", |m, v| m.age = v)
                .boolean("active", |m, v| m.active = v)
                .build()
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Sparse {
        id: i64,
        label: String,
    }

    impl RowRecord for Sparse {
        fn schema() -> Schema<Self> {
            Schema::builder()
                .integer("id", |s: &mut Sparse, v| s.id = v)
                .at(3)
                .text("label", |s, v| s.label = v)
                .at(1)
                .build()
        }
    }

    #[derive(Debug, Default)]
    struct Unpinned {
        name: String,
    }

    impl RowRecord for Unpinned {
        fn schema() -> Schema<Self> {
            Schema::builder()
                .text("name", |u: &mut Unpinned, v| u.name = v)
                .build()
        }
    }

    fn member_workbook() -> Workbook {
        let mut wb = Workbook::new();
        let sheet = wb.worksheet_mut(0).unwrap();
        for (row, (name, age, active)) in
            [("Ann", "31", "true"), ("Bob", "45.9", "FALSE"), ("Cat", "", "x")]
                .iter()
                .enumerate()
        {
            sheet.set_cell_value_at(row as u32, 0, *name).unwrap();
            sheet.set_cell_value_at(row as u32, 1, *age).unwrap();
            sheet.set_cell_value_at(row as u32, 2, *active).unwrap();
        }
        wb
    }

    #[test]
    fn test_positional_read() {
        let wb = member_workbook();
        let region = DataRegion::new(0, 0, 2).unwrap();

        let members: Vec<Member> = RowReader::read(&wb, 0, &region).unwrap();

        assert_eq!(
            members,
            vec![
                Member {
                    name: "Ann".into(),
                    age: 31,
                    active: true
                },
                Member {
                    name: "Bob".into(),
                    age: 45, // truncated toward zero
                    active: false
                },
                Member {
                    name: "Cat".into(),
                    age: 0,
                    active: false
                },
            ]
        );
    }

    #[test]
    fn test_read_stops_at_structural_gap() {
        let mut wb = member_workbook();
        let sheet = wb.worksheet_mut(0).unwrap();
        // Row 3 stays untouched; row 4 exists again but must not be reached
        sheet.set_cell_value_at(4, 0, "Dan").unwrap();

        let region = DataRegion::new(0, 0, 2).unwrap();
        let members: Vec<Member> = RowReader::read(&wb, 0, &region).unwrap();

        assert_eq!(members.len(), 3);
    }

    #[test]
    fn test_blank_but_present_row_still_binds() {
        let mut wb = member_workbook();
        let sheet = wb.worksheet_mut(0).unwrap();
        // Physically present, all cells blank
        sheet.set_cell_value_at(3, 0, CellValue::Empty).unwrap();

        let region = DataRegion::new(0, 0, 2).unwrap();
        let members: Vec<Member> = RowReader::read(&wb, 0, &region).unwrap();

        assert_eq!(members.len(), 4);
        assert_eq!(members[3], Member::default());
    }

    #[test]
    fn test_missing_cells_bind_as_defaults() {
        let mut wb = Workbook::new();
        let sheet = wb.worksheet_mut(0).unwrap();
        // Only the name column is populated
        sheet.set_cell_value_at(0, 0, "Solo").unwrap();

        let region = DataRegion::new(0, 0, 2).unwrap();
        let members: Vec<Member> = RowReader::read(&wb, 0, &region).unwrap();

        assert_eq!(
            members,
            vec![Member {
                name: "Solo".into(),
                age: 0,
                active: false
            }]
        );
    }

    #[test]
    fn test_region_narrower_than_schema() {
        let wb = member_workbook();
        // Single-column region: only the first field sees data
        let region = DataRegion::new(0, 0, 0).unwrap();

        let members: Vec<Member> = RowReader::read(&wb, 0, &region).unwrap();
        assert_eq!(members[0].name, "Ann");
        assert_eq!(members[0].age, 0);
    }

    #[test]
    fn test_indexed_read() {
        let mut wb = Workbook::new();
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet.set_cell_value_at(0, 1, "widget").unwrap();
        sheet.set_cell_value_at(0, 3, "77").unwrap();

        let region = DataRegion::new(0, 0, 4).unwrap();
        let rows: Vec<Sparse> = RowReader::read_indexed(&wb, 0, &region).unwrap();

        assert_eq!(
            rows,
            vec![Sparse {
                id: 77,
                label: "widget".into()
            }]
        );
    }

    #[test]
    fn test_indexed_read_requires_pins_before_touching_rows() {
        let wb = member_workbook();
        let region = DataRegion::new(0, 0, 2).unwrap();

        let result: Result<Vec<Unpinned>> = RowReader::read_indexed(&wb, 0, &region);
        assert!(matches!(result, Err(Error::MissingColumnIndex("name"))));
    }

    #[test]
    fn test_sheet_index_out_of_bounds() {
        let wb = member_workbook();
        let region = DataRegion::new(0, 0, 2).unwrap();

        let result: Result<Vec<Member>> = RowReader::read(&wb, 7, &region);
        assert!(matches!(
            result,
            Err(Error::Sheet(sheetmark_core::Error::SheetOutOfBounds(7, 1)))
        ));
    }

    #[test]
    fn test_numeric_and_boolean_cells_bind_via_display_text() {
        let mut wb = Workbook::new();
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet.set_cell_value_at(0, 0, "Eve").unwrap();
        sheet.set_cell_value_at(0, 1, 28.0).unwrap();
        sheet.set_cell_value_at(0, 2, true).unwrap();

        let region = DataRegion::new(0, 0, 2).unwrap();
        let members: Vec<Member> = RowReader::read(&wb, 0, &region).unwrap();

        assert_eq!(
            members,
            vec![Member {
                name: "Eve".into(),
                age: 28,
                active: true
            }]
        );
    }
}
