//! Row validator: run the validation capability over bound records and
//! resolve every violation to a cell error

use crate::cell_error::{CellError, CellErrorCollection, CellViolation, MessageFormatter};
use crate::constraint::RecordValidator;
use crate::error::Result;
use crate::region::DataRegion;
use crate::schema::RowRecord;

/// Validates bound records and collects coordinate-resolved cell errors
///
/// The constraint engine and the message formatting hook are both injected;
/// this type only owns the mapping from abstract violations to concrete sheet
/// coordinates and display messages.
pub struct RowValidator<V, F> {
    validator: V,
    formatter: F,
}

impl<V, F> RowValidator<V, F>
where
    F: MessageFormatter,
{
    /// Create a validator from the two injected capabilities
    pub fn new(validator: V, formatter: F) -> Self {
        Self {
            validator,
            formatter,
        }
    }

    /// Validate records read from `region`, in their read order
    ///
    /// Record `i` sits at region-relative row `i`; each violation's column is
    /// resolved by asking the record schema which column backs the violated
    /// field. Every returned error already carries its formatted message, and
    /// the collection's construction derives the absolute coordinates.
    ///
    /// A failure of the validation capability itself aborts the whole pass.
    pub fn validate<T>(&self, records: &[T], region: &DataRegion) -> Result<CellErrorCollection>
    where
        T: RowRecord,
        V: RecordValidator<T>,
    {
        let schema = T::schema();

        let mut errors: Vec<CellError> = Vec::new();
        for (row_index, record) in records.iter().enumerate() {
            for violation in self.validator.validate(record)? {
                let col_index = schema.column_of(&violation.field, region)?;
                let cell_violation =
                    CellViolation::new(row_index as u32, col_index, violation.constraint);
                let message = self.formatter.format(&cell_violation);
                errors.push(cell_violation.into_error(message));
            }
        }

        Ok(CellErrorCollection::new(errors, *region))
    }
}
