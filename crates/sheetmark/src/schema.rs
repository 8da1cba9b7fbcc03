//! Record schemas: the column-binding descriptor for a record type
//!
//! A [`Schema`] replaces runtime reflection: it lists a record type's fields
//! in declaration order, each with an optional pinned column index and a typed
//! apply function that coerces raw cell text and writes the field. Records opt
//! in by implementing [`RowRecord`].
//!
//! Two binding strategies fall out of the descriptor:
//! - *positional*: fields without a pinned column map to the data region's
//!   columns in order (first field = first region column, and so on);
//! - *column-indexed*: every field pins its absolute column with
//!   [`SchemaBuilder::at`], independent of declaration order.

use crate::error::{Error, Result};
use crate::region::DataRegion;

/// A record type that can be bound from sheet rows
///
/// `Default` is the canonical constructor; the schema's apply functions fill
/// in the fields afterwards.
pub trait RowRecord: Default {
    /// The column-binding descriptor for this record type
    fn schema() -> Schema<Self>;
}

type Apply<T> = Box<dyn Fn(&mut T, &str) + Send + Sync>;

/// One field binding: name, optional pinned column, and the apply function
pub(crate) struct Field<T> {
    pub(crate) name: &'static str,
    pub(crate) column: Option<u16>,
    pub(crate) apply: Apply<T>,
}

/// Ordered column-binding descriptor for a record type
pub struct Schema<T> {
    pub(crate) fields: Vec<Field<T>>,
}

impl<T> Schema<T> {
    /// Start building a schema
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Number of fields in the schema
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolve the absolute column index backing a field
    ///
    /// A pinned column wins; otherwise the field's position within the given
    /// region (`start_col` + declaration position). Unknown names fail with
    /// [`Error::UnknownField`].
    pub fn column_of(&self, field_name: &str, region: &DataRegion) -> Result<u16> {
        let (position, field) = self
            .fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.name == field_name)
            .ok_or_else(|| Error::UnknownField(field_name.to_string()))?;

        Ok(match field.column {
            Some(col) => col,
            None => region.start_col() + position as u16,
        })
    }

    /// Check the schema is usable for column-indexed binding
    ///
    /// Every field must pin a column, and there must be at least one field.
    pub(crate) fn require_column_indexes(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::NoColumnIndexes);
        }
        for field in &self.fields {
            if field.column.is_none() {
                return Err(Error::MissingColumnIndex(field.name));
            }
        }
        Ok(())
    }
}

impl<T> std::fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.fields.iter().map(|fd| (fd.name, fd.column)))
            .finish()
    }
}

/// Builder for [`Schema`]
///
/// Field registration order is the positional binding order.
pub struct SchemaBuilder<T> {
    fields: Vec<Field<T>>,
}

impl<T> SchemaBuilder<T> {
    /// Bind a text field: the cell's literal text, `""` when the cell is absent
    pub fn text(self, name: &'static str, set: impl Fn(&mut T, String) + Send + Sync + 'static) -> Self {
        self.push(name, move |record, raw| set(record, raw.to_string()))
    }

    /// Bind an integer field (see [`coerce_integer`] for the parse policy)
    pub fn integer(self, name: &'static str, set: impl Fn(&mut T, i64) + Send + Sync + 'static) -> Self {
        self.push(name, move |record, raw| set(record, coerce_integer(raw)))
    }

    /// Bind a floating-point field; malformed text becomes 0.0
    pub fn float(self, name: &'static str, set: impl Fn(&mut T, f64) + Send + Sync + 'static) -> Self {
        self.push(name, move |record, raw| set(record, coerce_float(raw)))
    }

    /// Bind a boolean field; anything but a case-insensitive "true" is false
    pub fn boolean(self, name: &'static str, set: impl Fn(&mut T, bool) + Send + Sync + 'static) -> Self {
        self.push(name, move |record, raw| set(record, coerce_boolean(raw)))
    }

    /// Bind a field that receives the raw cell text unconverted
    ///
    /// For target types outside the coercion table (dates kept as text,
    /// domain-specific codes); parsing is the record's responsibility.
    pub fn raw(self, name: &'static str, set: impl Fn(&mut T, &str) + Send + Sync + 'static) -> Self {
        self.push(name, set)
    }

    /// Pin the most recently added field to an absolute column index
    ///
    /// # Panics
    ///
    /// Panics if no field has been added yet.
    pub fn at(mut self, column: u16) -> Self {
        let field = self
            .fields
            .last_mut()
            .expect("at() must follow a field registration");
        field.column = Some(column);
        self
    }

    /// Finish the schema
    pub fn build(self) -> Schema<T> {
        Schema {
            fields: self.fields,
        }
    }

    fn push(mut self, name: &'static str, apply: impl Fn(&mut T, &str) + Send + Sync + 'static) -> Self {
        self.fields.push(Field {
            name,
            column: None,
            apply: Box::new(apply),
        });
        self
    }
}

/// Integer coercion: plain parse first; text carrying a decimal point falls
/// back to a float parse truncated toward zero; anything else is 0.
///
/// Malformed cell content is deliberately never an error during binding.
pub(crate) fn coerce_integer(raw: &str) -> i64 {
    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }
    if raw.contains('.') {
        if let Ok(f) = raw.parse::<f64>() {
            return f as i64;
        }
    }
    0
}

/// Float coercion: parse, 0.0 on failure
pub(crate) fn coerce_float(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

/// Boolean coercion: case-insensitive "true", false otherwise
pub(crate) fn coerce_boolean(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}
