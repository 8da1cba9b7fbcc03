//! Constraint kinds and violations
//!
//! The constraint engine itself lives outside this crate: anything that can
//! look at a record and report [`Violation`]s qualifies (see
//! [`RecordValidator`]). What is fixed here is the closed set of constraint
//! kinds and how each kind exposes its parameters to message templating.

use std::collections::BTreeMap;

use crate::error::Result;

/// The closed set of declarative constraint kinds
///
/// Each variant carries its own parameters; [`ConstraintKind::message_arguments`]
/// extracts them into the named-argument map message templates consume.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintKind {
    /// Value must contain at least one non-whitespace character
    NotBlank,
    /// Value must be a well-formed email address
    Email,
    /// Value length must fall within `min..=max`
    Size { min: u32, max: u32 },
    /// Numeric value must have at most `integer` integral and `fraction`
    /// fractional digits
    Digits { integer: u32, fraction: u32 },
    /// Value must match the regular expression
    Pattern { regexp: String },
    /// Numeric value must be at least `value`
    Min { value: i64 },
    /// Numeric value must be at most `value`
    Max { value: i64 },
}

impl ConstraintKind {
    /// The symbolic name of the constraint (e.g. `"NotBlank"`)
    pub fn name(&self) -> &'static str {
        match self {
            ConstraintKind::NotBlank => "NotBlank",
            ConstraintKind::Email => "Email",
            ConstraintKind::Size { .. } => "Size",
            ConstraintKind::Digits { .. } => "Digits",
            ConstraintKind::Pattern { .. } => "Pattern",
            ConstraintKind::Min { .. } => "Min",
            ConstraintKind::Max { .. } => "Max",
        }
    }

    /// The constraint's parameters as named message arguments
    ///
    /// Parameterless constraints yield an empty map.
    pub fn message_arguments(&self) -> BTreeMap<&'static str, String> {
        let mut args = BTreeMap::new();
        match self {
            ConstraintKind::NotBlank | ConstraintKind::Email => {}
            ConstraintKind::Size { min, max } => {
                args.insert("min", min.to_string());
                args.insert("max", max.to_string());
            }
            ConstraintKind::Digits { integer, fraction } => {
                args.insert("integer", integer.to_string());
                args.insert("fraction", fraction.to_string());
            }
            ConstraintKind::Pattern { regexp } => {
                args.insert("regexp", regexp.clone());
            }
            ConstraintKind::Min { value } | ConstraintKind::Max { value } => {
                args.insert("value", value.to_string());
            }
        }
        args
    }
}

/// One constraint failure on one field of one record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    /// The record field that failed (the schema's field name)
    pub field: String,
    /// Which constraint failed
    pub constraint: ConstraintKind,
}

impl Violation {
    /// Create a new violation
    pub fn new(field: impl Into<String>, constraint: ConstraintKind) -> Self {
        Self {
            field: field.into(),
            constraint,
        }
    }
}

/// The external validation capability: inspect one record, report violations
///
/// An empty vec means the record is valid. A backend failure (`Err`) aborts
/// the whole validate pass with no partial results.
///
/// Closures qualify directly:
///
/// ```rust
/// use sheetmark::{ConstraintKind, RecordValidator, Violation};
///
/// struct Person { name: String }
///
/// let not_blank = |p: &Person| -> sheetmark::Result<Vec<Violation>> {
///     Ok(if p.name.trim().is_empty() {
///         vec![Violation::new("name", ConstraintKind::NotBlank)]
///     } else {
///         vec![]
///     })
/// };
/// # fn assert_validator<V: RecordValidator<Person>>(_: &V) {}
/// # assert_validator(&not_blank);
/// ```
pub trait RecordValidator<T> {
    /// Validate one record, returning every violation found
    fn validate(&self, record: &T) -> Result<Vec<Violation>>;
}

impl<T, F> RecordValidator<T> for F
where
    F: Fn(&T) -> Result<Vec<Violation>>,
{
    fn validate(&self, record: &T) -> Result<Vec<Violation>> {
        self(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names() {
        assert_eq!(ConstraintKind::NotBlank.name(), "NotBlank");
        assert_eq!(ConstraintKind::Size { min: 1, max: 5 }.name(), "Size");
        assert_eq!(
            ConstraintKind::Pattern {
                regexp: "^a".into()
            }
            .name(),
            "Pattern"
        );
    }

    #[test]
    fn test_parameterless_arguments_are_empty() {
        assert!(ConstraintKind::NotBlank.message_arguments().is_empty());
        assert!(ConstraintKind::Email.message_arguments().is_empty());
    }

    #[test]
    fn test_size_arguments() {
        let args = ConstraintKind::Size { min: 2, max: 30 }.message_arguments();
        assert_eq!(args.get("min").map(String::as_str), Some("2"));
        assert_eq!(args.get("max").map(String::as_str), Some("30"));
    }

    #[test]
    fn test_digits_arguments() {
        let args = ConstraintKind::Digits {
            integer: 5,
            fraction: 2,
        }
        .message_arguments();
        assert_eq!(args.get("integer").map(String::as_str), Some("5"));
        assert_eq!(args.get("fraction").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_pattern_and_threshold_arguments() {
        let args = ConstraintKind::Pattern {
            regexp: "^[0-9]+$".into(),
        }
        .message_arguments();
        assert_eq!(args.get("regexp").map(String::as_str), Some("^[0-9]+$"));

        let args = ConstraintKind::Min { value: 18 }.message_arguments();
        assert_eq!(args.get("value").map(String::as_str), Some("18"));

        let args = ConstraintKind::Max { value: 120 }.message_arguments();
        assert_eq!(args.get("value").map(String::as_str), Some("120"));
    }
}
