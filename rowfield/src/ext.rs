//! Accessor methods on every [`Row`].

use once_cell::sync::Lazy;

use crate::{
    accessor::FieldAccessor, locator::Locator, row::Row, target::TargetType, value::FieldValue,
    Datum, Error,
};

static ACCESSOR: Lazy<FieldAccessor> = Lazy::new(FieldAccessor::default);

/// Typed reads directly on a row, using the default accessor.
///
/// ```
/// use rowfield::{Record, RowExt};
///
/// let row = Record::new().with("qty", " 12 ").with("note", rowfield::Datum::Null);
/// assert_eq!(row.value_by_name::<i32>("qty").unwrap(), 12);
/// assert_eq!(row.value_by_name::<String>("note").unwrap(), "");
/// assert!(row.is_null_by_name("note").unwrap());
/// ```
pub trait RowExt: Row {
    /// Field at position as `T`.
    fn value<T: FieldValue>(&self, position: usize) -> Result<T, Error> {
        ACCESSOR.get(self, position)
    }

    /// Named field as `T`.
    fn value_by_name<T: FieldValue>(&self, name: &str) -> Result<T, Error> {
        ACCESSOR.get_by_name(self, name)
    }

    /// Field converted to `target`.
    fn value_as(&self, target: TargetType, locator: impl Into<Locator>) -> Result<Datum, Error> {
        ACCESSOR.get_value(self, target, locator)
    }

    /// Is the named field null.
    fn is_null_by_name(&self, name: &str) -> Result<bool, Error> {
        ACCESSOR.is_null(self, name)
    }
}

impl<R: Row + ?Sized> RowExt for R {}
