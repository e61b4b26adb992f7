//! Row abstraction consumed by the accessor.

use crate::{Datum, Error};

/// Ordered, positionally and name-addressable fields of one record.
///
/// Implementations report positions outside `0..len()` with
/// [`Error::PositionOutOfRange`] and unknown names with
/// [`Error::LocatorNotFound`]. Any other error from `raw_value` is
/// treated by the accessor as a failed conversion.
pub trait Row {
    /// Number of fields.
    fn len(&self) -> usize;

    /// Is the field at position null.
    fn is_null(&self, position: usize) -> Result<bool, Error>;

    /// Field value at position.
    fn raw_value(&self, position: usize) -> Result<Datum, Error>;

    /// Position of the named field.
    fn ordinal(&self, name: &str) -> Result<usize, Error>;

    /// No fields.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fail if position is outside the row.
    fn check_position(&self, position: usize) -> Result<(), Error> {
        let len = self.len();
        if position < len {
            Ok(())
        } else {
            Err(Error::PositionOutOfRange { position, len })
        }
    }
}

/// Find a field by name: exact match first, then ignoring ASCII case.
pub(crate) fn find_ordinal<'a, I>(mut names: I, name: &str) -> Option<usize>
where
    I: Iterator<Item = &'a str> + Clone,
{
    names
        .clone()
        .position(|candidate| candidate == name)
        .or_else(|| names.position(|candidate| candidate.eq_ignore_ascii_case(name)))
}

/// In-memory row of named values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Datum)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn add(&mut self, name: impl ToString, value: impl Into<Datum>) -> &mut Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    /// Append a field, builder style.
    pub fn with(mut self, name: impl ToString, value: impl Into<Datum>) -> Self {
        self.add(name, value);
        self
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    fn field(&self, position: usize) -> Result<&Datum, Error> {
        self.fields
            .get(position)
            .map(|(_, value)| value)
            .ok_or(Error::PositionOutOfRange {
                position,
                len: self.fields.len(),
            })
    }
}

impl<N: ToString, V: Into<Datum>> FromIterator<(N, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.add(name, value);
        }
        record
    }
}

impl Row for Record {
    fn len(&self) -> usize {
        self.fields.len()
    }

    fn is_null(&self, position: usize) -> Result<bool, Error> {
        Ok(self.field(position)?.is_null())
    }

    fn raw_value(&self, position: usize) -> Result<Datum, Error> {
        self.field(position).cloned()
    }

    fn ordinal(&self, name: &str) -> Result<usize, Error> {
        find_ordinal(self.names(), name).ok_or_else(|| Error::LocatorNotFound(name.to_string()))
    }
}
