//! Raw columns of one row.

use bytes::Bytes;
use rowfield_types::{Data, Format, FromDataType, ToDataRowColumn};

/// Columns of one row, still in wire form.
///
/// Columns carry no type information; pair the row with a
/// [`RowDescription`](crate::RowDescription) to read typed values.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
pub struct DataRow {
    columns: Vec<Data>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column.
    pub fn add(&mut self, value: impl ToDataRowColumn) -> &mut Self {
        self.columns.push(value.to_data_row_column());
        self
    }

    /// Set the column at index, growing the row with NULL columns
    /// when it is shorter.
    pub fn insert(&mut self, index: usize, value: impl ToDataRowColumn, is_null: bool) -> &mut Self {
        if self.columns.len() <= index {
            self.columns.resize(index + 1, Data::null());
        }

        self.columns[index] = if is_null {
            Data::null()
        } else {
            value.to_data_row_column()
        };
        self
    }

    pub fn from_columns(columns: Vec<impl ToDataRowColumn>) -> Self {
        columns.into_iter().collect()
    }

    /// Column bytes. `None` for NULL or missing columns.
    pub fn column(&self, index: usize) -> Option<Bytes> {
        self.columns.get(index).cloned().and_then(Data::into_bytes)
    }

    /// Decode the column at index. NULL, missing and undecodable
    /// columns all read as `None`.
    pub fn get<T: FromDataType>(&self, index: usize, format: Format) -> Option<T> {
        let data = self.get_raw(index)?;
        if data.is_null() {
            return None;
        }
        T::decode(data.as_bytes(), format).ok()
    }

    pub fn get_raw(&self, index: usize) -> Option<&Data> {
        self.columns.get(index)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<T: ToDataRowColumn> FromIterator<T> for DataRow {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(|value| value.to_data_row_column()).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_insert_pads_with_nulls() {
        let mut row = DataRow::new();
        row.insert(4, "widget", false);

        assert_eq!(row.len(), 5);
        assert_eq!(row.get::<String>(4, Format::Text).unwrap(), "widget");
        assert!(row.get_raw(0).unwrap().is_null());
        assert_eq!(row.get::<String>(0, Format::Text), None);

        row.insert(4, "ignored", true);
        assert!(row.get_raw(4).unwrap().is_null());
        assert_eq!(row.len(), 5);
    }

    #[test]
    fn test_from_columns() {
        let row = DataRow::from_columns(vec![Some(5i64), None, Some(-1i64)]);

        assert_eq!(row.len(), 3);
        assert_eq!(row.get::<i64>(0, Format::Text), Some(5));
        assert!(row.get_raw(1).unwrap().is_null());
        assert_eq!(row.get::<i32>(2, Format::Text), Some(-1));
        assert_eq!(row.column(1), None);
        assert_eq!(row.column(3), None);
    }

    #[test]
    fn test_get_decode_failure() {
        let mut row = DataRow::new();
        row.add("not a number").add(true);

        assert_eq!(row.get::<i64>(0, Format::Text), None);
        assert_eq!(row.get::<bool>(1, Format::Text), Some(true));
        assert!(!row.is_empty());
    }
}
