//! Data row paired with its description.

use rowfield_types::Datum;

use crate::{data_row::DataRow, row::Row, row_description::RowDescription, Error};

/// Implements [`Row`] over raw columns, decoding on read.
///
/// The field count is the number of described fields. A described
/// column missing from the data row reads as null.
#[derive(Debug, Clone, Copy)]
pub struct DescribedRow<'a> {
    rd: &'a RowDescription,
    data_row: &'a DataRow,
}

impl<'a> DescribedRow<'a> {
    pub fn new(rd: &'a RowDescription, data_row: &'a DataRow) -> Self {
        Self { rd, data_row }
    }

    pub fn row_description(&self) -> &'a RowDescription {
        self.rd
    }

    pub fn data_row(&self) -> &'a DataRow {
        self.data_row
    }
}

impl Row for DescribedRow<'_> {
    fn len(&self) -> usize {
        self.rd.len()
    }

    fn is_null(&self, position: usize) -> Result<bool, Error> {
        self.check_position(position)?;
        Ok(self
            .data_row
            .get_raw(position)
            .map(|data| data.is_null())
            .unwrap_or(true))
    }

    fn raw_value(&self, position: usize) -> Result<Datum, Error> {
        let field = self.rd.field(position).ok_or(Error::PositionOutOfRange {
            position,
            len: self.len(),
        })?;

        match self.data_row.get_raw(position) {
            Some(data) => Ok(Datum::new(
                data.as_bytes(),
                field.data_type,
                field.format,
                data.is_null(),
            )?),
            None => Ok(Datum::Null),
        }
    }

    fn ordinal(&self, name: &str) -> Result<usize, Error> {
        self.rd
            .field_index(name)
            .ok_or_else(|| Error::LocatorNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod test {
    use rowfield_types::{DataType, Format};

    use super::*;
    use crate::row_description::Field;

    fn row() -> (RowDescription, DataRow) {
        let rd = RowDescription::new(&[
            Field::text("id", DataType::Bigint),
            Field::text("name", DataType::Text),
            Field::binary("score", DataType::Double),
            Field::text("note", DataType::Text),
        ]);
        let mut dr = DataRow::new();
        dr.add(42i64)
            .add(" alice ")
            .add(bytes::Bytes::copy_from_slice(&1.5f64.to_be_bytes()));
        (rd, dr)
    }

    #[test]
    fn test_described_row_decodes() {
        let (rd, dr) = row();
        let row = DescribedRow::new(&rd, &dr);

        assert_eq!(row.len(), 4);
        assert_eq!(row.raw_value(0).unwrap(), Datum::Bigint(42));
        assert_eq!(row.raw_value(1).unwrap(), Datum::Text(" alice ".into()));
        assert_eq!(row.raw_value(2).unwrap(), Datum::Double(1.5));
        assert_eq!(row.ordinal("score").unwrap(), 2);
        assert_eq!(
            row.data_row().get::<f64>(2, Format::Binary),
            Some(1.5)
        );
    }

    #[test]
    fn test_missing_column_is_null() {
        let (rd, dr) = row();
        let row = DescribedRow::new(&rd, &dr);

        assert!(row.is_null(3).unwrap());
        assert_eq!(row.raw_value(3).unwrap(), Datum::Null);
    }

    #[test]
    fn test_out_of_range_and_unknown_name() {
        let (rd, dr) = row();
        let row = DescribedRow::new(&rd, &dr);

        assert!(matches!(
            row.is_null(4),
            Err(Error::PositionOutOfRange { position: 4, len: 4 })
        ));
        assert!(matches!(
            row.raw_value(9),
            Err(Error::PositionOutOfRange { position: 9, len: 4 })
        ));
        assert!(matches!(row.ordinal("nope"), Err(Error::LocatorNotFound(_))));
    }

    #[test]
    fn test_decode_failure_is_type_error() {
        let rd = RowDescription::new(&[Field::text("n", DataType::Integer)]);
        let mut dr = DataRow::new();
        dr.add("twelve");
        let row = DescribedRow::new(&rd, &dr);

        assert!(matches!(row.raw_value(0), Err(Error::Type(_))));
    }
}
