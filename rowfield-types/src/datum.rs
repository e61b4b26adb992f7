//! Dynamically typed column value.

use std::fmt::Display;

use ::uuid::Uuid;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;

use super::*;

/// Column value decoded from the wire, or produced by a conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Datum {
    #[default]
    Null,
    Bool(bool),
    SmallInt(i16),
    Integer(i32),
    Bigint(i64),
    Real(f32),
    Double(f64),
    Numeric(Decimal),
    Text(String),
    Bytea(Bytes),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<FixedOffset>),
    Uuid(Uuid),
}

impl Datum {
    /// Decode column bytes given the column's data type and format.
    pub fn new(
        bytes: &[u8],
        data_type: DataType,
        encoding: Format,
        null: bool,
    ) -> Result<Self, Error> {
        if null {
            return Ok(Datum::Null);
        }

        Ok(match data_type {
            DataType::Bool => Datum::Bool(bool::decode(bytes, encoding)?),
            DataType::Bytea => Datum::Bytea(Bytes::decode(bytes, encoding)?),
            DataType::SmallInt => Datum::SmallInt(i16::decode(bytes, encoding)?),
            DataType::Integer => Datum::Integer(i32::decode(bytes, encoding)?),
            DataType::Bigint => Datum::Bigint(i64::decode(bytes, encoding)?),
            DataType::Real => Datum::Real(f32::decode(bytes, encoding)?),
            DataType::Double => Datum::Double(f64::decode(bytes, encoding)?),
            DataType::Numeric => Datum::Numeric(Decimal::decode(bytes, encoding)?),
            DataType::Text => Datum::Text(String::decode(bytes, encoding)?),
            DataType::Timestamp => Datum::Timestamp(NaiveDateTime::decode(bytes, encoding)?),
            DataType::TimestampTz => {
                Datum::TimestampTz(DateTime::<FixedOffset>::decode(bytes, encoding)?)
            }
            DataType::Uuid => Datum::Uuid(Uuid::decode(bytes, encoding)?),
            DataType::Other(_) => match encoding {
                Format::Text => Datum::Text(String::decode(bytes, encoding)?),
                Format::Binary => Datum::Bytea(Bytes::copy_from_slice(bytes)),
            },
        })
    }

    /// Encode the value, e.g. to put it back into a data row.
    pub fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match self {
            Datum::Null => Ok(Bytes::new()),
            Datum::Bool(v) => v.encode(encoding),
            Datum::SmallInt(v) => v.encode(encoding),
            Datum::Integer(v) => v.encode(encoding),
            Datum::Bigint(v) => v.encode(encoding),
            Datum::Real(v) => v.encode(encoding),
            Datum::Double(v) => v.encode(encoding),
            Datum::Numeric(v) => v.encode(encoding),
            Datum::Text(v) => v.encode(encoding),
            Datum::Bytea(v) => v.encode(encoding),
            Datum::Timestamp(v) => v.encode(encoding),
            Datum::TimestampTz(v) => v.encode(encoding),
            Datum::Uuid(v) => v.encode(encoding),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// Name of the variant's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Datum::Null => "null",
            Datum::Bool(_) => "bool",
            Datum::SmallInt(_) => "smallint",
            Datum::Integer(_) => "integer",
            Datum::Bigint(_) => "bigint",
            Datum::Real(_) => "real",
            Datum::Double(_) => "double precision",
            Datum::Numeric(_) => "numeric",
            Datum::Text(_) => "text",
            Datum::Bytea(_) => "bytea",
            Datum::Timestamp(_) => "timestamp",
            Datum::TimestampTz(_) => "timestamptz",
            Datum::Uuid(_) => "uuid",
        }
    }
}

impl Display for Datum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Datum::Null => Ok(()),
            Datum::Bool(v) => write!(f, "{}", v),
            Datum::SmallInt(v) => write!(f, "{}", v),
            Datum::Integer(v) => write!(f, "{}", v),
            Datum::Bigint(v) => write!(f, "{}", v),
            Datum::Real(v) => write!(f, "{}", v),
            Datum::Double(v) => write!(f, "{}", v),
            Datum::Numeric(v) => write!(f, "{}", v),
            Datum::Text(v) => write!(f, "{}", v),
            Datum::Bytea(v) => write!(f, "{}", bytea::to_hex(v)),
            Datum::Timestamp(v) => write!(f, "{}", v),
            Datum::TimestampTz(v) => write!(f, "{}", v),
            Datum::Uuid(v) => write!(f, "{}", v),
        }
    }
}

impl ToDataRowColumn for Datum {
    fn to_data_row_column(&self) -> Data {
        match self {
            Datum::Null => Data::null(),
            datum => datum.encode(Format::Text).unwrap_or_default().into(),
        }
    }
}

macro_rules! from_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Datum {
                fn from(value: $ty) -> Self {
                    Datum::$variant(value)
                }
            }
        )+
    };
}

from_value!(
    bool => Bool,
    i16 => SmallInt,
    i32 => Integer,
    i64 => Bigint,
    f32 => Real,
    f64 => Double,
    Decimal => Numeric,
    String => Text,
    Bytes => Bytea,
    NaiveDateTime => Timestamp,
    DateTime<FixedOffset> => TimestampTz,
    Uuid => Uuid,
);

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::Text(value.to_string())
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Datum::Null)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_datum_null_ignores_bytes() {
        let datum = Datum::new(b"garbage", DataType::Integer, Format::Text, true).unwrap();
        assert_eq!(datum, Datum::Null);
        assert_eq!(datum.to_string(), "");
    }

    #[test]
    fn test_datum_decode_by_type() {
        assert_eq!(
            Datum::new(b"42", DataType::Integer, Format::Text, false).unwrap(),
            Datum::Integer(42)
        );
        assert_eq!(
            Datum::new(b"t", DataType::Bool, Format::Text, false).unwrap(),
            Datum::Bool(true)
        );
        assert_eq!(
            Datum::new(&[0, 0, 0, 7], DataType::Integer, Format::Binary, false).unwrap(),
            Datum::Integer(7)
        );
        assert_eq!(
            Datum::new(b"{1,2}", DataType::Other(1007), Format::Text, false).unwrap(),
            Datum::Text("{1,2}".into())
        );
    }

    #[test]
    fn test_datum_decode_failure() {
        assert!(Datum::new(b"abc", DataType::Bigint, Format::Text, false).is_err());
    }

    #[test]
    fn test_datum_display() {
        assert_eq!(Datum::Bool(true).to_string(), "true");
        assert_eq!(Datum::Double(2.5).to_string(), "2.5");
        assert_eq!(
            Datum::Bytea(Bytes::from_static(&[0xca, 0xfe])).to_string(),
            "\\xcafe"
        );
        assert_eq!(Datum::from(None::<i64>), Datum::Null);
        assert_eq!(Datum::from(Some(5i64)), Datum::Bigint(5));
    }

    #[test]
    fn test_datum_to_column() {
        let column = Datum::Bigint(-3).to_data_row_column();
        assert!(!column.is_null());
        assert_eq!(column.as_bytes(), b"-3");
        assert!(Datum::Null.to_data_row_column().is_null());
    }
}
