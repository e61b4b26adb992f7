use crate::{Data, Error, Format};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use ::uuid::Uuid;

/// Decode a Rust value from column bytes and encode it back.
pub trait FromDataType: Sized {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error>;
    fn encode(&self, encoding: Format) -> Result<Bytes, Error>;
}

/// Convert value to data row column
/// using text formatting.
pub trait ToDataRowColumn {
    fn to_data_row_column(&self) -> Data;
}

impl ToDataRowColumn for Bytes {
    fn to_data_row_column(&self) -> Data {
        self.clone().into()
    }
}

impl ToDataRowColumn for Data {
    fn to_data_row_column(&self) -> Data {
        self.clone()
    }
}

impl ToDataRowColumn for String {
    fn to_data_row_column(&self) -> Data {
        Bytes::copy_from_slice(self.as_bytes()).into()
    }
}

impl ToDataRowColumn for &String {
    fn to_data_row_column(&self) -> Data {
        Bytes::copy_from_slice(self.as_bytes()).into()
    }
}

impl ToDataRowColumn for &str {
    fn to_data_row_column(&self) -> Data {
        Bytes::copy_from_slice(self.as_bytes()).into()
    }
}

impl ToDataRowColumn for bool {
    fn to_data_row_column(&self) -> Data {
        Bytes::copy_from_slice(if *self { b"t" } else { b"f" }).into()
    }
}

macro_rules! display_column {
    ($($ty:ty),+) => {
        $(
            impl ToDataRowColumn for $ty {
                fn to_data_row_column(&self) -> Data {
                    Bytes::copy_from_slice(self.to_string().as_bytes()).into()
                }
            }
        )+
    };
}

display_column!(i16, i32, i64, u64, usize, f32, f64, Decimal, Uuid);

impl ToDataRowColumn for NaiveDateTime {
    fn to_data_row_column(&self) -> Data {
        Bytes::copy_from_slice(self.format(crate::timestamp::TEXT_FORMAT).to_string().as_bytes())
            .into()
    }
}

impl ToDataRowColumn for DateTime<FixedOffset> {
    fn to_data_row_column(&self) -> Data {
        Bytes::copy_from_slice(
            self.format(crate::timestamp::TEXT_FORMAT_TZ)
                .to_string()
                .as_bytes(),
        )
        .into()
    }
}

impl<T: ToDataRowColumn> ToDataRowColumn for Option<T> {
    fn to_data_row_column(&self) -> Data {
        match self {
            Some(value) => value.to_data_row_column(),
            None => Data::null(),
        }
    }
}
