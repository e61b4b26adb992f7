//! `int2`, `int4` and `int8` columns.

use std::str::from_utf8;

use super::*;

use bytes::{Buf, Bytes};

/// Signed big-endian integer of any PostgreSQL integer width.
fn read_be(bytes: &[u8]) -> Result<i64, Error> {
    let mut buf = bytes;
    match bytes.len() {
        2 => Ok(buf.get_i16().into()),
        4 => Ok(buf.get_i32().into()),
        8 => Ok(buf.get_i64()),
        len => Err(Error::WrongSizeBinary(len)),
    }
}

fn read_integer(bytes: &[u8], encoding: Format) -> Result<i64, Error> {
    match encoding {
        Format::Binary => read_be(bytes),
        Format::Text => Ok(from_utf8(bytes)?.parse()?),
    }
}

// Every width accepts every wire width as long as the value fits,
// so an int8 column holding 7 still reads as i16.
macro_rules! integer {
    ($ty:ty, $name:literal) => {
        impl FromDataType for $ty {
            fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
                <$ty>::try_from(read_integer(bytes, encoding)?)
                    .map_err(|_| Error::Overflow($name))
            }

            fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
                Ok(match encoding {
                    Format::Text => Bytes::from(self.to_string()),
                    Format::Binary => Bytes::copy_from_slice(&self.to_be_bytes()),
                })
            }
        }
    };
}

integer!(i64, "bigint");
integer!(i32, "integer");
integer!(i16, "smallint");
