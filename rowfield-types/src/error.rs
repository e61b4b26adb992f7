//! Decoding and conversion errors.

use std::array::TryFromSliceError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected payload")]
    UnexpectedPayload,

    #[error("not text encoding")]
    NotTextEncoding,

    #[error("not utf-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("not an integer")]
    NotInteger(#[from] std::num::ParseIntError),

    #[error("not a float")]
    NotFloat(#[from] std::num::ParseFloatError),

    #[error("not a numeric")]
    NotNumeric(#[from] rust_decimal::Error),

    #[error("not a uuid")]
    NotUuid(#[from] ::uuid::Error),

    #[error("not a timestamp: \"{0}\"")]
    NotTimestamp(String),

    #[error("not a boolean")]
    NotBoolean,

    #[error("not valid hex")]
    NotHex,

    #[error("wrong size slice")]
    WrongSizeSlice(#[from] TryFromSliceError),

    #[error("wrong size binary ({0}) for type")]
    WrongSizeBinary(usize),

    #[error("timestamp out of range")]
    InvalidTimestamp,

    #[error("value out of range for {0}")]
    Overflow(&'static str),

    #[error("cannot convert {from} to {to}")]
    UnsupportedConversion {
        from: &'static str,
        to: &'static str,
    },
}
