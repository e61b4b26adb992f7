//! Rust types that fields can be read into.

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    target::{Kind, TargetType},
    Datum,
};

/// Type with a known target type, extractable from a converted value.
///
/// `Option<T>` maps to the nullable target of `T`, so null fields read as
/// `None` instead of a zero value.
pub trait FieldValue: Sized {
    fn target() -> TargetType;

    /// Extract from a value already converted to [`Self::target`].
    fn from_datum(datum: Datum) -> Option<Self>;
}

macro_rules! field_value {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn target() -> TargetType {
                    TargetType::new(Kind::$kind)
                }

                fn from_datum(datum: Datum) -> Option<Self> {
                    match datum {
                        Datum::$kind(value) => Some(value),
                        _ => None,
                    }
                }
            }

            impl FieldValue for Option<$ty> {
                fn target() -> TargetType {
                    TargetType::nullable(Kind::$kind)
                }

                fn from_datum(datum: Datum) -> Option<Self> {
                    match datum {
                        Datum::Null => Some(None),
                        Datum::$kind(value) => Some(Some(value)),
                        _ => None,
                    }
                }
            }
        )+
    };
}

field_value!(
    String => Text,
    bool => Bool,
    i16 => SmallInt,
    i32 => Integer,
    i64 => Bigint,
    f32 => Real,
    f64 => Double,
    Decimal => Numeric,
    NaiveDateTime => Timestamp,
    DateTime<FixedOffset> => TimestampTz,
    Uuid => Uuid,
);

// Byte strings have no zero value; null reads as `None`.
impl FieldValue for Option<Bytes> {
    fn target() -> TargetType {
        TargetType::new(Kind::Bytea)
    }

    fn from_datum(datum: Datum) -> Option<Self> {
        match datum {
            Datum::Null => Some(None),
            Datum::Bytea(value) => Some(Some(value)),
            _ => None,
        }
    }
}

impl FieldValue for Datum {
    fn target() -> TargetType {
        TargetType::new(Kind::Any)
    }

    fn from_datum(datum: Datum) -> Option<Self> {
        Some(datum)
    }
}
