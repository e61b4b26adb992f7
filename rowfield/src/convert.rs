//! Conversion of values between kinds.
//!
//! Every supported `(value, kind)` pair is listed explicitly; anything
//! else fails with [`Error::UnsupportedConversion`].

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use rowfield_types::{
    double::parse_float,
    numeric::parse_decimal,
    timestamp::{parse_timestamp, parse_timestamptz},
    Datum, Error,
};
use uuid::Uuid;

use crate::{target::Kind, Config};

fn unsupported(value: &Datum, kind: Kind) -> Error {
    Error::UnsupportedConversion {
        from: value.type_name(),
        to: kind.name(),
    }
}

/// Convert a value to the given kind. Null stays null.
pub fn coerce(value: Datum, kind: Kind, config: &Config) -> Result<Datum, Error> {
    if value.is_null() {
        return Ok(Datum::Null);
    }

    Ok(match kind {
        Kind::Any => value,
        Kind::Text => match value {
            Datum::Text(text) => Datum::Text(text),
            value => Datum::Text(value.to_string()),
        },
        Kind::Bool => Datum::Bool(to_bool(&value)?),
        Kind::SmallInt => Datum::SmallInt(
            to_integer(&value, kind)?
                .try_into()
                .map_err(|_| Error::Overflow(kind.name()))?,
        ),
        Kind::Integer => Datum::Integer(
            to_integer(&value, kind)?
                .try_into()
                .map_err(|_| Error::Overflow(kind.name()))?,
        ),
        Kind::Bigint => Datum::Bigint(to_integer(&value, kind)?),
        Kind::Real => Datum::Real(to_real(&value)?),
        Kind::Double => Datum::Double(to_double(&value, kind)?),
        Kind::Numeric => Datum::Numeric(to_numeric(&value)?),
        Kind::Timestamp => Datum::Timestamp(to_timestamp(&value, config)?),
        Kind::TimestampTz => Datum::TimestampTz(to_timestamptz(&value, config)?),
        Kind::Uuid => Datum::Uuid(to_uuid(&value)?),
        Kind::Bytea => Datum::Bytea(to_bytea(value)?),
    })
}

fn to_bool(value: &Datum) -> Result<bool, Error> {
    match value {
        Datum::Bool(v) => Ok(*v),
        Datum::SmallInt(v) => Ok(*v != 0),
        Datum::Integer(v) => Ok(*v != 0),
        Datum::Bigint(v) => Ok(*v != 0),
        Datum::Real(v) => Ok(*v != 0.0),
        Datum::Double(v) => Ok(*v != 0.0),
        Datum::Numeric(v) => Ok(!v.is_zero()),
        Datum::Text(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if s.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(Error::NotBoolean)
            }
        }
        value => Err(unsupported(value, Kind::Bool)),
    }
}

/// Round half to even, failing outside the i64 range.
fn float_to_integer(value: f64, kind: Kind) -> Result<i64, Error> {
    let rounded = value.round_ties_even();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(Error::Overflow(kind.name()));
    }
    Ok(rounded as i64)
}

fn to_integer(value: &Datum, kind: Kind) -> Result<i64, Error> {
    match value {
        Datum::Bool(v) => Ok(*v as i64),
        Datum::SmallInt(v) => Ok(*v as i64),
        Datum::Integer(v) => Ok(*v as i64),
        Datum::Bigint(v) => Ok(*v),
        Datum::Real(v) => float_to_integer(*v as f64, kind),
        Datum::Double(v) => float_to_integer(*v, kind),
        Datum::Numeric(v) => v
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
            .ok_or(Error::Overflow(kind.name())),
        Datum::Text(s) => Ok(s.trim().parse::<i64>()?),
        value => Err(unsupported(value, kind)),
    }
}

fn to_double(value: &Datum, kind: Kind) -> Result<f64, Error> {
    match value {
        Datum::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
        Datum::SmallInt(v) => Ok(*v as f64),
        Datum::Integer(v) => Ok(*v as f64),
        Datum::Bigint(v) => Ok(*v as f64),
        Datum::Real(v) => Ok(*v as f64),
        Datum::Double(v) => Ok(*v),
        Datum::Numeric(v) => v.to_f64().ok_or(Error::Overflow(kind.name())),
        Datum::Text(s) => parse_float(s.trim()),
        value => Err(unsupported(value, kind)),
    }
}

fn to_real(value: &Datum) -> Result<f32, Error> {
    if let Datum::Real(v) = value {
        return Ok(*v);
    }

    let double = to_double(value, Kind::Real)?;
    if double.is_finite() && double.abs() > f32::MAX as f64 {
        return Err(Error::Overflow(Kind::Real.name()));
    }
    Ok(double as f32)
}

fn to_numeric(value: &Datum) -> Result<Decimal, Error> {
    match value {
        Datum::Bool(v) => Ok(if *v { Decimal::ONE } else { Decimal::ZERO }),
        Datum::SmallInt(v) => Ok(Decimal::from(*v)),
        Datum::Integer(v) => Ok(Decimal::from(*v)),
        Datum::Bigint(v) => Ok(Decimal::from(*v)),
        Datum::Real(v) => Ok(Decimal::try_from(*v)?),
        Datum::Double(v) => Ok(Decimal::try_from(*v)?),
        Datum::Numeric(v) => Ok(*v),
        Datum::Text(s) => parse_decimal(s.trim()),
        value => Err(unsupported(value, Kind::Numeric)),
    }
}

fn to_timestamp(value: &Datum, config: &Config) -> Result<NaiveDateTime, Error> {
    match value {
        Datum::Timestamp(v) => Ok(*v),
        Datum::TimestampTz(v) => Ok(v.naive_local()),
        Datum::Text(s) => parse_timestamp(s.trim(), &config.timestamp_formats),
        value => Err(unsupported(value, Kind::Timestamp)),
    }
}

fn to_timestamptz(value: &Datum, config: &Config) -> Result<DateTime<FixedOffset>, Error> {
    match value {
        Datum::TimestampTz(v) => Ok(*v),
        Datum::Timestamp(v) => Ok(v.and_utc().fixed_offset()),
        Datum::Text(s) => parse_timestamptz(s.trim(), &config.timestamptz_formats),
        value => Err(unsupported(value, Kind::TimestampTz)),
    }
}

fn to_uuid(value: &Datum) -> Result<Uuid, Error> {
    match value {
        Datum::Uuid(v) => Ok(*v),
        Datum::Text(s) => Ok(Uuid::parse_str(s.trim())?),
        Datum::Bytea(v) => Ok(Uuid::from_slice(v)?),
        value => Err(unsupported(value, Kind::Uuid)),
    }
}

fn to_bytea(value: Datum) -> Result<Bytes, Error> {
    match value {
        Datum::Bytea(v) => Ok(v),
        Datum::Text(s) => Ok(Bytes::from(s.into_bytes())),
        Datum::Uuid(v) => Ok(Bytes::copy_from_slice(v.as_bytes())),
        value => Err(unsupported(&value, Kind::Bytea)),
    }
}

#[cfg(test)]
mod test {
    use chrono::{Datelike, Timelike};

    use super::*;

    fn convert(value: impl Into<Datum>, kind: Kind) -> Result<Datum, Error> {
        coerce(value.into(), kind, &Config::default())
    }

    #[test]
    fn test_text_to_numbers() {
        assert_eq!(convert("42", Kind::Integer).unwrap(), Datum::Integer(42));
        assert_eq!(convert(" -7 ", Kind::SmallInt).unwrap(), Datum::SmallInt(-7));
        assert_eq!(convert("2.5", Kind::Double).unwrap(), Datum::Double(2.5));
        assert_eq!(
            convert("19.99", Kind::Numeric).unwrap(),
            Datum::Numeric(Decimal::new(1999, 2))
        );
        assert!(matches!(
            convert("4x", Kind::Bigint),
            Err(Error::NotInteger(_))
        ));
    }

    #[test]
    fn test_integer_narrowing() {
        assert_eq!(convert(300i64, Kind::Integer).unwrap(), Datum::Integer(300));
        assert!(matches!(
            convert(70_000i32, Kind::SmallInt),
            Err(Error::Overflow("smallint"))
        ));
        assert!(matches!(
            convert(i64::MAX, Kind::Integer),
            Err(Error::Overflow("integer"))
        ));
    }

    #[test]
    fn test_float_to_integer_rounds_half_even() {
        assert_eq!(convert(2.5f64, Kind::Integer).unwrap(), Datum::Integer(2));
        assert_eq!(convert(3.5f64, Kind::Integer).unwrap(), Datum::Integer(4));
        assert_eq!(convert(-1.5f32, Kind::Bigint).unwrap(), Datum::Bigint(-2));
        assert_eq!(
            convert(Decimal::new(25, 1), Kind::Bigint).unwrap(),
            Datum::Bigint(2)
        );
        assert!(matches!(
            convert(f64::NAN, Kind::Bigint),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            convert(1e300f64, Kind::Bigint),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn test_bool_conversions() {
        assert_eq!(convert(" TRUE ", Kind::Bool).unwrap(), Datum::Bool(true));
        assert_eq!(convert(0i32, Kind::Bool).unwrap(), Datum::Bool(false));
        assert_eq!(convert(-3i64, Kind::Bool).unwrap(), Datum::Bool(true));
        assert_eq!(convert(true, Kind::Integer).unwrap(), Datum::Integer(1));
        assert!(matches!(convert("t", Kind::Bool), Err(Error::NotBoolean)));
    }

    #[test]
    fn test_real_overflow() {
        assert_eq!(convert(1.5f64, Kind::Real).unwrap(), Datum::Real(1.5));
        assert!(matches!(
            convert(1e40f64, Kind::Real),
            Err(Error::Overflow("real"))
        ));
    }

    #[test]
    fn test_timestamps() {
        let ts = match convert("2024-05-01 08:15:30", Kind::Timestamp).unwrap() {
            Datum::Timestamp(ts) => ts,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(ts.month(), 5);
        assert_eq!(ts.minute(), 15);

        let tz = match convert(ts, Kind::TimestampTz).unwrap() {
            Datum::TimestampTz(tz) => tz,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(tz.naive_utc(), ts);

        // Rendered text converts back.
        let text = Datum::TimestampTz(tz).to_string();
        assert_eq!(convert(text, Kind::TimestampTz).unwrap(), Datum::TimestampTz(tz));

        assert!(matches!(
            convert("2024-05-01T08:15:30+02:00", Kind::TimestampTz),
            Ok(Datum::TimestampTz(_))
        ));
        assert!(matches!(
            convert(12i32, Kind::Timestamp),
            Err(Error::UnsupportedConversion {
                from: "integer",
                to: "timestamp"
            })
        ));
    }

    #[test]
    fn test_custom_timestamp_format() {
        let config = Config {
            timestamp_formats: vec!["%d/%m/%Y %H:%M".into()],
            ..Default::default()
        };
        let value = coerce("31/01/2024 17:45".into(), Kind::Timestamp, &config).unwrap();
        match value {
            Datum::Timestamp(ts) => {
                assert_eq!(ts.day(), 31);
                assert_eq!(ts.hour(), 17);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_uuid_and_bytea() {
        let uuid = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(
            convert(uuid.to_string(), Kind::Uuid).unwrap(),
            Datum::Uuid(uuid)
        );
        let bytes = match convert(uuid, Kind::Bytea).unwrap() {
            Datum::Bytea(bytes) => bytes,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(convert(bytes, Kind::Uuid).unwrap(), Datum::Uuid(uuid));
        assert!(matches!(convert("nope", Kind::Uuid), Err(Error::NotUuid(_))));
        assert!(matches!(
            convert(1.0f64, Kind::Uuid),
            Err(Error::UnsupportedConversion { .. })
        ));
    }

    #[test]
    fn test_text_and_any() {
        assert_eq!(convert(12i16, Kind::Text).unwrap(), Datum::Text("12".into()));
        assert_eq!(convert(false, Kind::Any).unwrap(), Datum::Bool(false));
        assert_eq!(convert(Datum::Null, Kind::Integer).unwrap(), Datum::Null);
    }
}
