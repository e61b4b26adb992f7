//! `timestamp` and `timestamptz` columns.

use bytes::{Buf, Bytes};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use super::*;

/// Text layout used when encoding `timestamp`.
pub const TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Text layout used when encoding `timestamptz`.
pub const TEXT_FORMAT_TZ: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

/// 2000-01-01T00:00:00Z in microseconds since the Unix epoch.
pub const POSTGRES_EPOCH_MICROS: i64 = 946_684_800_000_000;

const DECODE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DECODE_FORMATS_TZ: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f %:z"];

/// Parse a timestamp without offset against a list of layouts.
pub fn parse_timestamp<S: AsRef<str>>(s: &str, formats: &[S]) -> Result<NaiveDateTime, Error> {
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format.as_ref()).ok())
        .or_else(|| {
            // Bare dates read as midnight.
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| Error::NotTimestamp(s.to_string()))
}

/// Parse a timestamp with offset. RFC 3339 is always accepted.
pub fn parse_timestamptz<S: AsRef<str>>(
    s: &str,
    formats: &[S],
) -> Result<DateTime<FixedOffset>, Error> {
    if let Ok(ts) = DateTime::<FixedOffset>::parse_from_rfc3339(s) {
        return Ok(ts);
    }

    formats
        .iter()
        .find_map(|format| DateTime::<FixedOffset>::parse_from_str(s, format.as_ref()).ok())
        .ok_or_else(|| Error::NotTimestamp(s.to_string()))
}

fn from_pg_micros(micros: i64) -> Result<DateTime<Utc>, Error> {
    micros
        .checked_add(POSTGRES_EPOCH_MICROS)
        .and_then(DateTime::<Utc>::from_timestamp_micros)
        .ok_or(Error::InvalidTimestamp)
}

fn to_pg_micros(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_micros() - POSTGRES_EPOCH_MICROS
}

fn binary_micros(bytes: &[u8]) -> Result<i64, Error> {
    if bytes.len() != 8 {
        return Err(Error::WrongSizeBinary(bytes.len()));
    }

    let mut buf = bytes;
    Ok(buf.get_i64())
}

impl FromDataType for NaiveDateTime {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
        match encoding {
            Format::Text => {
                let s = String::decode(bytes, encoding)?;
                parse_timestamp(&s, DECODE_FORMATS)
            }

            Format::Binary => Ok(from_pg_micros(binary_micros(bytes)?)?.naive_utc()),
        }
    }

    fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match encoding {
            Format::Text => Ok(Bytes::copy_from_slice(
                self.format(TEXT_FORMAT).to_string().as_bytes(),
            )),
            Format::Binary => Ok(Bytes::copy_from_slice(
                &to_pg_micros(self.and_utc()).to_be_bytes(),
            )),
        }
    }
}

impl FromDataType for DateTime<FixedOffset> {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
        match encoding {
            Format::Text => {
                let s = String::decode(bytes, encoding)?;
                parse_timestamptz(&s, DECODE_FORMATS_TZ)
            }

            Format::Binary => Ok(from_pg_micros(binary_micros(bytes)?)?.fixed_offset()),
        }
    }

    fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match encoding {
            Format::Text => Ok(Bytes::copy_from_slice(
                self.format(TEXT_FORMAT_TZ).to_string().as_bytes(),
            )),
            Format::Binary => Ok(Bytes::copy_from_slice(
                &to_pg_micros(self.with_timezone(&Utc)).to_be_bytes(),
            )),
        }
    }
}
