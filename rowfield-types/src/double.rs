use bytes::{Buf, Bytes};

use super::*;

/// Parse float text, accepting the special values.
pub fn parse_float(s: &str) -> Result<f64, Error> {
    match s.to_uppercase().as_str() {
        "NAN" => Ok(f64::NAN),
        "INFINITY" | "+INFINITY" => Ok(f64::INFINITY),
        "-INFINITY" => Ok(f64::NEG_INFINITY),
        _ => s.parse::<f64>().map_err(Error::NotFloat),
    }
}

fn float_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

impl FromDataType for f64 {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
        match encoding {
            Format::Text => {
                let s = String::decode(bytes, encoding)?;
                parse_float(&s)
            }
            Format::Binary => {
                let mut buf = bytes;
                match bytes.len() {
                    // float4 widens losslessly.
                    4 => Ok(f32::from_bits(buf.get_u32()) as f64),
                    8 => Ok(f64::from_bits(buf.get_u64())),
                    len => Err(Error::WrongSizeBinary(len)),
                }
            }
        }
    }

    fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match encoding {
            Format::Text => Ok(Bytes::copy_from_slice(float_text(*self).as_bytes())),
            Format::Binary => Ok(Bytes::copy_from_slice(&self.to_bits().to_be_bytes())),
        }
    }
}

impl FromDataType for f32 {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
        match encoding {
            Format::Text => {
                let s = String::decode(bytes, encoding)?;
                match s.to_uppercase().as_str() {
                    "NAN" => Ok(f32::NAN),
                    "INFINITY" | "+INFINITY" => Ok(f32::INFINITY),
                    "-INFINITY" => Ok(f32::NEG_INFINITY),
                    _ => s.parse::<f32>().map_err(Error::NotFloat),
                }
            }
            Format::Binary => {
                if bytes.len() != 4 {
                    return Err(Error::WrongSizeBinary(bytes.len()));
                }

                let mut buf = bytes;
                Ok(f32::from_bits(buf.get_u32()))
            }
        }
    }

    fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match encoding {
            Format::Text if self.is_finite() => {
                Ok(Bytes::copy_from_slice(self.to_string().as_bytes()))
            }
            Format::Text => Ok(Bytes::copy_from_slice(float_text(*self as f64).as_bytes())),
            Format::Binary => Ok(Bytes::copy_from_slice(&self.to_bits().to_be_bytes())),
        }
    }
}
