use std::str::FromStr;

use bytes::Bytes;
use rust_decimal::Decimal;

use super::*;

/// Parse decimal text, accepting scientific notation.
pub fn parse_decimal(s: &str) -> Result<Decimal, Error> {
    match Decimal::from_str(s) {
        Ok(decimal) => Ok(decimal),
        Err(err) => {
            if s.contains(['e', 'E']) {
                Ok(Decimal::from_scientific(s)?)
            } else {
                Err(err.into())
            }
        }
    }
}

impl FromDataType for Decimal {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
        match encoding {
            Format::Text => {
                let s = String::decode(bytes, encoding)?;
                parse_decimal(&s)
            }

            // The packed base-10000 layout is not decoded here.
            Format::Binary => Err(Error::NotTextEncoding),
        }
    }

    fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match encoding {
            Format::Text => Ok(Bytes::copy_from_slice(self.to_string().as_bytes())),
            Format::Binary => Err(Error::NotTextEncoding),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_numeric_text() {
        let value = Decimal::decode(b"123.4500", Format::Text).unwrap();
        assert_eq!(value, Decimal::new(1234500, 4));
        assert_eq!(
            Decimal::decode(b"1.5e3", Format::Text).unwrap(),
            Decimal::new(1500, 0)
        );
    }

    #[test]
    fn test_numeric_errors() {
        assert!(matches!(
            Decimal::decode(b"NaN", Format::Text),
            Err(Error::NotNumeric(_))
        ));
        assert!(matches!(
            Decimal::decode(&[0, 1], Format::Binary),
            Err(Error::NotTextEncoding)
        ));
    }
}
