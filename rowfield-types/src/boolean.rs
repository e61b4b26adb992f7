use bytes::Bytes;

use super::*;

impl FromDataType for bool {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
        match encoding {
            Format::Text => {
                let s = String::decode(bytes, encoding)?;
                match s.to_lowercase().as_str() {
                    "t" | "true" => Ok(true),
                    "f" | "false" => Ok(false),
                    _ => Err(Error::NotBoolean),
                }
            }

            Format::Binary => match bytes {
                [0] => Ok(false),
                [1] => Ok(true),
                [_] => Err(Error::NotBoolean),
                _ => Err(Error::WrongSizeBinary(bytes.len())),
            },
        }
    }

    fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match encoding {
            Format::Text => Ok(Bytes::copy_from_slice(if *self {
                "t".as_bytes()
            } else {
                "f".as_bytes()
            })),
            Format::Binary => Ok(Bytes::copy_from_slice(&[*self as u8])),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bool_text() {
        assert!(bool::decode(b"t", Format::Text).unwrap());
        assert!(!bool::decode(b"FALSE", Format::Text).unwrap());
        assert!(matches!(
            bool::decode(b"yes", Format::Text),
            Err(Error::NotBoolean)
        ));
    }

    #[test]
    fn test_bool_binary() {
        assert!(bool::decode(&[1], Format::Binary).unwrap());
        assert!(!bool::decode(&[0], Format::Binary).unwrap());
        assert!(matches!(
            bool::decode(&[0, 1], Format::Binary),
            Err(Error::WrongSizeBinary(2))
        ));
    }
}
