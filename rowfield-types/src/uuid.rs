use std::str::FromStr;

use super::*;
use ::uuid::Uuid;
use bytes::Bytes;

impl FromDataType for Uuid {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
        match encoding {
            Format::Text => {
                let s = String::decode(bytes, encoding)?;
                Ok(Uuid::from_str(&s)?)
            }

            Format::Binary => Ok(bytes.try_into().map(Uuid::from_bytes)?),
        }
    }

    fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match encoding {
            Format::Text => Ok(Bytes::copy_from_slice(self.to_string().as_bytes())),
            Format::Binary => Ok(Bytes::copy_from_slice(self.as_bytes())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_uuid_text_and_binary() {
        let text = b"67e55044-10b1-426f-9247-bb680e5fe0c8";
        let uuid = Uuid::decode(text, Format::Text).unwrap();
        let binary = uuid.encode(Format::Binary).unwrap();
        assert_eq!(binary.len(), 16);
        assert_eq!(Uuid::decode(&binary, Format::Binary).unwrap(), uuid);
        assert!(matches!(
            Uuid::decode(&binary[..4], Format::Binary),
            Err(Error::WrongSizeSlice(_))
        ));
    }
}
