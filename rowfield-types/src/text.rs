use std::str::from_utf8;

use bytes::Bytes;

use super::*;

impl FromDataType for String {
    fn decode(bytes: &[u8], _encoding: Format) -> Result<Self, Error> {
        Ok(from_utf8(bytes)?.to_owned())
    }

    fn encode(&self, _encoding: Format) -> Result<Bytes, Error> {
        Ok(Bytes::copy_from_slice(self.as_bytes()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_text_keeps_whitespace() {
        let s = String::decode(b"  padded ", Format::Text).unwrap();
        assert_eq!(s, "  padded ");
    }

    #[test]
    fn test_text_rejects_invalid_utf8() {
        let err = String::decode(&[0xff, 0xfe], Format::Binary).unwrap_err();
        assert!(matches!(err, Error::Utf8(_)));
    }
}
