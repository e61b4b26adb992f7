//! `bytea` columns, hex text format.

use bytes::Bytes;

use super::*;

/// Render bytes in `\x` hex form.
pub fn to_hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("\\x");
    for byte in bytes {
        out.push(DIGITS[usize::from(byte >> 4)] as char);
        out.push(DIGITS[usize::from(byte & 0x0f)] as char);
    }
    out
}

fn nibble(c: u8) -> Result<u8, Error> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::NotHex),
    }
}

impl FromDataType for Bytes {
    fn decode(bytes: &[u8], encoding: Format) -> Result<Self, Error> {
        match encoding {
            Format::Binary => Ok(Bytes::copy_from_slice(bytes)),
            Format::Text => {
                let hex = bytes.strip_prefix(b"\\x").ok_or(Error::NotHex)?;
                if hex.len() % 2 != 0 {
                    return Err(Error::NotHex);
                }

                hex.chunks(2)
                    .map(|pair| Ok((nibble(pair[0])? << 4) | nibble(pair[1])?))
                    .collect::<Result<Vec<u8>, Error>>()
                    .map(Bytes::from)
            }
        }
    }

    fn encode(&self, encoding: Format) -> Result<Bytes, Error> {
        match encoding {
            Format::Binary => Ok(self.clone()),
            Format::Text => Ok(Bytes::from(to_hex(self))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bytea_hex() {
        let bytes = Bytes::decode(b"\\xDEadbe01", Format::Text).unwrap();
        assert_eq!(&bytes[..], &[0xde, 0xad, 0xbe, 0x01]);
        assert_eq!(to_hex(&bytes), "\\xdeadbe01");
    }

    #[test]
    fn test_bytea_bad_hex() {
        assert!(matches!(
            Bytes::decode(b"\\xabc", Format::Text),
            Err(Error::NotHex)
        ));
        assert!(matches!(
            Bytes::decode(b"plain", Format::Text),
            Err(Error::NotHex)
        ));
    }
}
