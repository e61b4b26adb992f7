//! One column of a data row.

use bytes::Bytes;

/// Column bytes, or SQL NULL.
///
/// A null column carries no bytes.
#[derive(Debug, Clone, Default, Eq, Hash, PartialEq)]
pub struct Data {
    bytes: Option<Bytes>,
}

impl Data {
    /// Column holding `bytes`.
    pub fn value(bytes: Bytes) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// NULL column.
    pub fn null() -> Self {
        Self { bytes: None }
    }

    pub fn is_null(&self) -> bool {
        self.bytes.is_none()
    }

    /// Column bytes. Empty for NULL.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_deref().unwrap_or_default()
    }

    /// Column bytes, `None` for NULL.
    pub fn into_bytes(self) -> Option<Bytes> {
        self.bytes
    }
}

impl From<Bytes> for Data {
    fn from(bytes: Bytes) -> Self {
        Self::value(bytes)
    }
}
