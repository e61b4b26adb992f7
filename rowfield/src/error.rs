//! Field access errors.

use thiserror::Error;

use crate::target::TargetType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("field \"{0}\" not found")]
    LocatorNotFound(String),

    #[error("position {position} out of range, row has {len} fields")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("target type {0} is not supported")]
    UnsupportedType(TargetType),

    #[error("{0}")]
    Type(#[from] rowfield_types::Error),

    #[error("expected {expected} value, got {found}")]
    UnexpectedValue {
        expected: TargetType,
        found: &'static str,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Errors that describe a caller mistake and must never be
    /// replaced by a default value.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::LocatorNotFound(_) | Error::PositionOutOfRange { .. } | Error::UnsupportedType(_)
        )
    }
}
