//! Column data types.

use std::fmt::Display;

/// Data type of a column, as reported by the row description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    Bool,
    Bytea,
    SmallInt,
    Integer,
    Bigint,
    Real,
    Double,
    Numeric,
    #[default]
    Text,
    Timestamp,
    TimestampTz,
    Uuid,
    /// Type we don't decode; kept by OID.
    Other(i32),
}

impl DataType {
    /// Map a PostgreSQL type OID.
    pub fn from_oid(oid: i32) -> Self {
        match oid {
            16 => Self::Bool,
            17 => Self::Bytea,
            20 => Self::Bigint,
            21 => Self::SmallInt,
            23 => Self::Integer,
            19 | 25 | 1042 | 1043 => Self::Text,
            700 => Self::Real,
            701 => Self::Double,
            1114 => Self::Timestamp,
            1184 => Self::TimestampTz,
            1700 => Self::Numeric,
            2950 => Self::Uuid,
            oid => Self::Other(oid),
        }
    }

    /// PostgreSQL type OID.
    pub fn oid(&self) -> i32 {
        match self {
            Self::Bool => 16,
            Self::Bytea => 17,
            Self::Bigint => 20,
            Self::SmallInt => 21,
            Self::Integer => 23,
            Self::Text => 25,
            Self::Real => 700,
            Self::Double => 701,
            Self::Timestamp => 1114,
            Self::TimestampTz => 1184,
            Self::Numeric => 1700,
            Self::Uuid => 2950,
            Self::Other(oid) => *oid,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Bytea => write!(f, "bytea"),
            Self::SmallInt => write!(f, "smallint"),
            Self::Integer => write!(f, "integer"),
            Self::Bigint => write!(f, "bigint"),
            Self::Real => write!(f, "real"),
            Self::Double => write!(f, "double precision"),
            Self::Numeric => write!(f, "numeric"),
            Self::Text => write!(f, "text"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::TimestampTz => write!(f, "timestamptz"),
            Self::Uuid => write!(f, "uuid"),
            Self::Other(oid) => write!(f, "oid({})", oid),
        }
    }
}
