//! Target types requested by callers and their default values.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::Datum;

/// Semantic kind of a converted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Bool,
    SmallInt,
    Integer,
    Bigint,
    Real,
    Double,
    Numeric,
    Timestamp,
    TimestampTz,
    Uuid,
    Bytea,
    /// Whatever the row holds, unconverted.
    Any,
}

impl Kind {
    /// Fixed-layout kinds that always have a zero instance.
    pub fn is_value_type(&self) -> bool {
        !matches!(self, Kind::Text | Kind::Bytea | Kind::Any)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Bool => "bool",
            Kind::SmallInt => "smallint",
            Kind::Integer => "integer",
            Kind::Bigint => "bigint",
            Kind::Real => "real",
            Kind::Double => "double precision",
            Kind::Numeric => "numeric",
            Kind::Timestamp => "timestamp",
            Kind::TimestampTz => "timestamptz",
            Kind::Uuid => "uuid",
            Kind::Bytea => "bytea",
            Kind::Any => "any",
        }
    }

    fn zero(&self) -> Datum {
        match self {
            Kind::Bool => Datum::Bool(false),
            Kind::SmallInt => Datum::SmallInt(0),
            Kind::Integer => Datum::Integer(0),
            Kind::Bigint => Datum::Bigint(0),
            Kind::Real => Datum::Real(0.0),
            Kind::Double => Datum::Double(0.0),
            Kind::Numeric => Datum::Numeric(Decimal::ZERO),
            Kind::Timestamp => Datum::Timestamp(NaiveDateTime::default()),
            Kind::TimestampTz => Datum::TimestampTz(DateTime::<FixedOffset>::default()),
            Kind::Uuid => Datum::Uuid(Uuid::nil()),
            Kind::Text => Datum::Text(String::new()),
            Kind::Bytea | Kind::Any => Datum::Null,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Type a field is converted to: a kind, optionally nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetType {
    kind: Kind,
    nullable: bool,
}

impl TargetType {
    pub const fn new(kind: Kind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    /// Nullable variant of a kind; nulls and failures produce [`Datum::Null`].
    pub const fn nullable(kind: Kind) -> Self {
        Self {
            kind,
            nullable: true,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Nullable timestamps are rejected as a target, whatever the field holds.
    pub fn is_supported(&self) -> bool {
        !(self.nullable && self.kind == Kind::Timestamp)
    }

    /// Value returned for null fields and recovered conversion failures.
    ///
    /// Text is always the empty string. Non-nullable value kinds get their
    /// zero instance. Everything else is [`Datum::Null`].
    pub fn default_value(&self) -> Datum {
        match self.kind {
            Kind::Text => Datum::Text(String::new()),
            kind if kind.is_value_type() && !self.nullable => kind.zero(),
            _ => Datum::Null,
        }
    }
}

impl From<Kind> for TargetType {
    fn from(kind: Kind) -> Self {
        Self::new(kind)
    }
}

impl Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.nullable {
            write!(f, "nullable {}", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
