//! Column data types and decoding of raw column bytes
//! into typed values.

pub mod bigint;
pub mod boolean;
pub mod bytea;
pub mod data;
pub mod data_type;
pub mod datum;
pub mod double;
pub mod error;
pub mod format;
pub mod interface;
pub mod numeric;
pub mod text;
pub mod timestamp;
pub mod uuid;

pub use data::Data;
pub use data_type::DataType;
pub use datum::Datum;
pub use error::Error;
pub use format::Format;
pub use interface::*;
