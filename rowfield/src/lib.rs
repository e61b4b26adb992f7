//! Typed field access over tabular rows.
//!
//! Fields are read by position or by name and converted to a requested
//! type. Null fields and values that can't be converted produce the target
//! type's default instead of an error. Unknown names, positions outside
//! the row and nullable timestamp targets are always reported.

pub mod accessor;
pub mod config;
pub mod convert;
pub mod data_row;
pub mod described_row;
pub mod error;
pub mod ext;
pub mod locator;
pub mod logger;
pub mod row;
pub mod row_description;
pub mod sink;
pub mod target;
pub mod value;

pub use accessor::FieldAccessor;
pub use config::Config;
pub use data_row::DataRow;
pub use described_row::DescribedRow;
pub use error::Error;
pub use ext::RowExt;
pub use locator::Locator;
pub use row::{Record, Row};
pub use row_description::{Field, RowDescription};
pub use sink::{ConversionFailure, FailureSink, MemorySink, NoopSink};
pub use target::{Kind, TargetType};
pub use value::FieldValue;

pub use rowfield_types::{Data, DataType, Datum, Format, FromDataType, ToDataRowColumn};
