//! Column names, types and formats of a row.

use rowfield_types::{DataType, Format};

use crate::row::find_ordinal;

/// Column description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Column data type.
    pub data_type: DataType,
    /// Encoding of the column bytes.
    pub format: Format,
}

impl Field {
    /// Text-encoded column.
    pub fn text(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            format: Format::Text,
        }
    }

    /// Binary-encoded column.
    pub fn binary(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            format: Format::Binary,
        }
    }

    /// Text-encoded column identified by type OID.
    pub fn with_oid(name: &str, oid: i32) -> Self {
        Self::text(name, DataType::from_oid(oid))
    }
}

/// Row description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowDescription {
    pub fields: Vec<Field>,
}

impl RowDescription {
    pub fn new(fields: &[Field]) -> Self {
        Self {
            fields: fields.to_vec(),
        }
    }

    /// Field at index.
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Index of the named field. Exact matches win over
    /// case-insensitive ones.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        find_ordinal(self.fields.iter().map(|f| f.name.as_str()), name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
