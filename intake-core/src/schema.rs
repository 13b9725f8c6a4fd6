//! Column schema types: the storage-table shape generated from a record
//! definition plus system columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target column type for the warehouse table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::String => "STRING",
            ColumnType::Integer => "INTEGER",
            ColumnType::Float => "FLOAT",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Timestamp => "TIMESTAMP",
        };
        f.write_str(name)
    }
}

/// Column mode: whether a value must always be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnMode {
    Required,
    Nullable,
}

impl fmt::Display for ColumnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnMode::Required => "REQUIRED",
            ColumnMode::Nullable => "NULLABLE",
        };
        f.write_str(name)
    }
}

/// One column of the generated schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Lowercased column name.
    pub name: String,
    pub column_type: ColumnType,
    pub mode: ColumnMode,
    pub description: String,
}

impl Column {
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        mode: ColumnMode,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            column_type,
            mode,
            description: description.into(),
        }
    }
}

/// Ordered list of columns. Field order matches the record definition,
/// with the system columns always last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    columns: Vec<Column>,
}

impl ColumnSchema {
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns in schema order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_display_matches_table_api_names() {
        assert_eq!(ColumnType::String.to_string(), "STRING");
        assert_eq!(ColumnType::Timestamp.to_string(), "TIMESTAMP");
        assert_eq!(ColumnMode::Required.to_string(), "REQUIRED");
    }

    #[test]
    fn column_lookup_by_name() {
        let schema = ColumnSchema::from_columns(vec![Column::new(
            "pa1",
            ColumnType::String,
            ColumnMode::Nullable,
            "scale item",
        )]);

        assert!(schema.column("pa1").is_some());
        assert!(schema.column("PA1").is_none());
    }
}
