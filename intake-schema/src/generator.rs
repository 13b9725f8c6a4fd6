//! Schema generator: record definition to column schema.
//!
//! Column naming rules:
//!     - All column names are lowercased (PA1 -> pa1).
//!     - System columns are prefixed with underscore (_created_at).
//!
//! The system columns represent pipeline concerns (when the row was
//! written, whether downstream processing has completed) rather than
//! survey data, so they are defined here and appended after the
//! definition-derived columns.

use crate::mapper;
use intake_core::{Column, ColumnMode, ColumnSchema, ColumnType, RecordDefinition, SchemaError};

/// Name of the row-creation timestamp column.
pub const CREATED_AT_COLUMN: &str = "_created_at";

/// Name of the downstream-processing completion flag column.
pub const PROCESSED_COLUMN: &str = "_processed";

/// The two fixed system columns, in the order they are appended.
pub fn system_columns() -> Vec<Column> {
    vec![
        Column::new(
            CREATED_AT_COLUMN,
            ColumnType::Timestamp,
            ColumnMode::Required,
            "UTC timestamp when this row was inserted",
        ),
        Column::new(
            PROCESSED_COLUMN,
            ColumnType::Boolean,
            ColumnMode::Required,
            "Whether downstream processing has completed",
        ),
    ]
}

/// Generate a column schema from a record definition.
///
/// Iterates the definition's fields in declaration order, resolves each
/// kind through the type mapper, lowercases names, and appends
/// `system_columns` verbatim after all derived columns.
///
/// Fails with `SchemaError::UnmappedType` on the first unmappable field;
/// a partial schema is never returned.
pub fn generate(
    definition: &RecordDefinition,
    system_columns: &[Column],
) -> Result<ColumnSchema, SchemaError> {
    let mut columns = Vec::with_capacity(definition.field_count() + system_columns.len());

    for field in definition.fields() {
        let column_type = mapper::resolve(field)?;
        let mode = if field.required {
            ColumnMode::Required
        } else {
            ColumnMode::Nullable
        };
        columns.push(Column::new(
            field.name.to_lowercase(),
            column_type,
            mode,
            field.description,
        ));
    }

    columns.extend_from_slice(system_columns);
    Ok(ColumnSchema::from_columns(columns))
}
