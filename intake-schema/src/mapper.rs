//! Type mapper: field kinds to warehouse column types.
//!
//! The mapping is a static lookup table. A miss is a hard stop
//! (`SchemaError::UnmappedType`) rather than a silent default: an
//! unmapped kind would otherwise write malformed columns.

use intake_core::{ColumnType, FieldKind, FieldSpec, SchemaError};

/// Field kind to column type lookup table. Covers the kinds used by the
/// survey response model. Extend this table if future definitions
/// introduce additional kinds.
const TYPE_MAP: &[(FieldKind, ColumnType)] = &[
    (FieldKind::String, ColumnType::String),
    (FieldKind::Integer, ColumnType::Integer),
    (FieldKind::Float, ColumnType::Float),
    (FieldKind::Boolean, ColumnType::Boolean),
];

/// Map a field kind to its column type, if one exists.
pub fn map_field_kind(kind: FieldKind) -> Option<ColumnType> {
    TYPE_MAP
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, column_type)| *column_type)
}

/// Resolve a field's column type, naming the field on failure.
pub fn resolve(field: &FieldSpec) -> Result<ColumnType, SchemaError> {
    map_field_kind(field.kind).ok_or_else(|| SchemaError::UnmappedType {
        field: field.name.to_string(),
        kind: field.kind,
    })
}
