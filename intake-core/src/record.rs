//! Record definitions: the typed field tables that schemas derive from.
//!
//! A `RecordDefinition` is an explicit field-descriptor table built once at
//! registration time. The storage schema and the wire descriptor both derive
//! from it, so field names, types, and order have a single source of truth.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Boolean,
    /// Opaque JSON payload. Carried by legacy audit tables; the type mapper
    /// has no column mapping for it.
    Json,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "String",
            FieldKind::Integer => "Integer",
            FieldKind::Float => "Float",
            FieldKind::Boolean => "Boolean",
            FieldKind::Json => "Json",
        };
        f.write_str(name)
    }
}

/// One field in a record definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Declared field name. Casing is preserved here; column names are
    /// lowercased at schema-generation time.
    pub name: &'static str,
    /// Primitive type of the field.
    pub kind: FieldKind,
    /// Required fields become REQUIRED columns; the rest are NULLABLE.
    pub required: bool,
    /// Human-readable description, carried into the column schema.
    pub description: &'static str,
}

impl FieldSpec {
    /// A required field (no default, no optional wrapper).
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    /// A nullable field.
    pub const fn nullable(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

/// An ordered set of named fields. Declaration order is preserved end to
/// end: definition order determines schema order, which determines wire
/// field numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDefinition {
    /// Definition name, used as the wire message name.
    pub name: &'static str,
    fields: Vec<FieldSpec>,
}

impl RecordDefinition {
    /// Create a definition from an ordered field table.
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, fields }
    }

    /// Number of declared fields (system columns not included).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by its declared name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
