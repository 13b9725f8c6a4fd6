//! Record descriptor: the binary wire-format field layout used to
//! serialize a row for committed writes.
//!
//! The descriptor mirrors the column schema 1:1 - each column becomes a
//! numbered field (numbering starts at 1, schema order) with a scalar
//! wire type. Regenerating from the same schema is deterministic.

use intake_core::{ColumnSchema, ColumnType};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto};

/// Scalar wire type of a descriptor field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Int64,
    Double,
    Bool,
    /// Timestamps travel as epoch microseconds in an int64 field.
    TimestampMicros,
}

impl ScalarType {
    fn from_column_type(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::String => ScalarType::String,
            ColumnType::Integer => ScalarType::Int64,
            ColumnType::Float => ScalarType::Double,
            ColumnType::Boolean => ScalarType::Bool,
            ColumnType::Timestamp => ScalarType::TimestampMicros,
        }
    }

    /// The protobuf field type for this scalar.
    pub fn proto_type(self) -> Type {
        match self {
            ScalarType::String => Type::String,
            ScalarType::Int64 | ScalarType::TimestampMicros => Type::Int64,
            ScalarType::Double => Type::Double,
            ScalarType::Bool => Type::Bool,
        }
    }
}

/// One numbered field of the record descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name (already lowercased by schema generation).
    pub name: String,
    /// Wire field number; starts at 1 and follows schema order.
    pub number: u32,
    pub scalar: ScalarType,
    /// Whether the column is required; nullable fields are optional on
    /// the wire and left unset when the row value is null.
    pub required: bool,
}

/// Binary wire-format descriptor for one table's rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    message_name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// Derive a descriptor from a column schema. Field count, order, and
    /// numbering always match the schema exactly.
    pub fn from_schema(message_name: &str, schema: &ColumnSchema) -> Self {
        let fields = schema
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| FieldDescriptor {
                name: column.name.clone(),
                number: index as u32 + 1,
                scalar: ScalarType::from_column_type(column.column_type),
                required: column.mode == intake_core::ColumnMode::Required,
            })
            .collect();

        Self {
            message_name: message_name.to_string(),
            fields,
        }
    }

    pub fn message_name(&self) -> &str {
        &self.message_name
    }

    /// Fields in wire-number order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Look up a field by column name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Render as a proto2 `DescriptorProto` for write-channel
    /// registration.
    pub fn to_proto(&self) -> DescriptorProto {
        let fields = self
            .fields
            .iter()
            .map(|f| {
                let label = if f.required {
                    Label::Required
                } else {
                    Label::Optional
                };
                FieldDescriptorProto {
                    name: Some(f.name.clone()),
                    number: Some(f.number as i32),
                    label: Some(label as i32),
                    r#type: Some(f.scalar.proto_type() as i32),
                    ..Default::default()
                }
            })
            .collect();

        DescriptorProto {
            name: Some(self.message_name.clone()),
            field: fields,
            ..Default::default()
        }
    }
}
