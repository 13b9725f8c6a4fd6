//! Binary row encoding against a record descriptor.
//!
//! Null columns are left unset rather than encoded as zero values: the
//! storage layer must distinguish "absent" from "empty/zero" for
//! nullable columns. A single uncoercible field is skipped with a
//! warning instead of failing the row - survey branching already
//! produces many nulls, and one malformed field must not block an
//! otherwise valid response.

use intake_core::{Row, Value};
use intake_schema::{FieldDescriptor, RecordDescriptor, ScalarType};
use prost::encoding::{bool as bool_codec, double, int64, string};
use tracing::warn;

/// Serialize a row against the descriptor, in wire-number order.
///
/// Encoding is best-effort per field; the only fatal error in this
/// layer is unmapped-type, and that surfaces at descriptor
/// construction, not here.
pub fn encode_row(row: &Row, descriptor: &RecordDescriptor) -> Vec<u8> {
    let mut buf = Vec::with_capacity(descriptor.field_count() * 8);

    for field in descriptor.fields() {
        // Absent slots and explicit nulls are both left unset.
        let Some(value) = row.value(&field.name) else {
            continue;
        };
        encode_field(field, value, &mut buf);
    }

    buf
}

fn encode_field(field: &FieldDescriptor, value: &Value, buf: &mut Vec<u8>) {
    match (field.scalar, value) {
        (ScalarType::String, Value::String(s)) => string::encode(field.number, s, buf),
        (ScalarType::Int64, Value::Integer(i)) => int64::encode(field.number, i, buf),
        (ScalarType::Double, Value::Float(f)) => double::encode(field.number, f, buf),
        (ScalarType::Double, Value::Integer(i)) => {
            let widened = *i as f64;
            double::encode(field.number, &widened, buf)
        }
        (ScalarType::Bool, Value::Bool(b)) => bool_codec::encode(field.number, b, buf),
        (ScalarType::TimestampMicros, Value::Timestamp(ts)) => {
            let micros = ts.timestamp_micros();
            int64::encode(field.number, &micros, buf)
        }
        (scalar, value) => {
            warn!(
                column = %field.name,
                expected = ?scalar,
                got = value_kind(value),
                "skipping field that does not coerce to its descriptor type"
            );
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "String",
        Value::Integer(_) => "Integer",
        Value::Float(_) => "Float",
        Value::Bool(_) => "Bool",
        Value::Timestamp(_) => "Timestamp",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use intake_core::{
        Column, ColumnMode, ColumnSchema, ColumnType, FieldKind, FieldSpec, RecordDefinition,
    };
    use intake_schema::{generate, system_columns, RecordDescriptor};
    use prost::encoding::{decode_key, decode_varint, WireType};

    fn small_descriptor() -> RecordDescriptor {
        let definition = RecordDefinition::new(
            "Small",
            vec![
                FieldSpec::required("response_id", FieldKind::String, ""),
                FieldSpec::nullable("age", FieldKind::Integer, ""),
                FieldSpec::nullable("consent", FieldKind::String, ""),
            ],
        );
        let schema = generate(&definition, &system_columns()).unwrap();
        RecordDescriptor::from_schema("Small", &schema)
    }

    /// Decode the wire keys present in an encoded buffer.
    fn field_numbers(mut buf: &[u8]) -> Vec<u32> {
        let mut numbers = Vec::new();
        while !buf.is_empty() {
            let (number, wire_type) = decode_key(&mut buf).unwrap();
            numbers.push(number);
            match wire_type {
                WireType::Varint => {
                    decode_varint(&mut buf).unwrap();
                }
                WireType::SixtyFourBit => {
                    buf = &buf[8..];
                }
                WireType::LengthDelimited => {
                    let len = decode_varint(&mut buf).unwrap() as usize;
                    buf = &buf[len..];
                }
                other => panic!("unexpected wire type {:?}", other),
            }
        }
        numbers
    }

    #[test]
    fn null_columns_are_left_unset() {
        let descriptor = small_descriptor();
        let mut row = Row::new();
        row.set("response_id", Some(Value::String("R_1".into())));
        row.set("age", None);
        row.set("consent", None);
        row.set("_created_at", Some(Value::Timestamp(Utc::now())));
        row.set("_processed", Some(Value::Bool(false)));

        let bytes = encode_row(&row, &descriptor);
        let numbers = field_numbers(&bytes);

        // response_id (1), _created_at (4), _processed (5); nulls absent.
        assert_eq!(numbers, vec![1, 4, 5]);
    }

    #[test]
    fn fields_encode_in_wire_number_order() {
        let descriptor = small_descriptor();
        let mut row = Row::new();
        row.set("consent", Some(Value::String("Yes".into())));
        row.set("age", Some(Value::Integer(34)));
        row.set("response_id", Some(Value::String("R_1".into())));
        row.set("_created_at", Some(Value::Timestamp(Utc::now())));
        row.set("_processed", Some(Value::Bool(false)));

        let bytes = encode_row(&row, &descriptor);
        assert_eq!(field_numbers(&bytes), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn encode_skips_uncoercible_field() {
        // A malformed single field is dropped; the rest of the row
        // still encodes.
        let descriptor = small_descriptor();
        let mut row = Row::new();
        row.set("response_id", Some(Value::String("R_1".into())));
        row.set("age", Some(Value::String("thirty-four".into())));
        row.set("_created_at", Some(Value::Timestamp(Utc::now())));
        row.set("_processed", Some(Value::Bool(false)));

        let bytes = encode_row(&row, &descriptor);
        let numbers = field_numbers(&bytes);
        assert!(!numbers.contains(&2), "uncoercible age should be skipped");
        assert!(numbers.contains(&1));
    }

    #[test]
    fn timestamp_encodes_as_epoch_micros() {
        let schema = ColumnSchema::from_columns(vec![Column::new(
            "_created_at",
            ColumnType::Timestamp,
            ColumnMode::Required,
            "",
        )]);
        let descriptor = RecordDescriptor::from_schema("TsOnly", &schema);

        let ts = Utc.with_ymd_and_hms(2026, 9, 5, 12, 0, 0).unwrap();
        let mut row = Row::new();
        row.set("_created_at", Some(Value::Timestamp(ts)));

        let bytes = encode_row(&row, &descriptor);
        let mut slice = bytes.as_slice();
        let (number, wire_type) = decode_key(&mut slice).unwrap();
        assert_eq!(number, 1);
        assert_eq!(wire_type, WireType::Varint);
        let micros = decode_varint(&mut slice).unwrap() as i64;
        assert_eq!(micros, ts.timestamp_micros());
    }

    #[test]
    fn encoding_is_deterministic() {
        let descriptor = small_descriptor();
        let mut row = Row::new();
        row.set("response_id", Some(Value::String("R_1".into())));
        row.set("age", Some(Value::Integer(34)));
        let ts = Utc.with_ymd_and_hms(2026, 9, 5, 12, 0, 0).unwrap();
        row.set("_created_at", Some(Value::Timestamp(ts)));
        row.set("_processed", Some(Value::Bool(false)));

        assert_eq!(encode_row(&row, &descriptor), encode_row(&row, &descriptor));
    }
}
