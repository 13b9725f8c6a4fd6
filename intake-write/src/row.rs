//! Row construction from validated survey responses.
//!
//! The row structure must match the schema generated from the survey
//! response definition - the two stay in sync because both derive from
//! the same model. Keys are lowercased to match the generated column
//! names (PA1 -> pa1); system columns use the underscore prefix.

use chrono::Utc;
use intake_core::{Row, SurveyResponse, Timestamp, Value};
use intake_schema::{CREATED_AT_COLUMN, PROCESSED_COLUMN};

/// Build a row from a validated record, stamping the current UTC time.
pub fn build_row(record: &SurveyResponse) -> Row {
    build_row_at(record, Utc::now())
}

/// Build a row with an explicit creation timestamp.
///
/// Dumps the record's fields to a flat mapping, lowercases every key,
/// then sets the two system values: `_created_at` = `now` and
/// `_processed` = false. Nullable fields without data become explicit
/// nulls, never absent entries.
pub fn build_row_at(record: &SurveyResponse, now: Timestamp) -> Row {
    let mut row = Row::new();

    // The model is a flat struct of scalars, so this serialization is
    // infallible by construction.
    let dumped =
        serde_json::to_value(record).expect("survey response serializes to a flat JSON object");

    if let serde_json::Value::Object(map) = dumped {
        for (key, value) in map {
            if let Some(slot) = Value::from_json(value) {
                row.set(key.to_lowercase(), slot);
            }
        }
    }

    row.set(CREATED_AT_COLUMN, Some(Value::Timestamp(now)));
    row.set(PROCESSED_COLUMN, Some(Value::Bool(false)));
    row
}
