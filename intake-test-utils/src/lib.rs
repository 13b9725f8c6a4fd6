//! Intake Test Utilities
//!
//! Centralized test infrastructure for the intake workspace:
//! - Fixtures for survey responses and confirmation messages
//! - Re-exported mocks for the warehouse, flag store, and SMS sender
//! - Re-exported core types for convenience

// Re-export mocks from their source crates
pub use intake_confirm::{MemoryFlagStore, MockSmsSender};
pub use intake_write::MemoryWarehouse;

// Re-export core types for convenience
pub use intake_core::{
    AppConfig, Column, ColumnMode, ColumnSchema, ColumnType, ConfirmError, ConfirmationMessage,
    EnvelopeError, FieldKind, FieldSpec, IntakeError, IntakeResult, RecordDefinition, Row,
    SchemaError, SendError, StoreError, SurveyResponse, TableRef, Timestamp, Value, WriteError,
    survey_response_definition,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Table reference used across pipeline tests.
pub fn test_table() -> TableRef {
    TableRef {
        project_id: "intake-dev".to_string(),
        dataset_id: "survey_data".to_string(),
        table: "survey_responses".to_string(),
    }
}

/// A fully-populated survey response: every optional field present.
pub fn full_survey_response() -> SurveyResponse {
    SurveyResponse {
        response_id: "R_1KNaaaBBccDDeeF".to_string(),
        survey_id: "SV_86vMabcdef".to_string(),
        consent: Some("Yes".to_string()),
        prolific_pid: Some("PID123".to_string()),
        age_flag: Some("Yes".to_string()),
        fte_flag: Some("Yes".to_string()),
        location_flag: Some("Yes".to_string()),
        language_flag: Some("Yes".to_string()),
        phone: Some("5551234567".to_string()),
        timezone: Some("US/Central".to_string()),
        selected_date: Some("09/05/2026".to_string()),
        age: Some(34),
        ethnicity: Some("Asian".to_string()),
        gender_identity: Some("Non-binary".to_string()),
        job_tenure: Some("3 to 5 years".to_string()),
        education_level: Some("Bachelor's degree".to_string()),
        remote_flag: Some("Yes".to_string()),
        pa1: Some("Alert".to_string()),
        pa2: Some("Inspired".to_string()),
        pa3: Some("Determined".to_string()),
        pa4: Some("Attentive".to_string()),
        pa5: Some("Active".to_string()),
        na1: Some("Upset".to_string()),
        na2: Some("Hostile".to_string()),
        na3: Some("Ashamed".to_string()),
        na4: Some("Nervous".to_string()),
        na5: Some("Afraid".to_string()),
        br1: Some("Slightly agree".to_string()),
        br2: Some("Agree".to_string()),
        br3: Some("Neutral".to_string()),
        br4: Some("Disagree".to_string()),
        br5: Some("Agree".to_string()),
        vio1: Some("Agree".to_string()),
        vio2: Some("Neutral".to_string()),
        vio3: Some("Disagree".to_string()),
        vio4: Some("Agree".to_string()),
        js1: Some("Satisfied".to_string()),
    }
}

/// An early-exit survey response: only the required identifiers.
pub fn partial_survey_response() -> SurveyResponse {
    SurveyResponse {
        response_id: "R_partial001".to_string(),
        survey_id: "SV_86vMabcdef".to_string(),
        ..Default::default()
    }
}

/// A confirmation message matching [`full_survey_response`], with the
/// phone normalized and the date in ISO wire form.
pub fn confirmation_message() -> ConfirmationMessage {
    ConfirmationMessage {
        response_id: "R_1KNaaaBBccDDeeF".to_string(),
        phone: "+15551234567".to_string(),
        selected_date: "2026-09-05".to_string(),
        timezone: "US/Central".to_string(),
    }
}

/// The envelope form of [`confirmation_message`].
pub fn confirmation_envelope() -> String {
    confirmation_message()
        .to_envelope()
        .expect("fixture message serializes")
}
