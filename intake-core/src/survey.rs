//! The intake survey response model and its record definition.
//!
//! The inbound JSON is keyed by the semantic field names below
//! (case-sensitive on input; lowercased on storage). Only `response_id`
//! and `survey_id` are required: survey branching may route participants
//! to the end early, so every other field can be absent.
//!
//! When the survey changes:
//!     1. Add/remove fields on `SurveyResponse`.
//!     2. Mirror the change in `survey_response_definition()`.
//!     3. The column schema and wire descriptor regenerate automatically.

use crate::record::{FieldKind, FieldSpec, RecordDefinition};
use serde::{Deserialize, Serialize};

/// Full survey response from the submission endpoint.
///
/// All fields hold human-readable label text as sent by the survey
/// platform's piped text. The only integer field is `age`, a numeric
/// text entry rather than a coded choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    // === System identifiers (required) ===
    /// Response identifier (e.g., R_1KNaaa...).
    pub response_id: String,
    /// Survey identifier (e.g., SV_86vM...).
    pub survey_id: String,

    // === Consent & identification ===
    /// Consent label; 'Yes' = agreed.
    pub consent: Option<String>,
    /// Panel participant identifier (free text).
    pub prolific_pid: Option<String>,

    // === Eligibility flags (label: 'Yes' or 'No') ===
    pub age_flag: Option<String>,
    pub fte_flag: Option<String>,
    pub location_flag: Option<String>,
    pub language_flag: Option<String>,

    // === Scheduling ===
    /// Raw phone digits from survey text entry.
    pub phone: Option<String>,
    /// Timezone label (e.g., US/Central).
    pub timezone: Option<String>,
    /// Scheduling date as entered in the survey.
    pub selected_date: Option<String>,

    // === Demographics ===
    /// Participant age (numeric text entry).
    pub age: Option<i64>,
    pub ethnicity: Option<String>,
    pub gender_identity: Option<String>,
    pub job_tenure: Option<String>,
    pub education_level: Option<String>,
    pub remote_flag: Option<String>,

    // === Positive Affect (PA1-PA5) ===
    #[serde(rename = "PA1")]
    pub pa1: Option<String>,
    #[serde(rename = "PA2")]
    pub pa2: Option<String>,
    #[serde(rename = "PA3")]
    pub pa3: Option<String>,
    #[serde(rename = "PA4")]
    pub pa4: Option<String>,
    #[serde(rename = "PA5")]
    pub pa5: Option<String>,

    // === Negative Affect (NA1-NA5) ===
    #[serde(rename = "NA1")]
    pub na1: Option<String>,
    #[serde(rename = "NA2")]
    pub na2: Option<String>,
    #[serde(rename = "NA3")]
    pub na3: Option<String>,
    #[serde(rename = "NA4")]
    pub na4: Option<String>,
    #[serde(rename = "NA5")]
    pub na5: Option<String>,

    // === Psychological Breach (BR1-BR5) ===
    #[serde(rename = "BR1")]
    pub br1: Option<String>,
    #[serde(rename = "BR2")]
    pub br2: Option<String>,
    #[serde(rename = "BR3")]
    pub br3: Option<String>,
    #[serde(rename = "BR4")]
    pub br4: Option<String>,
    #[serde(rename = "BR5")]
    pub br5: Option<String>,

    // === Psychological Violation (VIO1-VIO4) ===
    #[serde(rename = "VIO1")]
    pub vio1: Option<String>,
    #[serde(rename = "VIO2")]
    pub vio2: Option<String>,
    #[serde(rename = "VIO3")]
    pub vio3: Option<String>,
    #[serde(rename = "VIO4")]
    pub vio4: Option<String>,

    // === Job Satisfaction ===
    #[serde(rename = "JS1")]
    pub js1: Option<String>,
}

/// The record definition for survey responses: the single source of
/// truth the column schema and wire descriptor derive from. Field order
/// here is field order everywhere.
pub fn survey_response_definition() -> RecordDefinition {
    use FieldKind::{Integer, String};

    RecordDefinition::new(
        "SurveyResponse",
        vec![
            // System identifiers
            FieldSpec::required("response_id", String, "Response identifier (e.g., R_1KNaaa...)"),
            FieldSpec::required("survey_id", String, "Survey identifier (e.g., SV_86vM...)"),
            // Consent & identification
            FieldSpec::nullable("consent", String, "Consent label; 'Yes' = agreed"),
            FieldSpec::nullable("prolific_pid", String, "Panel participant identifier (free text)"),
            // Eligibility flags
            FieldSpec::nullable("age_flag", String, "Age eligibility label; 'Yes' = meets criteria"),
            FieldSpec::nullable("fte_flag", String, "Full-time employment label; 'Yes' = meets criteria"),
            FieldSpec::nullable("location_flag", String, "Location eligibility label; 'Yes' = meets criteria"),
            FieldSpec::nullable("language_flag", String, "Language eligibility label; 'Yes' = meets criteria"),
            // Scheduling
            FieldSpec::nullable("phone", String, "Raw phone digits from survey text entry"),
            FieldSpec::nullable("timezone", String, "Timezone label (e.g., US/Central)"),
            FieldSpec::nullable("selected_date", String, "Scheduling date as entered in the survey"),
            // Demographics
            FieldSpec::nullable("age", Integer, "Participant age (numeric text entry)"),
            FieldSpec::nullable("ethnicity", String, "Ethnicity label (e.g., Asian)"),
            FieldSpec::nullable("gender_identity", String, "Gender identity label (e.g., Non-binary)"),
            FieldSpec::nullable("job_tenure", String, "Job tenure label (e.g., 3 to 5 years)"),
            FieldSpec::nullable("education_level", String, "Education label (e.g., Bachelor's degree)"),
            FieldSpec::nullable("remote_flag", String, "Remote work label (e.g., Yes)"),
            // Positive Affect
            FieldSpec::nullable("PA1", String, "Alert (label)"),
            FieldSpec::nullable("PA2", String, "Inspired (label)"),
            FieldSpec::nullable("PA3", String, "Determined (label)"),
            FieldSpec::nullable("PA4", String, "Attentive (label)"),
            FieldSpec::nullable("PA5", String, "Active (label)"),
            // Negative Affect
            FieldSpec::nullable("NA1", String, "Upset (label)"),
            FieldSpec::nullable("NA2", String, "Hostile (label)"),
            FieldSpec::nullable("NA3", String, "Ashamed (label)"),
            FieldSpec::nullable("NA4", String, "Nervous (label)"),
            FieldSpec::nullable("NA5", String, "Afraid (label)"),
            // Psychological Breach
            FieldSpec::nullable("BR1", String, "Breach item 1 (label)"),
            FieldSpec::nullable("BR2", String, "Breach item 2 (label)"),
            FieldSpec::nullable("BR3", String, "Breach item 3 (label)"),
            FieldSpec::nullable("BR4", String, "Breach item 4 (label)"),
            FieldSpec::nullable("BR5", String, "Breach item 5 (label)"),
            // Psychological Violation
            FieldSpec::nullable("VIO1", String, "Violation item 1 (label)"),
            FieldSpec::nullable("VIO2", String, "Violation item 2 (label)"),
            FieldSpec::nullable("VIO3", String, "Violation item 3 (label)"),
            FieldSpec::nullable("VIO4", String, "Violation item 4 (label)"),
            // Job Satisfaction
            FieldSpec::nullable("JS1", String, "Job satisfaction item 1 (label)"),
        ],
    )
}
