//! Confirmation message: the minimal payload carried from the writer side
//! to the confirmation coordinator.
//!
//! Created once after a successful row commit; consumed at-least-once.
//! The wire form is base64-encoded JSON, matching the delivery
//! infrastructure's push envelope.

use crate::error::EnvelopeError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload for processed intake responses.
///
/// Contains only the fields the confirmation side needs; the full survey
/// response lives in the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationMessage {
    /// Response identifier (idempotency key).
    pub response_id: String,
    /// E.164 formatted phone number.
    pub phone: String,
    /// Participant's chosen date (ISO format, YYYY-MM-DD).
    pub selected_date: String,
    /// Timezone label (e.g., US/Central).
    pub timezone: String,
}

impl ConfirmationMessage {
    /// Serialize to the base64-encoded JSON envelope form.
    pub fn to_envelope(&self) -> Result<String, EnvelopeError> {
        let json = serde_json::to_vec(self)?;
        Ok(BASE64.encode(json))
    }

    /// Decode and validate a base64-encoded JSON envelope.
    ///
    /// Validation covers the fields the coordinator depends on: a
    /// non-empty identifier and phone, and a parseable selected date.
    pub fn from_envelope(envelope: &str) -> Result<Self, EnvelopeError> {
        let decoded = BASE64.decode(envelope.trim())?;
        let message: ConfirmationMessage = serde_json::from_slice(&decoded)?;
        message.validate()?;
        Ok(message)
    }

    fn validate(&self) -> Result<(), EnvelopeError> {
        if self.response_id.is_empty() {
            return Err(EnvelopeError::Validation {
                reason: "response_id is empty".to_string(),
            });
        }
        if self.phone.is_empty() {
            return Err(EnvelopeError::Validation {
                reason: "phone is empty".to_string(),
            });
        }
        self.selected_date().map(|_| ())
    }

    /// The selected date parsed from its ISO wire form.
    pub fn selected_date(&self) -> Result<NaiveDate, EnvelopeError> {
        self.selected_date
            .parse::<NaiveDate>()
            .map_err(|e| EnvelopeError::Validation {
                reason: format!("selected_date '{}' is not a date: {}", self.selected_date, e),
            })
    }
}
