//! Error types for intake pipeline operations.
//!
//! Each layer has its own error enum so callers can pattern-match on the
//! failure kind. The split follows the retry policy: errors that are safe
//! to retry surface to the caller; errors that would duplicate a side
//! effect on retry are reported as outcomes instead (see intake-confirm).

use crate::record::FieldKind;
use thiserror::Error;

/// Schema-generation errors. Fatal: generation aborts on the first
/// unmappable field so a partial schema is never returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("No column type mapping for field '{field}' with kind {kind}. Add an entry to the type map in intake-schema.")]
    UnmappedType { field: String, kind: FieldKind },
}

/// Commit-writer errors. None are retried internally; retry is the
/// caller's responsibility.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WriteError {
    #[error("Failed to open write channel for {table}: {reason}")]
    ChannelOpen { table: String, reason: String },

    #[error("Append to {table} (stream {stream_id}) failed: {reason}")]
    AppendFailed {
        table: String,
        stream_id: String,
        reason: String,
    },

    #[error("Row {index} rejected by {table} (stream {stream_id}) with code {code}: {message}")]
    RowRejected {
        table: String,
        stream_id: String,
        index: usize,
        code: i32,
        message: String,
    },

    #[error("Failed to finalize write channel for {table} (stream {stream_id}): {reason}")]
    FinalizeFailed {
        table: String,
        stream_id: String,
        reason: String,
    },
}

/// Completion-flag store errors. These are infrastructure failures, not
/// "no rows matched" outcomes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Flag store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Flag query failed for response {response_id}: {reason}")]
    QueryFailed { response_id: String, reason: String },

    #[error("Flag update failed for response {response_id}: {reason}")]
    UpdateFailed { response_id: String, reason: String },
}

/// Notification sender errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("SMS sender credentials not configured")]
    NotConfigured,

    #[error("SMS rejected with status {status}: {message}")]
    Rejected { status: i32, message: String },

    #[error("SMS transport failed: {reason}")]
    Transport { reason: String },
}

/// Confirmation-envelope errors. Non-fatal by policy: a malformed
/// envelope is dropped with an acknowledgment, never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Envelope is not valid base64: {reason}")]
    Base64 { reason: String },

    #[error("Envelope payload is not valid JSON: {reason}")]
    Json { reason: String },

    #[error("Envelope failed validation: {reason}")]
    Validation { reason: String },
}

impl From<base64::DecodeError> for EnvelopeError {
    fn from(e: base64::DecodeError) -> Self {
        EnvelopeError::Base64 {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for EnvelopeError {
    fn from(e: serde_json::Error) -> Self {
        EnvelopeError::Json {
            reason: e.to_string(),
        }
    }
}

/// Confirmation-coordinator errors. Returned only when the delivery
/// infrastructure should redeliver the message: everything else ends in
/// an outcome, not an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfirmError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("SMS failed for response {response_id}: {source}")]
    Send {
        response_id: String,
        source: SendError,
    },
}

/// Top-level error type aggregating all intake error kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Send(#[from] SendError),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Confirm(#[from] ConfirmError),
}

/// Result type alias for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_type_error_names_the_field() {
        let err = SchemaError::UnmappedType {
            field: "response_data".to_string(),
            kind: FieldKind::Json,
        };
        let text = err.to_string();
        assert!(text.contains("response_data"));
        assert!(text.contains("Json"));
    }

    #[test]
    fn confirm_error_wraps_store_error() {
        let err: ConfirmError = StoreError::Unavailable {
            reason: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(err, ConfirmError::Store(_)));
    }
}
