//! Intake Core - Entity Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types - no pipeline logic.

pub mod config;
pub mod error;
pub mod message;
pub mod record;
pub mod row;
pub mod schema;
pub mod survey;

pub use config::{AppConfig, SmsConfig, TableNames, TableRef, WarehouseConfig};
pub use error::{
    ConfirmError, EnvelopeError, IntakeError, IntakeResult, SchemaError, SendError, StoreError,
    WriteError,
};
pub use message::ConfirmationMessage;
pub use record::{FieldKind, FieldSpec, RecordDefinition};
pub use row::{Row, Value};
pub use schema::{Column, ColumnMode, ColumnSchema, ColumnType};
pub use survey::{survey_response_definition, SurveyResponse};

use chrono::{DateTime, Utc};

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;
