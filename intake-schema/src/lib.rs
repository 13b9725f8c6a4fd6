//! Intake Schema - Schema Generation and Wire Descriptors
//!
//! Derives the warehouse column schema and the binary record descriptor
//! from a record definition. Both derivations are pure, deterministic
//! transforms; the per-table results are memoized in the registry.

pub mod descriptor;
pub mod generator;
pub mod mapper;
pub mod registry;

pub use descriptor::{FieldDescriptor, RecordDescriptor, ScalarType};
pub use generator::{generate, system_columns, CREATED_AT_COLUMN, PROCESSED_COLUMN};
pub use mapper::{map_field_kind, resolve};
pub use registry::{survey_responses, TableModel};
