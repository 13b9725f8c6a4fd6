//! Memoized table models.
//!
//! Schema and descriptor derivation are pure transforms, so each table's
//! results are computed once per process and shared. Registering a new
//! table means adding a definition and a `Lazy` entry here.

use crate::descriptor::RecordDescriptor;
use crate::generator::{generate, system_columns};
use intake_core::{survey_response_definition, ColumnSchema, RecordDefinition};
use once_cell::sync::Lazy;

/// Everything derived from one record definition: the definition itself,
/// its column schema, and its wire descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub definition: RecordDefinition,
    pub schema: ColumnSchema,
    pub descriptor: RecordDescriptor,
}

impl TableModel {
    fn build(definition: RecordDefinition) -> Self {
        let schema = generate(&definition, &system_columns())
            .expect("registered definition maps to column types");
        let descriptor = RecordDescriptor::from_schema(definition.name, &schema);
        Self {
            definition,
            schema,
            descriptor,
        }
    }
}

static SURVEY_RESPONSES: Lazy<TableModel> =
    Lazy::new(|| TableModel::build(survey_response_definition()));

/// The survey responses table model.
pub fn survey_responses() -> &'static TableModel {
    &SURVEY_RESPONSES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_entry_is_memoized_and_consistent() {
        let first = survey_responses();
        let second = survey_responses();
        assert!(std::ptr::eq(first, second));

        assert_eq!(first.schema.len(), first.definition.field_count() + 2);
        assert_eq!(first.descriptor.field_count(), first.schema.len());
    }
}
