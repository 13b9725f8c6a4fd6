//! Application configuration.
//!
//! Explicitly constructed and passed in at a single initialization point
//! (constructor injection), not module-level globals. Loaded from
//! environment variables with development defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Warehouse table names, grouped so dataset-level settings stay separate
/// from table references. Add new tables here as the pipeline grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableNames {
    /// Raw intake survey responses.
    pub survey_responses: String,
}

/// Warehouse project and dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseConfig {
    pub project_id: String,
    pub dataset_id: String,
    pub tables: TableNames,
}

impl WarehouseConfig {
    /// Fully qualified reference for one of this warehouse's tables.
    pub fn table_ref(&self, table: &str) -> TableRef {
        TableRef {
            project_id: self.project_id.clone(),
            dataset_id: self.dataset_id.clone(),
            table: table.to_string(),
        }
    }
}

/// SMS sender configuration. Credentials are injected by the deploy
/// environment and resolved by the concrete sender, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsConfig {
    /// E.164 number confirmations are sent from.
    pub from_number: String,
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub warehouse: WarehouseConfig,
    /// Topic the writer publishes confirmation messages to.
    pub confirm_topic: String,
    pub sms: SmsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            warehouse: WarehouseConfig {
                project_id: "intake-dev".to_string(),
                dataset_id: "survey_data".to_string(),
                tables: TableNames {
                    survey_responses: "survey_responses".to_string(),
                },
            },
            confirm_topic: "intake-processed".to_string(),
            sms: SmsConfig {
                from_number: "+15550100000".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Create AppConfig from environment variables.
    ///
    /// Environment variables:
    /// - `INTAKE_PROJECT_ID`: warehouse project (default: "intake-dev")
    /// - `INTAKE_DATASET_ID`: warehouse dataset (default: "survey_data")
    /// - `INTAKE_SURVEY_RESPONSES_TABLE`: responses table (default: "survey_responses")
    /// - `INTAKE_CONFIRM_TOPIC`: confirmation topic (default: "intake-processed")
    /// - `INTAKE_SMS_FROM_NUMBER`: sender number (default: "+15550100000")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            warehouse: WarehouseConfig {
                project_id: env_or("INTAKE_PROJECT_ID", &defaults.warehouse.project_id),
                dataset_id: env_or("INTAKE_DATASET_ID", &defaults.warehouse.dataset_id),
                tables: TableNames {
                    survey_responses: env_or(
                        "INTAKE_SURVEY_RESPONSES_TABLE",
                        &defaults.warehouse.tables.survey_responses,
                    ),
                },
            },
            confirm_topic: env_or("INTAKE_CONFIRM_TOPIC", &defaults.confirm_topic),
            sms: SmsConfig {
                from_number: env_or("INTAKE_SMS_FROM_NUMBER", &defaults.sms.from_number),
            },
        }
    }

    /// Reference to the survey responses table.
    pub fn survey_responses_table(&self) -> TableRef {
        self.warehouse
            .table_ref(&self.warehouse.tables.survey_responses)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Fully qualified warehouse table reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    pub project_id: String,
    pub dataset_id: String,
    pub table: String,
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.project_id, self.dataset_id, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ref_renders_fully_qualified() {
        let config = AppConfig::default();
        let table = config.survey_responses_table();
        assert_eq!(table.to_string(), "intake-dev.survey_data.survey_responses");
    }

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert!(!config.confirm_topic.is_empty());
        assert!(config.sms.from_number.starts_with('+'));
    }
}
