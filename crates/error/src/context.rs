//! # Error Contexts
//!
//! Structured metadata attached to errors so callers can react without parsing messages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ErrorContext {
    /// Context for the 3001-3004, 3006 and 3008 property errors
    Property {
        property: String,
        value: Option<String>,
        allowed_values: Vec<String>,
    },

    /// Context for PGVS-3005 (UppercaseTable)
    Table {
        table: String,
        identifier_mapping: String,
    },

    /// Context for generation errors (2001-2003)
    Generation {
        dialect: String,
        node: String,
        reason: String,
    },

    /// Context for PGVS-3007 (InvalidConfigFile)
    ConfigFile {
        file_path: String,
    },
}
