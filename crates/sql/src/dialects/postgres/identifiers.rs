//! Identifier case folding.
//!
//! PostgreSQL folds unquoted identifiers to lower case while the federation
//! engine folds them to upper case. The policy decides how names cross over.

use crate::dialects::error::ConfigError;
use crate::sql_generator::sanitize::quoted_ident;
use once_cell::sync::Lazy;
use pgvs_common::AdapterProperties;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlparser::ast::Ident;

pub const IDENTIFIER_MAPPING_PROPERTY: &str = "POSTGRESQL_IDENTIFIER_MAPPING";

/// Shape of a name PostgreSQL would produce from an unquoted identifier.
static UNQUOTED_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][0-9a-z_]*$").unwrap());

pub fn is_unquoted_identifier(identifier: &str) -> bool {
    UNQUOTED_IDENTIFIER.is_match(identifier)
}

pub fn contains_uppercase(identifier: &str) -> bool {
    identifier.chars().any(char::is_uppercase)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseFolding {
    #[default]
    ConvertToUpper,
    PreserveOriginalCase,
}

impl CaseFolding {
    pub const VALUES: &'static [&'static str] = &["CONVERT_TO_UPPER", "PRESERVE_ORIGINAL_CASE"];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseFolding::ConvertToUpper => "CONVERT_TO_UPPER",
            CaseFolding::PreserveOriginalCase => "PRESERVE_ORIGINAL_CASE",
        }
    }

    /// Exact match on the property value.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "CONVERT_TO_UPPER" => Ok(CaseFolding::ConvertToUpper),
            "PRESERVE_ORIGINAL_CASE" => Ok(CaseFolding::PreserveOriginalCase),
            other => Err(ConfigError::InvalidIdentifierMapping {
                property: IDENTIFIER_MAPPING_PROPERTY,
                value: other.to_string(),
                allowed: Self::VALUES,
            }),
        }
    }

    pub fn from_properties(properties: &AdapterProperties) -> Result<Self, ConfigError> {
        properties
            .get(IDENTIFIER_MAPPING_PROPERTY)
            .map_or(Ok(CaseFolding::default()), Self::parse)
    }

    /// Name the federation engine uses for a remote table.
    pub fn fold(&self, identifier: &str) -> String {
        match self {
            CaseFolding::ConvertToUpper if is_unquoted_identifier(identifier) => {
                identifier.to_uppercase()
            }
            _ => identifier.to_string(),
        }
    }

    /// Name the federation engine uses for a remote column.
    pub fn fold_column_name(&self, identifier: &str) -> String {
        match self {
            CaseFolding::ConvertToUpper => identifier.to_uppercase(),
            CaseFolding::PreserveOriginalCase => identifier.to_string(),
        }
    }

    /// Quoted identifier as it is written into generated SQL.
    pub fn quote(&self, identifier: &str) -> Ident {
        match self {
            CaseFolding::PreserveOriginalCase => quoted_ident(identifier),
            CaseFolding::ConvertToUpper => quoted_ident(&identifier.to_lowercase()),
        }
    }
}

impl std::fmt::Display for CaseFolding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
