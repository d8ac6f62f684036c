use pgvs_error::{suggest, ErrorCode, ErrorContext, PgvsError};
use thiserror::Error;

/// Problems with the adapter properties or with what discovery finds under them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for property {property}")]
    InvalidIdentifierMapping {
        property: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Unknown error identifier '{value}' in property {property}")]
    UnknownIgnoredError {
        property: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Property '{property}' is not supported by dialect {dialect}")]
    UnsupportedProperty {
        property: String,
        dialect: &'static str,
        supported: Vec<&'static str>,
    },

    #[error("Required property {property} is missing")]
    MissingRequiredProperty { property: &'static str },

    #[error("Table '{table}' cannot be used in the virtual schema")]
    UppercaseTable {
        table: String,
        identifier_mapping: &'static str,
        ignore_switch: &'static str,
    },

    #[error("Unknown log level '{value}' in property {property}")]
    InvalidLogLevel {
        property: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("SQL dialect '{dialect}' is not supported")]
    UnsupportedDialect {
        dialect: String,
        supported: &'static [&'static str],
    },
}

fn property_context(property: &str, value: Option<&str>, allowed: &[&str]) -> ErrorContext {
    ErrorContext::Property {
        property: property.to_string(),
        value: value.map(str::to_string),
        allowed_values: allowed.iter().map(|s| s.to_string()).collect(),
    }
}

fn pick_one_of(value: &str, allowed: &[&str]) -> String {
    match suggest(value, allowed) {
        Some(closest) => format!("Did you mean '{}'?", closest),
        None => format!("Pick one of: {}", allowed.join(", ")),
    }
}

impl From<ConfigError> for PgvsError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        match err {
            ConfigError::InvalidIdentifierMapping {
                property,
                value,
                allowed,
            } => PgvsError::new(ErrorCode::InvalidIdentifierMapping, message)
                .with_hint(pick_one_of(&value, allowed))
                .with_context(property_context(property, Some(&value), allowed)),
            ConfigError::UnknownIgnoredError {
                property,
                value,
                allowed,
            } => PgvsError::new(ErrorCode::UnknownIgnoredError, message)
                .with_hint(pick_one_of(&value, allowed))
                .with_context(property_context(property, Some(&value), allowed)),
            ConfigError::InvalidLogLevel {
                property,
                value,
                allowed,
            } => PgvsError::new(ErrorCode::InvalidLogLevel, message)
                .with_hint(pick_one_of(&value, allowed))
                .with_context(property_context(property, Some(&value), allowed)),
            ConfigError::UnsupportedProperty {
                property,
                supported,
                ..
            } => PgvsError::new(ErrorCode::UnsupportedProperty, message)
                .with_hint(pick_one_of(&property, &supported))
                .with_context(property_context(&property, None, &supported)),
            ConfigError::MissingRequiredProperty { property } => {
                PgvsError::new(ErrorCode::MissingRequiredProperty, message)
                    .with_hint(format!(
                        "Set {} to the name of the connection object for the remote database",
                        property
                    ))
                    .with_context(property_context(property, None, &[]))
            }
            ConfigError::UppercaseTable {
                table,
                identifier_mapping,
                ignore_switch,
            } => PgvsError::new(ErrorCode::UppercaseTable, message)
                .with_hint(format!(
                    "Set property IGNORE_ERRORS to {} to enforce schema creation",
                    ignore_switch
                ))
                .with_context(ErrorContext::Table {
                    table,
                    identifier_mapping: identifier_mapping.to_string(),
                }),
            ConfigError::UnsupportedDialect { dialect, supported } => {
                PgvsError::new(ErrorCode::UnsupportedDialect, message)
                    .with_hint(pick_one_of(&dialect, supported))
                    .with_context(property_context(
                        pgvs_common::properties::SQL_DIALECT_PROPERTY,
                        Some(&dialect),
                        supported,
                    ))
            }
        }
    }
}
