use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error codes following the PGVS-XXXX format.
///
/// ## Code Ranges
/// - **2000-2999**: SQL generation errors (abort one statement)
/// - **3000-3999**: Configuration errors (raised at construction or discovery)
/// - **5000-5999**: Internal/System errors
///
/// Codes are stable across versions (semver contract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[non_exhaustive]
pub enum ErrorCode {
    // === Generation Errors (2000-2999) ===
    /// PGVS-2001: Remote type of a column could not be read from its adapter notes
    ColumnTypeUnresolved = 2001,
    /// PGVS-2002: Function call does not carry the arguments its rewrite needs
    MalformedFunctionCall = 2002,
    /// PGVS-2003: Node cannot be rendered in the requested position
    UnsupportedNode = 2003,

    // === Configuration Errors (3000-3999) ===
    /// PGVS-3001: Identifier mapping property holds an unknown value
    InvalidIdentifierMapping = 3001,
    /// PGVS-3002: IGNORE_ERRORS lists an unknown switch
    UnknownIgnoredError = 3002,
    /// PGVS-3003: Property is not supported by the dialect
    UnsupportedProperty = 3003,
    /// PGVS-3004: Required property is missing
    MissingRequiredProperty = 3004,
    /// PGVS-3005: Remote table name cannot be represented under the folding policy
    UppercaseTable = 3005,
    /// PGVS-3006: SQL dialect is not supported
    UnsupportedDialect = 3006,
    /// PGVS-3007: Property file could not be loaded
    InvalidConfigFile = 3007,
    /// PGVS-3008: LOG_LEVEL holds an unknown level name
    InvalidLogLevel = 3008,

    // === Internal Errors (5000-5999) ===
    /// PGVS-5002: Serialization/deserialization failed
    SerializationFailed = 5002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the formatted code string (e.g., "PGVS-3001")
    pub fn as_str(&self) -> String {
        format!("PGVS-{:04}", self.as_u16())
    }

    pub fn category(&self) -> ErrorCategory {
        match self.as_u16() {
            2000..=2999 => ErrorCategory::Generation,
            3000..=3999 => ErrorCategory::Config,
            _ => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> String {
        code.as_str()
    }
}

impl TryFrom<String> for ErrorCode {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        let num: u16 = s
            .strip_prefix("PGVS-")
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| "Invalid format".to_string())?;
        Self::try_from(num).map_err(|_| "Unknown code".to_string())
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(n: u16) -> std::result::Result<Self, Self::Error> {
        match n {
            2001 => Ok(Self::ColumnTypeUnresolved),
            2002 => Ok(Self::MalformedFunctionCall),
            2003 => Ok(Self::UnsupportedNode),
            3001 => Ok(Self::InvalidIdentifierMapping),
            3002 => Ok(Self::UnknownIgnoredError),
            3003 => Ok(Self::UnsupportedProperty),
            3004 => Ok(Self::MissingRequiredProperty),
            3005 => Ok(Self::UppercaseTable),
            3006 => Ok(Self::UnsupportedDialect),
            3007 => Ok(Self::InvalidConfigFile),
            3008 => Ok(Self::InvalidLogLevel),
            5002 => Ok(Self::SerializationFailed),
            _ => Err(format!("Unknown error code: {}", n)),
        }
    }
}

/// Distinguishes the two failure kinds callers react to differently:
/// configuration problems block the adapter, generation problems abort one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCategory {
    Generation,
    Config,
    Internal,
}
