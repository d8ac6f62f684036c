//! # pgvs-error
//!
//! Unified error type for the PostgreSQL pushdown dialect.
//!
//! Every error carries:
//! - A stable numeric code (PGVS-XXXX) whose range tells configuration
//!   problems apart from generation problems
//! - Structured JSON context
//! - An optional mitigation hint

mod code;
mod context;
mod convert;

pub use code::{ErrorCategory, ErrorCode};
pub use context::ErrorContext;
pub use convert::suggest;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgvsError {
    /// Numeric error code (e.g., "PGVS-3005")
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Structured context for programmatic handling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    /// Mitigation the user can apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PgvsError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            hint: None,
        }
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    pub fn is_config_error(&self) -> bool {
        self.category() == ErrorCategory::Config
    }

    pub fn is_generation_error(&self) -> bool {
        self.category() == ErrorCategory::Generation
    }

    /// Serialize to JSON for adapter responses
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::warn!("Failed to serialize PgvsError: {}", e);
            format!(
                r#"{{"code":"{}","message":"Serialization failed"}}"#,
                self.code
            )
        })
    }
}

impl fmt::Display for PgvsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (Hint: {})", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for PgvsError {}

pub type Result<T> = std::result::Result<T, PgvsError>;
