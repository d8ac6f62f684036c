use crate::dialects::error::ConfigError;
use crate::dialects::postgres::identifiers::{
    contains_uppercase, is_unquoted_identifier, CaseFolding,
};

/// `IGNORE_ERRORS` switch that skips uppercase tables instead of failing.
pub const IGNORE_UPPERCASE_TABLES_SWITCH: &str = "POSTGRESQL_UPPERCASE_TABLES";

/// Decides which remote tables can be exposed under the folding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFilter {
    pub folding: CaseFolding,
    pub ignore_uppercase_tables: bool,
}

impl TableFilter {
    pub fn new(folding: CaseFolding, ignore_uppercase_tables: bool) -> Self {
        Self {
            folding,
            ignore_uppercase_tables,
        }
    }

    /// Under upper-case folding a table with uppercase characters is unreachable,
    /// because generated SQL lowercases every identifier.
    pub fn is_included(&self, table_name: &str) -> Result<bool, ConfigError> {
        if !contains_uppercase(table_name) || is_unquoted_identifier(table_name) {
            return Ok(true);
        }

        match self.folding {
            CaseFolding::PreserveOriginalCase => Ok(true),
            CaseFolding::ConvertToUpper if self.ignore_uppercase_tables => {
                tracing::info!(
                    target: "metadata",
                    table = table_name,
                    "Ignoring table with uppercase characters in its name"
                );
                Ok(false)
            }
            CaseFolding::ConvertToUpper => Err(ConfigError::UppercaseTable {
                table: table_name.to_string(),
                identifier_mapping: self.folding.as_str(),
                ignore_switch: IGNORE_UPPERCASE_TABLES_SWITCH,
            }),
        }
    }
}
