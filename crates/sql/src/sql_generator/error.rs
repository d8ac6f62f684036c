use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlGenError {
    #[error("Unable to read the remote type of column '{column}' from its adapter notes: {reason}")]
    ColumnTypeUnresolved { column: String, reason: String },

    #[error("Function {function} expects {expected} argument(s), got {actual}")]
    MalformedFunctionCall {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported node: {message} (node: {node_type})")]
    UnsupportedNode {
        message: String,
        node_type: &'static str,
    },
}

impl SqlGenError {
    pub fn to_pgvs_error(self, dialect_name: &str) -> pgvs_error::PgvsError {
        use pgvs_error::{ErrorCode, ErrorContext, PgvsError};

        match self {
            SqlGenError::ColumnTypeUnresolved { column, reason } => PgvsError::new(
                ErrorCode::ColumnTypeUnresolved,
                format!(
                    "Unable to read the remote type of column '{}' from its adapter notes",
                    column
                ),
            )
            .with_context(ErrorContext::Generation {
                dialect: dialect_name.to_string(),
                node: format!("column {}", column),
                reason,
            })
            .with_hint("Refresh the virtual schema so that column metadata is discovered again"),
            SqlGenError::MalformedFunctionCall {
                function,
                expected,
                actual,
            } => PgvsError::new(
                ErrorCode::MalformedFunctionCall,
                format!(
                    "Function {} expects {} argument(s), got {}",
                    function, expected, actual
                ),
            )
            .with_context(ErrorContext::Generation {
                dialect: dialect_name.to_string(),
                node: function.to_string(),
                reason: "argument count mismatch".to_string(),
            }),
            SqlGenError::UnsupportedNode { message, node_type } => PgvsError::new(
                ErrorCode::UnsupportedNode,
                format!(
                    "Node '{}' not supported for SQL generation: {}",
                    node_type, message
                ),
            )
            .with_context(ErrorContext::Generation {
                dialect: dialect_name.to_string(),
                node: node_type.to_string(),
                reason: message,
            })
            .with_hint("The pushed-down query uses a construct the dialect does not declare"),
        }
    }
}
