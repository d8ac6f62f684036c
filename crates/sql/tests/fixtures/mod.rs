
pub use crate::common::{clicks_table, column, column_metadata, init_tracing, properties, typed_table};
pub use pgvs_sql::ast::*;
pub use pgvs_sql::dialects::postgres::{CaseFolding, IDENTIFIER_MAPPING_PROPERTY};
pub use pgvs_sql::{PostgresDialect, SqlGenerationContext};

/// Statements generated for PostgreSQL must parse as PostgreSQL.
#[allow(dead_code)]
pub fn assert_parses(sql: &str) {
    let dialect = sqlparser::dialect::PostgreSqlDialect {};
    if let Err(e) = sqlparser::parser::Parser::parse_sql(&dialect, sql) {
        panic!("generated SQL does not parse: {}\n{}", e, sql);
    }
}
