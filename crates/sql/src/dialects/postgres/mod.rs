//! PostgreSQL dialect.
//!
//! [`PostgresDialect`] is built once per virtual schema from the adapter
//! properties. Construction validates every property, so a dialect that exists
//! is always usable; afterwards it is immutable and can be shared between threads.

pub mod capabilities;
pub mod generator;
pub mod identifiers;
pub mod metadata;
pub mod table_filter;
pub mod type_mapper;

use crate::ast::{ScalarFunction, SqlNode};
use crate::capabilities::Capabilities;
use crate::dialects::error::ConfigError;
use crate::dialects::function_mapper::FunctionMapper;
use crate::metadata::{
    CanonicalType, MetadataSnapshot, RemoteTable, RemoteTypeDescriptor, TypeMapper,
};
use crate::sql_generator::context::SqlGenerationContext;
use crate::sql_generator::dialect::{NullSorting, SqlDialect};
use crate::sql_generator::sanitize::verbatim;
use pgvs_common::properties::{
    COMMON_PROPERTIES, CONNECTION_NAME_PROPERTY, IGNORE_ERRORS_PROPERTY, LOG_LEVEL_PROPERTY,
    SQL_DIALECT_PROPERTY,
};
use pgvs_common::telemetry::{self, LOG_LEVELS};
use pgvs_common::AdapterProperties;
use pgvs_error::{ErrorCode, ErrorContext, PgvsError};
use sqlparser::ast::{BinaryOperator, Expr as SqlExpr, Ident, Value};

pub use self::capabilities::DISABLED_SCALAR_FUNCTIONS;
pub use self::generator::{
    postgres_function_mapper, PostgresSqlGenerator, SERIAL_TYPE_CASTS,
    TYPE_NAMES_CAST_TO_VARCHAR, TYPE_NAMES_NOT_SUPPORTED,
};
pub use self::identifiers::{CaseFolding, IDENTIFIER_MAPPING_PROPERTY};
pub use self::metadata::PostgresMetadataReader;
pub use self::table_filter::{TableFilter, IGNORE_UPPERCASE_TABLES_SWITCH};
pub use self::type_mapper::PostgresTypeMapper;

/// Values `IGNORE_ERRORS` may contain for this dialect.
pub const IGNORABLE_ERRORS: &[&str] = &[IGNORE_UPPERCASE_TABLES_SWITCH];

pub struct PostgresDialect {
    properties: AdapterProperties,
    case_folding: CaseFolding,
    table_filter: TableFilter,
    capabilities: Capabilities,
    type_mapper: PostgresTypeMapper,
    function_mapper: FunctionMapper,
}

impl std::fmt::Debug for PostgresDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresDialect")
            .field("case_folding", &self.case_folding)
            .field("table_filter", &self.table_filter)
            .finish_non_exhaustive()
    }
}

impl PostgresDialect {
    pub const NAME: &'static str = "POSTGRESQL";

    pub fn supported_properties() -> Vec<&'static str> {
        COMMON_PROPERTIES
            .iter()
            .copied()
            .chain(std::iter::once(IDENTIFIER_MAPPING_PROPERTY))
            .collect()
    }

    pub fn new(properties: AdapterProperties) -> Result<Self, PgvsError> {
        validate_properties(&properties)?;
        telemetry::init_logging_from_properties(&properties).map_err(|e| {
            PgvsError::new(ErrorCode::InvalidLogLevel, format!("{:#}", e))
        })?;

        let case_folding = CaseFolding::from_properties(&properties)?;
        let table_filter = TableFilter::new(
            case_folding,
            properties.ignores(IGNORE_UPPERCASE_TABLES_SWITCH),
        );

        tracing::debug!(
            target: "dialect",
            dialect = Self::NAME,
            identifier_mapping = %case_folding,
            ignore_uppercase_tables = table_filter.ignore_uppercase_tables,
            "Created dialect"
        );

        Ok(Self {
            properties,
            case_folding,
            table_filter,
            capabilities: capabilities::postgres_capabilities(),
            type_mapper: PostgresTypeMapper::new(),
            function_mapper: postgres_function_mapper(),
        })
    }

    /// Builds the dialect from a property file, see [`AdapterProperties::from_file`].
    pub fn from_file(path: &str) -> Result<Self, PgvsError> {
        let properties = AdapterProperties::from_file(path).map_err(|e| {
            PgvsError::new(ErrorCode::InvalidConfigFile, format!("{:#}", e)).with_context(
                ErrorContext::ConfigFile {
                    file_path: path.to_string(),
                },
            )
        })?;
        Self::new(properties)
    }

    pub fn properties(&self) -> &AdapterProperties {
        &self.properties
    }

    pub fn case_folding(&self) -> CaseFolding {
        self.case_folding
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn map_remote_type(&self, descriptor: &RemoteTypeDescriptor) -> CanonicalType {
        self.type_mapper.map_type(descriptor)
    }

    pub fn is_table_included(&self, table_name: &str) -> Result<bool, PgvsError> {
        Ok(self.table_filter.is_included(table_name)?)
    }

    /// Context for statements pushed to the schema configured in the properties.
    pub fn generation_context(&self) -> SqlGenerationContext {
        SqlGenerationContext::from_properties(&self.properties)
    }

    /// Renders a pushdown statement as PostgreSQL text.
    pub fn compile(
        &self,
        node: &SqlNode,
        context: &SqlGenerationContext,
    ) -> Result<String, PgvsError> {
        PostgresSqlGenerator::new(self, context).generate(node)
    }

    pub fn read_metadata(&self, tables: &[RemoteTable]) -> Result<MetadataSnapshot, PgvsError> {
        PostgresMetadataReader::new(self.case_folding, self.table_filter, &self.type_mapper)
            .read(tables)
    }
}

fn validate_properties(properties: &AdapterProperties) -> Result<(), ConfigError> {
    let supported = PostgresDialect::supported_properties();
    if let Some(unknown) = properties.keys().find(|key| !supported.contains(key)) {
        return Err(ConfigError::UnsupportedProperty {
            property: unknown.to_string(),
            dialect: PostgresDialect::NAME,
            supported,
        });
    }

    if properties.connection_name().is_none() {
        return Err(ConfigError::MissingRequiredProperty {
            property: CONNECTION_NAME_PROPERTY,
        });
    }

    if let Some(dialect) = properties.get(SQL_DIALECT_PROPERTY) {
        if !dialect.eq_ignore_ascii_case(PostgresDialect::NAME) {
            return Err(ConfigError::UnsupportedDialect {
                dialect: dialect.to_string(),
                supported: &[PostgresDialect::NAME],
            });
        }
    }

    CaseFolding::from_properties(properties)?;

    if let Some(level) = properties.get(LOG_LEVEL_PROPERTY) {
        if telemetry::level_directive(level).is_none() {
            return Err(ConfigError::InvalidLogLevel {
                property: LOG_LEVEL_PROPERTY,
                value: level.to_string(),
                allowed: LOG_LEVELS,
            });
        }
    }

    if let Some(unknown) = properties
        .ignored_errors()
        .into_iter()
        .find(|entry| !IGNORABLE_ERRORS.contains(&entry.as_str()))
    {
        return Err(ConfigError::UnknownIgnoredError {
            property: IGNORE_ERRORS_PROPERTY,
            value: unknown,
            allowed: IGNORABLE_ERRORS,
        });
    }

    Ok(())
}

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn quote_identifier(&self, identifier: &str) -> Ident {
        self.case_folding.quote(identifier)
    }

    /// Escape-string syntax, so backslashes are doubled as well as quotes.
    fn string_literal(&self, value: Option<&str>) -> SqlExpr {
        match value {
            Some(value) => verbatim(format!(
                "E'{}'",
                value.replace('\\', "\\\\").replace('\'', "''")
            )),
            None => SqlExpr::value(Value::Null),
        }
    }

    fn omit_parentheses(&self, function: ScalarFunction) -> bool {
        matches!(
            function,
            ScalarFunction::CurrentDate
                | ScalarFunction::CurrentTimestamp
                | ScalarFunction::Localtimestamp
        )
    }

    fn function_mapper(&self) -> Option<&FunctionMapper> {
        Some(&self.function_mapper)
    }

    fn requires_catalog_qualified_table_names(&self, _context: &SqlGenerationContext) -> bool {
        false
    }

    fn requires_schema_qualified_table_names(&self, _context: &SqlGenerationContext) -> bool {
        true
    }

    fn default_null_sorting(&self) -> NullSorting {
        NullSorting::High
    }

    fn regexp_like(&self, expression: SqlExpr, pattern: SqlExpr) -> SqlExpr {
        SqlExpr::BinaryOp {
            left: Box::new(expression),
            op: BinaryOperator::PGRegexMatch,
            right: Box::new(pattern),
        }
    }
}
