use crate::ast::ScalarFunction;
use crate::dialects::function_mapper::build_func;
use crate::dialects::FunctionMapper;
use crate::sql_generator::context::SqlGenerationContext;
use crate::sql_generator::sanitize::quoted_ident;
use sqlparser::ast::{Expr as SqlExpr, Ident, Value};

/// Where the remote engine places NULLs when no explicit NULLS clause is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullSorting {
    /// NULL compares greater than every value: last ascending, first descending.
    High,
    /// NULL compares smaller than every value: first ascending, last descending.
    Low,
    AtStart,
    AtEnd,
}

impl NullSorting {
    pub fn nulls_last_by_default(&self, ascending: bool) -> bool {
        match self {
            NullSorting::High => ascending,
            NullSorting::Low => !ascending,
            NullSorting::AtStart => false,
            NullSorting::AtEnd => true,
        }
    }
}

/// Remote-engine specifics the generic generator consults while rendering.
pub trait SqlDialect: Send + Sync {
    fn name(&self) -> &'static str;

    fn quote_identifier(&self, identifier: &str) -> Ident {
        quoted_ident(identifier)
    }

    /// `None` renders the NULL literal.
    fn string_literal(&self, value: Option<&str>) -> SqlExpr {
        match value {
            Some(value) => SqlExpr::value(Value::SingleQuotedString(value.replace('\'', "''"))),
            None => SqlExpr::value(Value::Null),
        }
    }

    /// Zero-argument functions written without parentheses, such as `CURRENT_DATE`.
    fn omit_parentheses(&self, _function: ScalarFunction) -> bool {
        false
    }

    fn function_mapper(&self) -> Option<&FunctionMapper> {
        None
    }

    fn requires_catalog_qualified_table_names(&self, _context: &SqlGenerationContext) -> bool {
        false
    }

    fn requires_schema_qualified_table_names(&self, _context: &SqlGenerationContext) -> bool {
        false
    }

    fn default_null_sorting(&self) -> NullSorting {
        NullSorting::High
    }

    fn regexp_like(&self, expression: SqlExpr, pattern: SqlExpr) -> SqlExpr {
        build_func("REGEXP_LIKE", vec![expression, pattern])
    }
}
