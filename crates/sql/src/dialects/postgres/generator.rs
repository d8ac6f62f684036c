//! PostgreSQL SQL generation.
//!
//! [`PostgresSqlGenerator`] wraps the generic [`SqlGenerator`] and overrides
//! only the nodes PostgreSQL needs differently. Scalar function rewrites live in
//! [`postgres_function_mapper`], which the generic generator consults first.

use crate::ast::{
    ScalarFunction, SqlColumn, SqlFunctionAggregateGroupConcat, SqlNode, SqlSelectList, SqlTable,
};
use crate::dialects::function_mapper::{argument, FunctionMapper};
use crate::dialects::postgres::PostgresDialect;
use crate::metadata::ColumnMetadata;
use crate::sql_generator::context::SqlGenerationContext;
use crate::sql_generator::error::SqlGenError;
use crate::sql_generator::sanitize::verbatim;
use crate::sql_generator::translator::{expr, function, select, SqlGenerator};
use crate::sql_generator::visitor::SqlNodeVisitor;
use pgvs_error::PgvsError;
use sqlparser::ast::{
    BinaryOperator, CastKind, DataType, DateTimeField, Expr as SqlExpr, ExtractSyntax, Function,
    FunctionArg, FunctionArgExpr, FunctionArgOperator, FunctionArgumentList, FunctionArguments,
    Ident, ObjectName, SelectItem, Value,
};

/// Remote types that arrive as text only after an explicit cast to VARCHAR.
pub const TYPE_NAMES_CAST_TO_VARCHAR: &[&str] = &[
    "varbit", "point", "line", "lseg", "box", "path", "polygon", "circle", "cidr", "citext",
    "inet", "macaddr", "interval", "json", "jsonb", "uuid", "tsquery", "tsvector", "xml",
];

/// Serial pseudo types, matched by prefix, and the integer type they are read as.
pub const SERIAL_TYPE_CASTS: &[(&str, &str)] = &[
    ("smallserial", "SMALLINT"),
    ("serial", "INTEGER"),
    ("bigserial", "BIGINT"),
];

/// Remote types replaced by a placeholder text column.
pub const TYPE_NAMES_NOT_SUPPORTED: &[&str] = &["bytea"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectionCast {
    None,
    Varchar,
    Integer(&'static str),
    /// Carries the remote type name shown in the placeholder.
    NotSupported(&'static str),
}

impl ProjectionCast {
    fn for_type_name(type_name: &str) -> Self {
        let type_name = type_name.to_ascii_lowercase();
        if let Some(name) = TYPE_NAMES_NOT_SUPPORTED
            .iter()
            .find(|name| **name == type_name)
        {
            return ProjectionCast::NotSupported(*name);
        }
        if TYPE_NAMES_CAST_TO_VARCHAR.contains(&type_name.as_str()) {
            return ProjectionCast::Varchar;
        }
        SERIAL_TYPE_CASTS
            .iter()
            .find(|(prefix, _)| type_name.starts_with(prefix))
            .map_or(ProjectionCast::None, |(_, target)| {
                ProjectionCast::Integer(target)
            })
    }

    fn apply(self, column: SqlExpr) -> SelectItem {
        match self {
            ProjectionCast::None => SelectItem::UnnamedExpr(column),
            ProjectionCast::Varchar => SelectItem::UnnamedExpr(varchar(column)),
            ProjectionCast::Integer(target) => {
                SelectItem::UnnamedExpr(function::cast_to(column, target))
            }
            ProjectionCast::NotSupported(type_name) => SelectItem::ExprWithAlias {
                expr: varchar(SqlExpr::value(Value::SingleQuotedString(format!(
                    "{} NOT SUPPORTED",
                    type_name
                )))),
                alias: Ident::new("not_supported"),
            },
        }
    }
}

fn varchar(expr: SqlExpr) -> SqlExpr {
    SqlExpr::Cast {
        kind: CastKind::Cast,
        expr: Box::new(expr),
        data_type: DataType::Varchar(None),
        format: None,
    }
}

/// `date + make_interval(unit => amount)`
fn add_interval(
    function: ScalarFunction,
    unit: &'static str,
) -> impl Fn(&[SqlExpr]) -> Result<SqlExpr, SqlGenError> {
    move |args| {
        let date = argument(function, args, 0, 2)?;
        let amount = argument(function, args, 1, 2)?;
        let interval = SqlExpr::Function(Function {
            name: ObjectName::from(vec![Ident::new("make_interval")]),
            uses_odbc_syntax: false,
            parameters: FunctionArguments::None,
            args: FunctionArguments::List(FunctionArgumentList {
                duplicate_treatment: None,
                args: vec![FunctionArg::Named {
                    name: Ident::new(unit),
                    arg: FunctionArgExpr::Expr(amount.clone()),
                    operator: FunctionArgOperator::RightArrow,
                }],
                clauses: vec![],
            }),
            filter: None,
            null_treatment: None,
            over: None,
            within_group: vec![],
        });
        Ok(SqlExpr::BinaryOp {
            left: Box::new(date.clone()),
            op: BinaryOperator::Plus,
            right: Box::new(interval),
        })
    }
}

/// `DATE_PART('UNIT',value)`, written without a space after the comma.
fn date_part(function: ScalarFunction) -> impl Fn(&[SqlExpr]) -> Result<SqlExpr, SqlGenError> {
    move |args| {
        let value = argument(function, args, 0, 1)?;
        Ok(verbatim(format!("DATE_PART('{}',{})", function.name(), value)))
    }
}

/// Scalar function renames and rewrites for PostgreSQL.
pub fn postgres_function_mapper() -> FunctionMapper {
    FunctionMapper::new()
        .rename(ScalarFunction::Substr, "SUBSTRING")
        .rename(ScalarFunction::HashMd5, "MD5")
        .rename(ScalarFunction::Rand, "RANDOM")
        .transform(ScalarFunction::AddDays, add_interval(ScalarFunction::AddDays, "days"))
        .transform(ScalarFunction::AddHours, add_interval(ScalarFunction::AddHours, "hours"))
        .transform(ScalarFunction::AddMinutes, add_interval(ScalarFunction::AddMinutes, "mins"))
        .transform(ScalarFunction::AddSeconds, add_interval(ScalarFunction::AddSeconds, "secs"))
        .transform(ScalarFunction::AddWeeks, add_interval(ScalarFunction::AddWeeks, "weeks"))
        .transform(ScalarFunction::AddMonths, add_interval(ScalarFunction::AddMonths, "months"))
        .transform(ScalarFunction::AddYears, add_interval(ScalarFunction::AddYears, "years"))
        .transform(ScalarFunction::Second, date_part(ScalarFunction::Second))
        .transform(ScalarFunction::Minute, date_part(ScalarFunction::Minute))
        .transform(ScalarFunction::Day, date_part(ScalarFunction::Day))
        .transform(ScalarFunction::Week, date_part(ScalarFunction::Week))
        .transform(ScalarFunction::Month, date_part(ScalarFunction::Month))
        .transform(ScalarFunction::Year, date_part(ScalarFunction::Year))
        .transform(ScalarFunction::PosixTime, |args| {
            let value = argument(ScalarFunction::PosixTime, args, 0, 1)?;
            Ok(SqlExpr::Extract {
                field: DateTimeField::Epoch,
                syntax: ExtractSyntax::From,
                expr: Box::new(value.clone()),
            })
        })
}

pub struct PostgresSqlGenerator<'a> {
    base: SqlGenerator<'a>,
}

impl<'a> PostgresSqlGenerator<'a> {
    pub fn new(dialect: &'a PostgresDialect, context: &'a SqlGenerationContext) -> Self {
        Self {
            base: SqlGenerator::new(dialect, context),
        }
    }

    pub fn generate(&self, node: &SqlNode) -> Result<String, PgvsError> {
        self.base.generate_with(self, node)
    }

    fn projected_column(&self, column: &SqlColumn) -> Result<SelectItem, SqlGenError> {
        let cast = ProjectionCast::for_type_name(&remote_type_name(&column.metadata)?);
        Ok(cast.apply(expr::column(&self.base, column)))
    }

    /// Expands `*` into explicit columns when any of them needs a cast, otherwise keeps `*`.
    fn wildcard(&self, from_clause: Option<&SqlNode>) -> Result<Vec<SelectItem>, SqlGenError> {
        let Some(from_clause) = from_clause else {
            return Ok(vec![select::wildcard()]);
        };

        let mut tables = Vec::new();
        collect_tables(from_clause, &mut tables);
        if !requires_cast(&tables)? {
            return Ok(vec![select::wildcard()]);
        }

        tracing::trace!(
            target: "sql_generator",
            tables = tables.len(),
            "Expanding wildcard to cast remote types"
        );
        let qualify = matches!(from_clause, SqlNode::Join(_));
        wildcard_columns(&tables, qualify)
            .iter()
            .map(|column| self.projected_column(column))
            .collect()
    }

    /// Ordering inside the aggregate is accepted but not rendered.
    fn group_concat(&self, call: &SqlFunctionAggregateGroupConcat) -> Result<SqlExpr, SqlGenError> {
        // TODO: render call.order_by inside STRING_AGG once ordered aggregation is declared.
        if call.order_by.is_some() {
            tracing::debug!(target: "sql_generator", "Dropping ORDER BY inside GROUP_CONCAT");
        }
        let separator = match &call.separator {
            Some(separator) => self.base.dialect.string_literal(Some(separator)),
            None => SqlExpr::value(Value::SingleQuotedString(",".to_string())),
        };
        Ok(function::aggregate_call(
            "STRING_AGG",
            call.distinct,
            vec![self.visit(&call.argument)?, separator],
            vec![],
        ))
    }
}

/// Columns of every table in FROM order, numbered by their position in the expansion.
fn wildcard_columns(tables: &[&SqlTable], qualify: bool) -> Vec<SqlColumn> {
    tables
        .iter()
        .flat_map(|table| table.metadata.columns.iter().map(move |column| (*table, column)))
        .enumerate()
        .map(|(id, (table, column))| {
            let column = SqlColumn::new(id as u32, column.clone());
            if qualify {
                column.with_table_alias(table.qualifier())
            } else {
                column
            }
        })
        .collect()
}

/// Stops at the first column that needs a cast or whose type cannot be read.
fn requires_cast(tables: &[&SqlTable]) -> Result<bool, SqlGenError> {
    tables
        .iter()
        .flat_map(|table| &table.metadata.columns)
        .map(|column| {
            remote_type_name(column)
                .map(|type_name| ProjectionCast::for_type_name(&type_name) != ProjectionCast::None)
        })
        .find(|needs_cast| !matches!(needs_cast, Ok(false)))
        .unwrap_or(Ok(false))
}

fn remote_type_name(column: &ColumnMetadata) -> Result<String, SqlGenError> {
    column
        .remote_type()
        .map(|notes| notes.type_name)
        .map_err(|e| SqlGenError::ColumnTypeUnresolved {
            column: column.name.clone(),
            reason: e.to_string(),
        })
}

fn collect_tables<'n>(node: &'n SqlNode, tables: &mut Vec<&'n SqlTable>) {
    match node {
        SqlNode::Table(table) => tables.push(table),
        SqlNode::Join(join) => {
            collect_tables(&join.left, tables);
            collect_tables(&join.right, tables);
        }
        _ => {}
    }
}

impl SqlNodeVisitor for PostgresSqlGenerator<'_> {
    fn visit(&self, node: &SqlNode) -> Result<SqlExpr, SqlGenError> {
        match node {
            SqlNode::FunctionAggregateGroupConcat(call) => self.group_concat(call),
            _ => self.base.build(node, self),
        }
    }

    fn visit_select_list(
        &self,
        select_list: &SqlSelectList,
        from_clause: Option<&SqlNode>,
    ) -> Result<Vec<SelectItem>, SqlGenError> {
        match select_list {
            SqlSelectList::AnyValue => Ok(vec![SelectItem::UnnamedExpr(expr::number("1"))]),
            SqlSelectList::Wildcard => self.wildcard(from_clause),
            SqlSelectList::Expressions(_) => self.base.build_select_list(select_list, self),
        }
    }

    fn visit_projection(&self, expression: &SqlNode) -> Result<SelectItem, SqlGenError> {
        match expression {
            SqlNode::Column(column) => self.projected_column(column),
            _ => Ok(SelectItem::UnnamedExpr(self.visit(expression)?)),
        }
    }
}
