use crate::ast::{SqlNode, SqlSelectList};
use crate::sql_generator::context::SqlGenerationContext;
use crate::sql_generator::dialect::SqlDialect;
use crate::sql_generator::error::SqlGenError;
use crate::sql_generator::visitor::SqlNodeVisitor;
use pgvs_error::PgvsError;
use sqlparser::ast::{display_comma_separated, Expr as SqlExpr, SelectItem};

pub(crate) mod expr;
pub(crate) mod function;
pub(crate) mod select;

/// Dialect-neutral builder for every node kind.
///
/// Children are built through an outer [`SqlNodeVisitor`], which is the
/// generator itself unless a dialect generator wraps it.
pub struct SqlGenerator<'a> {
    pub dialect: &'a dyn SqlDialect,
    pub context: &'a SqlGenerationContext,
}

impl<'a> SqlGenerator<'a> {
    pub fn new(dialect: &'a dyn SqlDialect, context: &'a SqlGenerationContext) -> Self {
        Self { dialect, context }
    }

    pub fn generate(&self, node: &SqlNode) -> Result<String, PgvsError> {
        self.generate_with(self, node)
    }

    /// Renders `node` through `outer`, logging the outcome and converting errors at the boundary.
    pub fn generate_with(
        &self,
        outer: &dyn SqlNodeVisitor,
        node: &SqlNode,
    ) -> Result<String, PgvsError> {
        let dialect_name = self.dialect.name();
        tracing::debug!(
            target: "sql_generator",
            dialect = dialect_name,
            node = node.kind(),
            "Generating SQL"
        );
        self.to_sql(node, outer)
            .map(|sql| {
                tracing::debug!(target: "sql_generator", sql = %sql, "Generated SQL");
                sql
            })
            .map_err(|e| {
                tracing::warn!(target: "sql_generator", error = %e, "SQL generation failed");
                e.to_pgvs_error(dialect_name)
            })
    }

    /// Any node kind as text. Clause nodes print the clause they stand for.
    pub fn to_sql(&self, node: &SqlNode, outer: &dyn SqlNodeVisitor) -> Result<String, SqlGenError> {
        match node {
            SqlNode::StatementSelect(statement) => {
                Ok(select::statement(self, statement, outer)?.to_string())
            }
            SqlNode::SelectList(list) => {
                let items = outer.visit_select_list(list, None)?;
                Ok(display_comma_separated(&items).to_string())
            }
            SqlNode::Table(_) | SqlNode::Join(_) => {
                Ok(select::from_clause(self, node, outer)?.to_string())
            }
            SqlNode::OrderBy(order_by) => Ok(select::order_by(self, order_by, outer)?.to_string()),
            SqlNode::GroupBy(group_by) => Ok(select::group_by(group_by, outer)?.to_string()),
            SqlNode::Limit(limit) => Ok(select::limit_clause(limit)),
            _ => Ok(outer.visit(node)?.to_string()),
        }
    }

    /// Builds an expression node. Clause nodes have no expression form.
    pub fn build(&self, node: &SqlNode, outer: &dyn SqlNodeVisitor) -> Result<SqlExpr, SqlGenError> {
        match node {
            SqlNode::Column(column) => Ok(expr::column(self, column)),
            SqlNode::Literal(literal) => Ok(expr::literal(self, literal)),
            SqlNode::Predicate(predicate) => expr::predicate(self, predicate, outer),
            SqlNode::FunctionScalar(call) => function::scalar(self, call, outer),
            SqlNode::FunctionScalarExtract(extract) => function::extract(extract, outer),
            SqlNode::FunctionScalarCase(case) => function::case(case, outer),
            SqlNode::FunctionScalarCast(cast) => function::cast(cast, outer),
            SqlNode::FunctionAggregate(call) => function::aggregate(call, outer),
            SqlNode::FunctionAggregateGroupConcat(call) => {
                function::group_concat(self, call, outer)
            }
            SqlNode::StatementSelect(_)
            | SqlNode::SelectList(_)
            | SqlNode::Table(_)
            | SqlNode::Join(_)
            | SqlNode::OrderBy(_)
            | SqlNode::GroupBy(_)
            | SqlNode::Limit(_) => Err(SqlGenError::UnsupportedNode {
                message: "clause used where an expression is expected".to_string(),
                node_type: node.kind(),
            }),
        }
    }

    pub fn build_select_list(
        &self,
        select_list: &SqlSelectList,
        outer: &dyn SqlNodeVisitor,
    ) -> Result<Vec<SelectItem>, SqlGenError> {
        select::select_list(select_list, outer)
    }
}

impl SqlNodeVisitor for SqlGenerator<'_> {
    fn visit(&self, node: &SqlNode) -> Result<SqlExpr, SqlGenError> {
        self.build(node, self)
    }

    fn visit_select_list(
        &self,
        select_list: &SqlSelectList,
        _from_clause: Option<&SqlNode>,
    ) -> Result<Vec<SelectItem>, SqlGenError> {
        self.build_select_list(select_list, self)
    }
}

pub(crate) fn build_each(
    nodes: &[SqlNode],
    outer: &dyn SqlNodeVisitor,
) -> Result<Vec<SqlExpr>, SqlGenError> {
    nodes.iter().map(|node| outer.visit(node)).collect()
}
