use crate::ast::{
    JoinType, SqlGroupBy, SqlLimit, SqlNode, SqlOrderBy, SqlSelectList, SqlStatementSelect,
    SqlTable,
};
use crate::sql_generator::error::SqlGenError;
use crate::sql_generator::translator::expr::number;
use crate::sql_generator::translator::{build_each, SqlGenerator};
use crate::sql_generator::visitor::SqlNodeVisitor;
use sqlparser::ast::helpers::attached_token::AttachedToken;
use sqlparser::ast::{
    Expr as SqlExpr, GroupByExpr, Join, JoinConstraint, JoinOperator, ObjectName, Offset,
    OffsetRows, OrderBy, OrderByExpr, OrderByKind, OrderByOptions, Query, Select, SelectFlavor,
    SelectItem, SetExpr, TableAlias, TableFactor, TableWithJoins, Value,
    WildcardAdditionalOptions,
};

pub(crate) fn statement(
    generator: &SqlGenerator<'_>,
    statement: &SqlStatementSelect,
    outer: &dyn SqlNodeVisitor,
) -> Result<Query, SqlGenError> {
    if !matches!(statement.from_clause, SqlNode::Table(_) | SqlNode::Join(_)) {
        return Err(SqlGenError::UnsupportedNode {
            message: format!(
                "FROM clause must be a table or a join, got {}",
                statement.from_clause.kind()
            ),
            node_type: "StatementSelect",
        });
    }

    let projection =
        outer.visit_select_list(&statement.select_list, Some(&statement.from_clause))?;
    let from = from_clause(generator, &statement.from_clause, outer)?;
    let selection = statement
        .where_clause
        .as_ref()
        .map(|predicate| outer.visit(predicate))
        .transpose()?;
    let group_by = match &statement.group_by {
        Some(group_by) => self::group_by(group_by, outer)?,
        None => GroupByExpr::Expressions(vec![], vec![]),
    };
    let having = statement
        .having
        .as_ref()
        .map(|predicate| outer.visit(predicate))
        .transpose()?;

    let select = Select {
        select_token: AttachedToken::empty(),
        distinct: None,
        top: None,
        top_before_distinct: false,
        projection,
        into: None,
        from: vec![from],
        lateral_views: vec![],
        prewhere: None,
        selection,
        group_by,
        cluster_by: vec![],
        distribute_by: vec![],
        sort_by: vec![],
        having,
        named_window: vec![],
        qualify: None,
        window_before_qualify: false,
        value_table_mode: None,
        connect_by: None,
        flavor: SelectFlavor::Standard,
    };

    let order_by = statement
        .order_by
        .as_ref()
        .map(|order_by| self::order_by(generator, order_by, outer))
        .transpose()?;
    let (limit, offset) = match &statement.limit {
        Some(limit) => {
            let (count, offset) = self::limit(limit);
            (Some(count), offset)
        }
        None => (None, None),
    };

    Ok(Query {
        with: None,
        body: Box::new(SetExpr::Select(Box::new(select))),
        order_by,
        limit,
        limit_by: vec![],
        offset,
        fetch: None,
        locks: vec![],
        for_clause: None,
        settings: None,
        format_clause: None,
    })
}

pub(crate) fn select_list(
    select_list: &SqlSelectList,
    outer: &dyn SqlNodeVisitor,
) -> Result<Vec<SelectItem>, SqlGenError> {
    match select_list {
        SqlSelectList::AnyValue => Ok(vec![SelectItem::UnnamedExpr(SqlExpr::value(
            Value::Boolean(true),
        ))]),
        SqlSelectList::Wildcard => Ok(vec![wildcard()]),
        SqlSelectList::Expressions(expressions) if expressions.is_empty() => {
            Err(SqlGenError::UnsupportedNode {
                message: "select list without expressions".to_string(),
                node_type: "SelectList",
            })
        }
        SqlSelectList::Expressions(expressions) => expressions
            .iter()
            .map(|expression| outer.visit_projection(expression))
            .collect(),
    }
}

pub(crate) fn wildcard() -> SelectItem {
    SelectItem::Wildcard(WildcardAdditionalOptions::default())
}

fn table_factor(generator: &SqlGenerator<'_>, table: &SqlTable) -> TableFactor {
    let dialect = generator.dialect;
    let context = generator.context;
    let mut parts = Vec::with_capacity(3);

    if dialect.requires_catalog_qualified_table_names(context) {
        if let Some(catalog) = context.catalog_name.as_deref().filter(|c| !c.is_empty()) {
            parts.push(dialect.quote_identifier(catalog));
        }
    }
    if dialect.requires_schema_qualified_table_names(context) {
        if let Some(schema) = context.schema_name.as_deref().filter(|s| !s.is_empty()) {
            parts.push(dialect.quote_identifier(schema));
        }
    }
    parts.push(dialect.quote_identifier(&table.name));

    TableFactor::Table {
        name: ObjectName::from(parts),
        alias: table
            .alias
            .as_deref()
            .filter(|alias| *alias != table.name)
            .map(|alias| TableAlias {
                name: dialect.quote_identifier(alias),
                columns: vec![],
            }),
        args: None,
        with_hints: vec![],
        version: None,
        with_ordinality: false,
        partitions: vec![],
        json_path: None,
        sample: None,
        index_hints: vec![],
    }
}

fn join_operator(join_type: JoinType, constraint: JoinConstraint) -> JoinOperator {
    match join_type {
        JoinType::Inner => JoinOperator::Inner(constraint),
        JoinType::LeftOuter => JoinOperator::LeftOuter(constraint),
        JoinType::RightOuter => JoinOperator::RightOuter(constraint),
        JoinType::FullOuter => JoinOperator::FullOuter(constraint),
    }
}

/// A table or a left-deep chain of joins. A join on the right side is nested in parentheses.
pub(crate) fn from_clause(
    generator: &SqlGenerator<'_>,
    node: &SqlNode,
    outer: &dyn SqlNodeVisitor,
) -> Result<TableWithJoins, SqlGenError> {
    match node {
        SqlNode::Table(table) => Ok(TableWithJoins {
            relation: table_factor(generator, table),
            joins: vec![],
        }),
        SqlNode::Join(join) => {
            let mut left = from_clause(generator, &join.left, outer)?;
            let relation = match &join.right {
                SqlNode::Table(table) => table_factor(generator, table),
                right => TableFactor::NestedJoin {
                    table_with_joins: Box::new(from_clause(generator, right, outer)?),
                    alias: None,
                },
            };
            let constraint = JoinConstraint::On(outer.visit(&join.condition)?);
            left.joins.push(Join {
                relation,
                global: false,
                join_operator: join_operator(join.join_type, constraint),
            });
            Ok(left)
        }
        other => Err(SqlGenError::UnsupportedNode {
            message: "expected a table or a join".to_string(),
            node_type: other.kind(),
        }),
    }
}

pub(crate) fn group_by(
    group_by: &SqlGroupBy,
    outer: &dyn SqlNodeVisitor,
) -> Result<GroupByExpr, SqlGenError> {
    if group_by.expressions.is_empty() {
        return Err(SqlGenError::UnsupportedNode {
            message: "GROUP BY without expressions".to_string(),
            node_type: "GroupBy",
        });
    }
    Ok(GroupByExpr::Expressions(
        build_each(&group_by.expressions, outer)?,
        vec![],
    ))
}

/// NULLS FIRST/LAST is only written when it differs from the remote default.
pub(crate) fn order_by_exprs(
    generator: &SqlGenerator<'_>,
    order_by: &SqlOrderBy,
    outer: &dyn SqlNodeVisitor,
) -> Result<Vec<OrderByExpr>, SqlGenError> {
    if order_by.items.is_empty() {
        return Err(SqlGenError::UnsupportedNode {
            message: "ORDER BY without expressions".to_string(),
            node_type: "OrderBy",
        });
    }

    let null_sorting = generator.dialect.default_null_sorting();
    order_by
        .items
        .iter()
        .map(|item| {
            let explicit_nulls =
                item.nulls_last != null_sorting.nulls_last_by_default(item.ascending);
            Ok(OrderByExpr {
                expr: outer.visit(&item.expression)?,
                options: OrderByOptions {
                    asc: (!item.ascending).then_some(false),
                    nulls_first: explicit_nulls.then_some(!item.nulls_last),
                },
                with_fill: None,
            })
        })
        .collect()
}

pub(crate) fn order_by(
    generator: &SqlGenerator<'_>,
    order_by: &SqlOrderBy,
    outer: &dyn SqlNodeVisitor,
) -> Result<OrderBy, SqlGenError> {
    Ok(OrderBy {
        kind: OrderByKind::Expressions(order_by_exprs(generator, order_by, outer)?),
        interpolate: None,
    })
}

pub(crate) fn limit(limit: &SqlLimit) -> (SqlExpr, Option<Offset>) {
    let offset = limit.offset.map(|offset| Offset {
        value: number(offset.to_string()),
        rows: OffsetRows::None,
    });
    (number(limit.limit.to_string()), offset)
}

/// `LIMIT n [OFFSET m]` on its own.
pub(crate) fn limit_clause(limit: &SqlLimit) -> String {
    match self::limit(limit) {
        (count, Some(offset)) => format!("LIMIT {} {}", count, offset),
        (count, None) => format!("LIMIT {}", count),
    }
}
