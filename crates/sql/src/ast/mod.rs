//! Logical query tree handed over by the federation engine.
//!
//! The tree is a closed set of node kinds; generators match on it exhaustively
//! and only ever borrow it.

pub mod functions;

pub use functions::{AggregateFunction, ScalarFunction};

use crate::metadata::{CanonicalType, ColumnMetadata, TableMetadata};

#[derive(Debug, Clone, PartialEq)]
pub enum SqlNode {
    StatementSelect(Box<SqlStatementSelect>),
    SelectList(SqlSelectList),
    Table(SqlTable),
    Join(Box<SqlJoin>),
    Column(SqlColumn),
    Literal(SqlLiteral),
    Predicate(Box<SqlPredicate>),
    FunctionScalar(SqlFunctionScalar),
    FunctionScalarExtract(Box<SqlFunctionScalarExtract>),
    FunctionScalarCase(Box<SqlFunctionScalarCase>),
    FunctionScalarCast(Box<SqlFunctionScalarCast>),
    FunctionAggregate(SqlFunctionAggregate),
    FunctionAggregateGroupConcat(Box<SqlFunctionAggregateGroupConcat>),
    OrderBy(SqlOrderBy),
    GroupBy(SqlGroupBy),
    Limit(SqlLimit),
}

impl SqlNode {
    /// Short node kind name used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlNode::StatementSelect(_) => "StatementSelect",
            SqlNode::SelectList(_) => "SelectList",
            SqlNode::Table(_) => "Table",
            SqlNode::Join(_) => "Join",
            SqlNode::Column(_) => "Column",
            SqlNode::Literal(_) => "Literal",
            SqlNode::Predicate(_) => "Predicate",
            SqlNode::FunctionScalar(_) => "FunctionScalar",
            SqlNode::FunctionScalarExtract(_) => "FunctionScalarExtract",
            SqlNode::FunctionScalarCase(_) => "FunctionScalarCase",
            SqlNode::FunctionScalarCast(_) => "FunctionScalarCast",
            SqlNode::FunctionAggregate(_) => "FunctionAggregate",
            SqlNode::FunctionAggregateGroupConcat(_) => "FunctionAggregateGroupConcat",
            SqlNode::OrderBy(_) => "OrderBy",
            SqlNode::GroupBy(_) => "GroupBy",
            SqlNode::Limit(_) => "Limit",
        }
    }

    pub fn scalar(function: ScalarFunction, arguments: Vec<SqlNode>) -> Self {
        SqlNode::FunctionScalar(SqlFunctionScalar {
            function,
            arguments,
        })
    }

    pub fn aggregate(function: AggregateFunction, arguments: Vec<SqlNode>, distinct: bool) -> Self {
        SqlNode::FunctionAggregate(SqlFunctionAggregate {
            function,
            arguments,
            distinct,
        })
    }

    pub fn count_star() -> Self {
        Self::aggregate(AggregateFunction::Count, Vec::new(), false)
    }

    pub fn string(value: impl Into<String>) -> Self {
        SqlNode::Literal(SqlLiteral::String(value.into()))
    }

    pub fn exact_numeric(value: impl ToString) -> Self {
        SqlNode::Literal(SqlLiteral::ExactNumeric(value.to_string()))
    }
}

macro_rules! impl_into_node {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for SqlNode {
                fn from(value: $ty) -> Self {
                    SqlNode::$variant(value.into())
                }
            }
        )*
    };
}

impl_into_node! {
    SqlStatementSelect => StatementSelect,
    SqlSelectList => SelectList,
    SqlTable => Table,
    SqlJoin => Join,
    SqlColumn => Column,
    SqlLiteral => Literal,
    SqlPredicate => Predicate,
    SqlFunctionScalar => FunctionScalar,
    SqlFunctionScalarExtract => FunctionScalarExtract,
    SqlFunctionScalarCase => FunctionScalarCase,
    SqlFunctionScalarCast => FunctionScalarCast,
    SqlFunctionAggregate => FunctionAggregate,
    SqlFunctionAggregateGroupConcat => FunctionAggregateGroupConcat,
    SqlOrderBy => OrderBy,
    SqlGroupBy => GroupBy,
    SqlLimit => Limit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatementSelect {
    pub select_list: SqlSelectList,
    /// A [`SqlNode::Table`] or [`SqlNode::Join`].
    pub from_clause: SqlNode,
    pub where_clause: Option<SqlNode>,
    pub group_by: Option<SqlGroupBy>,
    pub having: Option<SqlNode>,
    pub order_by: Option<SqlOrderBy>,
    pub limit: Option<SqlLimit>,
}

impl SqlStatementSelect {
    pub fn new(select_list: SqlSelectList, from_clause: impl Into<SqlNode>) -> Self {
        Self {
            select_list,
            from_clause: from_clause.into(),
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
        }
    }

    pub fn with_where(mut self, predicate: impl Into<SqlNode>) -> Self {
        self.where_clause = Some(predicate.into());
        self
    }

    pub fn with_group_by(mut self, group_by: SqlGroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    pub fn with_having(mut self, predicate: impl Into<SqlNode>) -> Self {
        self.having = Some(predicate.into());
        self
    }

    pub fn with_order_by(mut self, order_by: SqlOrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn with_limit(mut self, limit: SqlLimit) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlSelectList {
    /// The engine only needs one row per match, the projected value is irrelevant.
    AnyValue,
    Wildcard,
    Expressions(Vec<SqlNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlTable {
    pub name: String,
    pub alias: Option<String>,
    pub metadata: TableMetadata,
}

impl SqlTable {
    pub fn new(metadata: TableMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            alias: None,
            metadata,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Name columns of this table are qualified with.
    pub fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlJoin {
    pub join_type: JoinType,
    pub left: SqlNode,
    pub right: SqlNode,
    pub condition: SqlNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlColumn {
    pub id: u32,
    pub metadata: ColumnMetadata,
    pub table_name: Option<String>,
    pub table_alias: Option<String>,
}

impl SqlColumn {
    pub fn new(id: u32, metadata: ColumnMetadata) -> Self {
        Self {
            id,
            metadata,
            table_name: None,
            table_alias: None,
        }
    }

    pub fn with_table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn with_table_alias(mut self, alias: impl Into<String>) -> Self {
        self.table_alias = Some(alias.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.table_alias
            .as_deref()
            .or(self.table_name.as_deref())
            .filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlLiteral {
    Null,
    Bool(bool),
    /// `YYYY-MM-DD`
    Date(String),
    Timestamp(String),
    TimestampUtc(String),
    Double(f64),
    /// Decimal text as sent by the engine, e.g. `12.50`.
    ExactNumeric(String),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlPredicate {
    And(Vec<SqlNode>),
    Or(Vec<SqlNode>),
    Not(SqlNode),
    Equal(SqlNode, SqlNode),
    NotEqual(SqlNode, SqlNode),
    Less(SqlNode, SqlNode),
    LessEqual(SqlNode, SqlNode),
    Like {
        expression: SqlNode,
        pattern: SqlNode,
        escape: Option<SqlNode>,
    },
    LikeRegexp {
        expression: SqlNode,
        pattern: SqlNode,
    },
    Between {
        expression: SqlNode,
        low: SqlNode,
        high: SqlNode,
    },
    InConstList {
        expression: SqlNode,
        values: Vec<SqlNode>,
    },
    IsNull(SqlNode),
    IsNotNull(SqlNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunctionScalar {
    pub function: ScalarFunction,
    pub arguments: Vec<SqlNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunctionScalarExtract {
    /// Date part keyword, e.g. `YEAR`.
    pub unit: String,
    pub argument: SqlNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlCaseBranch {
    pub when: SqlNode,
    pub then: SqlNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunctionScalarCase {
    /// Simple-case operand; `None` for a searched case.
    pub basis: Option<SqlNode>,
    pub branches: Vec<SqlCaseBranch>,
    pub else_result: Option<SqlNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunctionScalarCast {
    pub argument: SqlNode,
    pub data_type: CanonicalType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunctionAggregate {
    pub function: AggregateFunction,
    /// Empty for `COUNT(*)`.
    pub arguments: Vec<SqlNode>,
    pub distinct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunctionAggregateGroupConcat {
    pub argument: SqlNode,
    pub distinct: bool,
    pub order_by: Option<SqlOrderBy>,
    pub separator: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlOrderByItem {
    pub expression: SqlNode,
    pub ascending: bool,
    pub nulls_last: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlOrderBy {
    pub items: Vec<SqlOrderByItem>,
}

impl SqlOrderBy {
    /// Ascending order with nulls last for every expression.
    pub fn ascending(expressions: Vec<SqlNode>) -> Self {
        Self {
            items: expressions
                .into_iter()
                .map(|expression| SqlOrderByItem {
                    expression,
                    ascending: true,
                    nulls_last: true,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlGroupBy {
    pub expressions: Vec<SqlNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlLimit {
    pub limit: u64,
    pub offset: Option<u64>,
}

impl SqlLimit {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            offset: None,
        }
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}
