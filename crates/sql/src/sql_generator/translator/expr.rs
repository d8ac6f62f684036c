use crate::ast::{SqlColumn, SqlLiteral, SqlNode, SqlPredicate};
use crate::sql_generator::error::SqlGenError;
use crate::sql_generator::translator::{build_each, SqlGenerator};
use crate::sql_generator::visitor::SqlNodeVisitor;
use sqlparser::ast::{
    BinaryOperator, CastKind, DataType, Expr as SqlExpr, TimezoneInfo, UnaryOperator, Value,
};

pub(crate) fn column(generator: &SqlGenerator<'_>, column: &SqlColumn) -> SqlExpr {
    let dialect = generator.dialect;
    match column.qualifier() {
        Some(qualifier) => SqlExpr::CompoundIdentifier(vec![
            dialect.quote_identifier(qualifier),
            dialect.quote_identifier(column.name()),
        ]),
        None => SqlExpr::Identifier(dialect.quote_identifier(column.name())),
    }
}

pub(crate) fn literal(generator: &SqlGenerator<'_>, literal: &SqlLiteral) -> SqlExpr {
    match literal {
        SqlLiteral::Null => SqlExpr::value(Value::Null),
        SqlLiteral::Bool(value) => SqlExpr::value(Value::Boolean(*value)),
        SqlLiteral::Date(value) => SqlExpr::TypedString {
            data_type: DataType::Date,
            value: Value::SingleQuotedString(value.clone()),
        },
        SqlLiteral::Timestamp(value) | SqlLiteral::TimestampUtc(value) => SqlExpr::TypedString {
            data_type: DataType::Timestamp(None, TimezoneInfo::None),
            value: Value::SingleQuotedString(value.clone()),
        },
        SqlLiteral::Double(value) => double(*value),
        SqlLiteral::ExactNumeric(value) => number(value.clone()),
        SqlLiteral::String(value) => generator.dialect.string_literal(Some(value)),
    }
}

pub(crate) fn number(text: impl Into<String>) -> SqlExpr {
    SqlExpr::value(Value::Number(text.into(), false))
}

fn double(value: f64) -> SqlExpr {
    if !value.is_finite() {
        return SqlExpr::Cast {
            kind: CastKind::Cast,
            expr: Box::new(SqlExpr::value(Value::SingleQuotedString(
                non_finite_name(value).to_string(),
            ))),
            data_type: DataType::DoublePrecision,
            format: None,
        };
    }
    number(format_double(value))
}

/// Doubles always carry a fractional part or an exponent so the remote side keeps them inexact.
fn format_double(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-6) {
        format!("{:e}", value)
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn non_finite_name(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn binary(
    left: &SqlNode,
    op: BinaryOperator,
    right: &SqlNode,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    Ok(SqlExpr::BinaryOp {
        left: Box::new(outer.visit(left)?),
        op,
        right: Box::new(outer.visit(right)?),
    })
}

/// `(a AND b AND c)`, parenthesized as a whole.
fn connective(
    operands: &[SqlNode],
    op: BinaryOperator,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    let mut operands = build_each(operands, outer)?.into_iter();
    let Some(first) = operands.next() else {
        return Err(SqlGenError::UnsupportedNode {
            message: format!("{} without operands", op),
            node_type: "Predicate",
        });
    };
    let chain = operands.fold(first, |left, right| SqlExpr::BinaryOp {
        left: Box::new(left),
        op: op.clone(),
        right: Box::new(right),
    });
    Ok(SqlExpr::Nested(Box::new(chain)))
}

/// The ESCAPE clause only carries a character, so the escape must be a string literal.
fn escape_char(escape: &SqlNode) -> Result<String, SqlGenError> {
    match escape {
        SqlNode::Literal(SqlLiteral::String(value)) => Ok(value.replace('\'', "''")),
        other => Err(SqlGenError::UnsupportedNode {
            message: format!("LIKE escape must be a string literal, got {}", other.kind()),
            node_type: "Predicate",
        }),
    }
}

pub(crate) fn predicate(
    generator: &SqlGenerator<'_>,
    predicate: &SqlPredicate,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    match predicate {
        SqlPredicate::And(operands) => connective(operands, BinaryOperator::And, outer),
        SqlPredicate::Or(operands) => connective(operands, BinaryOperator::Or, outer),
        SqlPredicate::Not(operand) => Ok(SqlExpr::UnaryOp {
            op: UnaryOperator::Not,
            expr: Box::new(SqlExpr::Nested(Box::new(outer.visit(operand)?))),
        }),
        SqlPredicate::Equal(left, right) => binary(left, BinaryOperator::Eq, right, outer),
        SqlPredicate::NotEqual(left, right) => binary(left, BinaryOperator::NotEq, right, outer),
        SqlPredicate::Less(left, right) => binary(left, BinaryOperator::Lt, right, outer),
        SqlPredicate::LessEqual(left, right) => binary(left, BinaryOperator::LtEq, right, outer),
        SqlPredicate::Like {
            expression,
            pattern,
            escape,
        } => Ok(SqlExpr::Like {
            negated: false,
            any: false,
            expr: Box::new(outer.visit(expression)?),
            pattern: Box::new(outer.visit(pattern)?),
            escape_char: escape.as_ref().map(escape_char).transpose()?,
        }),
        SqlPredicate::LikeRegexp {
            expression,
            pattern,
        } => Ok(generator
            .dialect
            .regexp_like(outer.visit(expression)?, outer.visit(pattern)?)),
        SqlPredicate::Between {
            expression,
            low,
            high,
        } => Ok(SqlExpr::Between {
            expr: Box::new(outer.visit(expression)?),
            negated: false,
            low: Box::new(outer.visit(low)?),
            high: Box::new(outer.visit(high)?),
        }),
        SqlPredicate::InConstList { expression, values } => {
            if values.is_empty() {
                return Err(SqlGenError::UnsupportedNode {
                    message: "IN list without values".to_string(),
                    node_type: "Predicate",
                });
            }
            Ok(SqlExpr::InList {
                expr: Box::new(outer.visit(expression)?),
                list: build_each(values, outer)?,
                negated: false,
            })
        }
        SqlPredicate::IsNull(operand) => Ok(SqlExpr::IsNull(Box::new(outer.visit(operand)?))),
        SqlPredicate::IsNotNull(operand) => {
            Ok(SqlExpr::IsNotNull(Box::new(outer.visit(operand)?)))
        }
    }
}
