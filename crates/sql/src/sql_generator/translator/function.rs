use crate::ast::{
    SqlFunctionAggregate, SqlFunctionAggregateGroupConcat, SqlFunctionScalar,
    SqlFunctionScalarCase, SqlFunctionScalarCast, SqlFunctionScalarExtract, ScalarFunction,
};
use crate::dialects::function_mapper::build_func;
use crate::sql_generator::error::SqlGenError;
use crate::sql_generator::translator::{build_each, select, SqlGenerator};
use crate::sql_generator::visitor::SqlNodeVisitor;
use sqlparser::ast::{
    BinaryOperator, CaseWhen, CastKind, DataType, DateTimeField, DuplicateTreatment,
    Expr as SqlExpr, ExtractSyntax, Function, FunctionArg, FunctionArgExpr,
    FunctionArgumentClause, FunctionArgumentList, FunctionArguments, Ident, ObjectName,
    ObjectNamePart, UnaryOperator, Value,
};

fn infix_operator(function: ScalarFunction) -> Option<BinaryOperator> {
    match function {
        ScalarFunction::Add => Some(BinaryOperator::Plus),
        ScalarFunction::Sub => Some(BinaryOperator::Minus),
        ScalarFunction::Mult => Some(BinaryOperator::Multiply),
        ScalarFunction::FloatDiv => Some(BinaryOperator::Divide),
        _ => None,
    }
}

pub(crate) fn scalar(
    generator: &SqlGenerator<'_>,
    call: &SqlFunctionScalar,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    let args = build_each(&call.arguments, outer)?;

    if let Some(mapper) = generator.dialect.function_mapper() {
        if let Some(expr) = mapper.translate(call.function, &args)? {
            tracing::trace!(
                target: "sql_generator",
                function = call.function.name(),
                "Applied dialect function rule"
            );
            return Ok(expr);
        }
    }

    if args.is_empty() && generator.dialect.omit_parentheses(call.function) {
        return Ok(function_call(call.function.name(), FunctionArguments::None));
    }

    if let Some(op) = infix_operator(call.function) {
        let actual = args.len();
        let [left, right]: [SqlExpr; 2] = args
            .try_into()
            .map_err(|_| arity_error(call.function, 2, actual))?;
        return Ok(SqlExpr::Nested(Box::new(SqlExpr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })));
    }

    if call.function == ScalarFunction::Neg {
        let actual = args.len();
        let [operand]: [SqlExpr; 1] = args
            .try_into()
            .map_err(|_| arity_error(call.function, 1, actual))?;
        // a negative operand must not merge with the sign into a line comment
        return Ok(SqlExpr::UnaryOp {
            op: UnaryOperator::Minus,
            expr: Box::new(SqlExpr::Nested(Box::new(operand))),
        });
    }

    Ok(build_func(call.function.name(), args))
}

fn arity_error(function: ScalarFunction, expected: usize, actual: usize) -> SqlGenError {
    SqlGenError::MalformedFunctionCall {
        function: function.name(),
        expected,
        actual,
    }
}

fn function_call(name: &str, args: FunctionArguments) -> SqlExpr {
    SqlExpr::Function(Function {
        name: ObjectName(vec![ObjectNamePart::Identifier(Ident::new(name))]),
        uses_odbc_syntax: false,
        parameters: FunctionArguments::None,
        args,
        filter: None,
        null_treatment: None,
        over: None,
        within_group: vec![],
    })
}

fn argument_list(
    distinct: bool,
    args: Vec<FunctionArg>,
    clauses: Vec<FunctionArgumentClause>,
) -> FunctionArguments {
    FunctionArguments::List(FunctionArgumentList {
        duplicate_treatment: distinct.then_some(DuplicateTreatment::Distinct),
        args,
        clauses,
    })
}

/// Aggregate call with optional `DISTINCT` and trailing clauses.
pub(crate) fn aggregate_call(
    name: &str,
    distinct: bool,
    args: Vec<SqlExpr>,
    clauses: Vec<FunctionArgumentClause>,
) -> SqlExpr {
    let args = args
        .into_iter()
        .map(|arg| FunctionArg::Unnamed(FunctionArgExpr::Expr(arg)))
        .collect();
    function_call(name, argument_list(distinct, args, clauses))
}

pub(crate) fn extract(
    extract: &SqlFunctionScalarExtract,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    Ok(SqlExpr::Extract {
        field: DateTimeField::Custom(Ident::new(extract.unit.to_ascii_uppercase())),
        syntax: ExtractSyntax::From,
        expr: Box::new(outer.visit(&extract.argument)?),
    })
}

pub(crate) fn case(
    case: &SqlFunctionScalarCase,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    if case.branches.is_empty() {
        return Err(SqlGenError::UnsupportedNode {
            message: "CASE without WHEN branches".to_string(),
            node_type: "FunctionScalarCase",
        });
    }

    let conditions = case
        .branches
        .iter()
        .map(|branch| {
            Ok(CaseWhen {
                condition: outer.visit(&branch.when)?,
                result: outer.visit(&branch.then)?,
            })
        })
        .collect::<Result<Vec<_>, SqlGenError>>()?;

    Ok(SqlExpr::Case {
        operand: case
            .basis
            .as_ref()
            .map(|basis| outer.visit(basis).map(Box::new))
            .transpose()?,
        conditions,
        else_result: case
            .else_result
            .as_ref()
            .map(|else_result| outer.visit(else_result).map(Box::new))
            .transpose()?,
    })
}

/// Cast target named by its canonical SQL type name.
pub(crate) fn cast_to(expr: SqlExpr, type_name: &str) -> SqlExpr {
    SqlExpr::Cast {
        kind: CastKind::Cast,
        expr: Box::new(expr),
        data_type: DataType::Custom(
            ObjectName(vec![ObjectNamePart::Identifier(Ident::new(type_name))]),
            vec![],
        ),
        format: None,
    }
}

pub(crate) fn cast(
    cast: &SqlFunctionScalarCast,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    Ok(cast_to(
        outer.visit(&cast.argument)?,
        &cast.data_type.sql_name(),
    ))
}

pub(crate) fn aggregate(
    call: &SqlFunctionAggregate,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    if call.arguments.is_empty() {
        return Ok(function_call(
            call.function.name(),
            argument_list(
                false,
                vec![FunctionArg::Unnamed(FunctionArgExpr::Wildcard)],
                vec![],
            ),
        ));
    }
    let mut args = build_each(&call.arguments, outer)?;
    // COUNT(DISTINCT a, b) is only valid as a row tuple
    if call.distinct && args.len() > 1 {
        args = vec![SqlExpr::Tuple(args)];
    }
    Ok(aggregate_call(call.function.name(), call.distinct, args, vec![]))
}

pub(crate) fn group_concat(
    generator: &SqlGenerator<'_>,
    call: &SqlFunctionAggregateGroupConcat,
    outer: &dyn SqlNodeVisitor,
) -> Result<SqlExpr, SqlGenError> {
    let mut clauses = Vec::new();
    if let Some(order_by) = &call.order_by {
        clauses.push(FunctionArgumentClause::OrderBy(select::order_by_exprs(
            generator, order_by, outer,
        )?));
    }
    if let Some(separator) = &call.separator {
        clauses.push(FunctionArgumentClause::Separator(
            Value::SingleQuotedString(separator.replace('\'', "''")),
        ));
    }
    Ok(aggregate_call(
        "GROUP_CONCAT",
        call.distinct,
        vec![outer.visit(&call.argument)?],
        clauses,
    ))
}
