//! FunctionMapper Unit Tests
//!
//! Registry behaviour independent of any dialect.

use pgvs_sql::ast::ScalarFunction;
use pgvs_sql::dialects::function_mapper::{argument, build_func};
use pgvs_sql::dialects::FunctionMapper;
use sqlparser::ast::{Expr as SqlExpr, Ident};

fn args(values: &[&str]) -> Vec<SqlExpr> {
    values
        .iter()
        .map(|v| SqlExpr::Identifier(Ident::new(*v)))
        .collect()
}

fn rendered(expr: Option<SqlExpr>) -> Option<String> {
    expr.map(|e| e.to_string())
}

#[test]
fn rename_creates_function_call() {
    let mapper = FunctionMapper::new().rename(ScalarFunction::Substr, "SUBSTRING");
    let result = mapper
        .translate(ScalarFunction::Substr, &args(&["a", "b"]))
        .unwrap();
    assert_eq!(rendered(result).as_deref(), Some("SUBSTRING(a, b)"));
}

#[test]
fn unknown_function_returns_none() {
    let mapper = FunctionMapper::new();
    assert_eq!(mapper.translate(ScalarFunction::Upper, &args(&["x"])).unwrap(), None);
    assert!(!mapper.has_rule(ScalarFunction::Upper));
}

#[test]
fn transform_can_reorder_args() {
    let mapper = FunctionMapper::new().transform(ScalarFunction::Locate, |args| {
        let needle = argument(ScalarFunction::Locate, args, 0, 2)?;
        let haystack = argument(ScalarFunction::Locate, args, 1, 2)?;
        Ok(build_func("STRPOS", vec![haystack.clone(), needle.clone()]))
    });
    let result = mapper
        .translate(ScalarFunction::Locate, &args(&["'x'", "s"]))
        .unwrap();
    assert_eq!(rendered(result).as_deref(), Some("STRPOS(s, 'x')"));
    assert!(mapper
        .translate(ScalarFunction::Locate, &args(&["'x'"]))
        .is_err());
}

#[test]
fn later_rules_replace_earlier_ones() {
    let mapper = FunctionMapper::new()
        .rename(ScalarFunction::Rand, "RANDOM")
        .rename(ScalarFunction::Rand, "RAND_DOUBLE");
    assert_eq!(mapper.alias_of(ScalarFunction::Rand), Some("RAND_DOUBLE"));
}

#[test]
fn mapper_is_cheap_to_share() {
    let mapper = pgvs_sql::dialects::postgres::postgres_function_mapper();
    let cloned = mapper.clone();
    let input = args(&["\"c\"", "3"]);
    assert_eq!(
        mapper.translate(ScalarFunction::AddMonths, &input).unwrap(),
        cloned.translate(ScalarFunction::AddMonths, &input).unwrap()
    );
}
