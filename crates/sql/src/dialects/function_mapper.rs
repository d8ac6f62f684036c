//! Function Mapper
//!
//! Declarative registry of per-dialect scalar function rewrites. Arguments
//! arrive already built as SQL expressions, so every rule maps argument
//! expressions to a replacement expression keyed by function identity.

use crate::ast::ScalarFunction;
use crate::sql_generator::error::SqlGenError;
use sqlparser::ast::{
    Expr as SqlExpr, Function, FunctionArg, FunctionArgExpr, FunctionArgumentList,
    FunctionArguments, Ident, ObjectName, ObjectNamePart,
};
use std::collections::HashMap;
use std::sync::Arc;

pub type TransformFn = Arc<dyn Fn(&[SqlExpr]) -> Result<SqlExpr, SqlGenError> + Send + Sync>;

pub enum Translation {
    /// Simple rename: `SUBSTR` → `SUBSTRING`
    Rename(&'static str),
    /// Custom transform with access to arguments
    Transform(TransformFn),
}

impl Clone for Translation {
    fn clone(&self) -> Self {
        match self {
            Translation::Rename(s) => Translation::Rename(*s),
            Translation::Transform(f) => Translation::Transform(Arc::clone(f)),
        }
    }
}

#[derive(Clone, Default)]
pub struct FunctionMapper {
    rules: HashMap<ScalarFunction, Translation>,
}

impl std::fmt::Debug for FunctionMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionMapper")
            .field("rules_count", &self.rules.len())
            .finish()
    }
}

impl FunctionMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, from: ScalarFunction, to: &'static str) -> Self {
        self.rules.insert(from, Translation::Rename(to));
        self
    }

    pub fn transform<F>(mut self, from: ScalarFunction, f: F) -> Self
    where
        F: Fn(&[SqlExpr]) -> Result<SqlExpr, SqlGenError> + Send + Sync + 'static,
    {
        self.rules.insert(from, Translation::Transform(Arc::new(f)));
        self
    }

    /// Returns `Ok(None)` when no rule exists and default rendering applies.
    pub fn translate(
        &self,
        function: ScalarFunction,
        args: &[SqlExpr],
    ) -> Result<Option<SqlExpr>, SqlGenError> {
        match self.rules.get(&function) {
            Some(Translation::Rename(new_name)) => Ok(Some(build_func(new_name, args.to_vec()))),
            Some(Translation::Transform(f)) => f(args).map(Some),
            None => Ok(None),
        }
    }

    pub fn has_rule(&self, function: ScalarFunction) -> bool {
        self.rules.contains_key(&function)
    }

    /// Renamed target of `function`, if a rename rule exists.
    pub fn alias_of(&self, function: ScalarFunction) -> Option<&'static str> {
        match self.rules.get(&function) {
            Some(Translation::Rename(name)) => Some(*name),
            _ => None,
        }
    }
}

/// `name(args...)` with unnamed arguments.
pub fn build_func(name: &str, args: Vec<SqlExpr>) -> SqlExpr {
    let sql_args = args
        .into_iter()
        .map(|arg| FunctionArg::Unnamed(FunctionArgExpr::Expr(arg)))
        .collect();

    let func_args = FunctionArguments::List(FunctionArgumentList {
        duplicate_treatment: None,
        args: sql_args,
        clauses: vec![],
    });

    SqlExpr::Function(Function {
        name: ObjectName(vec![ObjectNamePart::Identifier(Ident::new(name))]),
        args: func_args,
        filter: None,
        null_treatment: None,
        over: None,
        within_group: vec![],
        parameters: FunctionArguments::None,
        uses_odbc_syntax: false,
    })
}

/// Fetches argument `index`, failing when the call carries other than `expected` arguments.
pub fn argument<'a>(
    function: ScalarFunction,
    args: &'a [SqlExpr],
    index: usize,
    expected: usize,
) -> Result<&'a SqlExpr, SqlGenError> {
    if args.len() != expected {
        return Err(SqlGenError::MalformedFunctionCall {
            function: function.name(),
            expected,
            actual: args.len(),
        });
    }
    Ok(&args[index])
}
