use crate::ast::{SqlNode, SqlSelectList};
use crate::sql_generator::error::SqlGenError;
use sqlparser::ast::{Expr as SqlExpr, SelectItem};

/// Recursion target while building a statement.
///
/// The generic generator builds children through this trait, so a dialect
/// generator wrapping it sees every nested node and can override any of them.
pub trait SqlNodeVisitor {
    /// Builds an expression node. Clause nodes are rejected.
    fn visit(&self, node: &SqlNode) -> Result<SqlExpr, SqlGenError>;

    /// `from_clause` is the enclosing statement's FROM node, when there is one.
    fn visit_select_list(
        &self,
        select_list: &SqlSelectList,
        from_clause: Option<&SqlNode>,
    ) -> Result<Vec<SelectItem>, SqlGenError>;

    /// Builds an expression that sits directly in a select list.
    fn visit_projection(&self, expression: &SqlNode) -> Result<SelectItem, SqlGenError> {
        Ok(SelectItem::UnnamedExpr(self.visit(expression)?))
    }
}
