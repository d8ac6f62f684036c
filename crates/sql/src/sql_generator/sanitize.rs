use sqlparser::ast::{Expr as SqlExpr, Ident};

/// Double-quoted identifier with embedded quotes doubled.
///
/// The value is stored pre-doubled, which `Ident`'s display writes back unchanged.
pub fn quoted_ident(name: &str) -> Ident {
    Ident::with_quote('"', name.replace('"', "\"\""))
}

/// Emits already rendered SQL text unchanged.
///
/// Reserved for fragments the AST cannot express, such as `E'...'` literals.
pub fn verbatim(sql: impl Into<String>) -> SqlExpr {
    SqlExpr::Identifier(Ident::new(sql))
}
