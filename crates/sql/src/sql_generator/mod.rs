pub mod context;
pub mod dialect;
pub mod error;
pub mod sanitize;
pub mod translator;
pub mod visitor;

pub use self::translator::SqlGenerator;
pub use context::SqlGenerationContext;
pub use dialect::{NullSorting, SqlDialect};
pub use error::SqlGenError;
pub use visitor::SqlNodeVisitor;
