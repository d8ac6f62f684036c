//! Remote dialects.
//!
//! Each dialect bundles its identifier policy, capability set, type mapping and
//! SQL generator. [`FunctionMapper`] is shared so dialects only declare rules.

pub mod error;
pub mod function_mapper;
pub mod postgres;

pub use error::ConfigError;
pub use function_mapper::{FunctionMapper, Translation};
pub use postgres::PostgresDialect;
