//! PostgreSQL pushdown dialect for a federated query adapter.
//!
//! This crate translates pushdown trees produced by the federation engine into
//! PostgreSQL text and describes the remote side to the engine:
//! - **Metadata**: remote column types mapped onto the canonical type system,
//!   table and column names folded under the configured identifier policy.
//! - **Capabilities**: what PostgreSQL can evaluate, so the engine only pushes
//!   down what the generator can render.
//! - **SQL generation**: a dialect-neutral generator (`sql_generator`) wrapped by
//!   the PostgreSQL one (`dialects::postgres`).
mod macros;

pub mod ast;
pub mod capabilities;
pub mod dialects;
pub mod metadata;
pub mod sql_generator;

pub use capabilities::Capabilities;
pub use dialects::PostgresDialect;
pub use sql_generator::{SqlGenerationContext, SqlGenerator};
