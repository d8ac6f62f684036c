//! Common building blocks shared across the pgvs crates.
//!
//! - **Properties**: the flat, string-keyed adapter option map (`properties`).
//! - **Telemetry**: `tracing` subscriber setup driven by the adapter log level (`telemetry`).
pub mod properties;
pub mod telemetry;

pub use properties::AdapterProperties;
