//! Logging initialisation.
//!
//! The adapter's `LOG_LEVEL` property uses the federation engine's level names
//! (`FINEST` .. `SEVERE`). They are translated into a `tracing` filter directive
//! unless `RUST_LOG` is set, which always wins.

use crate::properties::{AdapterProperties, LOG_LEVEL_PROPERTY};
use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Level names `LOG_LEVEL` accepts.
pub const LOG_LEVELS: &[&str] = &[
    "ALL", "FINEST", "FINER", "FINE", "CONFIG", "INFO", "WARNING", "SEVERE", "OFF",
];

/// Translates an engine log level into a `tracing` level directive.
pub fn level_directive(log_level: &str) -> Option<&'static str> {
    match log_level.trim().to_ascii_uppercase().as_str() {
        "ALL" | "FINEST" => Some("trace"),
        "FINER" | "FINE" => Some("debug"),
        "CONFIG" | "INFO" => Some("info"),
        "WARNING" => Some("warn"),
        "SEVERE" => Some("error"),
        "OFF" => Some("off"),
        _ => None,
    }
}

/// Installs a global fmt subscriber. Calling it again once a subscriber is set is a no-op.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .with_context(|| format!("Invalid log directive '{}'", default_directive))?,
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }

    Ok(())
}

pub fn init_logging_from_properties(properties: &AdapterProperties) -> Result<()> {
    let directive = match properties.get(LOG_LEVEL_PROPERTY) {
        Some(level) => level_directive(level).with_context(|| {
            format!(
                "Unknown {} '{}'. Pick one of: {}",
                LOG_LEVEL_PROPERTY,
                level,
                LOG_LEVELS.join(", ")
            )
        })?,
        None => DEFAULT_LOG_DIRECTIVE,
    };
    init_logging(directive)
}
