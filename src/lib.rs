//! otel-filter-translator library
//!
//! This crate translates the agent's user-authored monitoring configuration
//! into the filter processor configuration consumed by the metrics pipeline,
//! turning declared JMX measurements into strict include/exclude name lists.

pub mod cli;
pub mod conf;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod translator;
pub mod tree;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging subsystem
///
/// # Arguments
/// * `level` - Log level string (trace, debug, info, warn, error)
///
/// # Errors
/// Returns an error if the logging system fails to initialize
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
