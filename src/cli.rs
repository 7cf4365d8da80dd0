//! CLI argument parsing for otel-filter-translator
//!
//! This module provides the command-line interface using clap derive macros.
//!
//! # Options
//!
//! - `--config` / `-c`: Agent configuration file path (default: config.json, env: OFT_CONFIG)
//! - `--pipeline` / `-n`: Pipeline name to translate (default: jmx, env: OFT_PIPELINE)
//! - `--index` / `-i`: Pipeline instance index for array-declared configs (env: OFT_INDEX)
//! - `--validate`: Check translation without printing the configuration
//! - `--log-level` / `-l`: Log level (trace/debug/info/warn/error, env: OFT_LOG_LEVEL)
//! - `--output-format`: Output format for the translated configuration (yaml/json)
//!
//! CLI arguments take precedence over environment variables.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::pipeline::PIPELINE_JMX;

/// otel-filter-translator - Translates agent monitoring configuration into
/// an OpenTelemetry filter processor configuration
///
/// Reads the agent's JSON or YAML configuration file, resolves the JMX
/// metrics-collection section for the requested pipeline, and prints the
/// resulting filter stage configuration.
#[derive(Parser, Debug)]
#[command(name = "otel-filter-translator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the agent configuration file (JSON or YAML)
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config.json",
        env = "OFT_CONFIG"
    )]
    pub config: PathBuf,

    /// Pipeline name to translate the filter stage for
    #[arg(
        short = 'n',
        long,
        value_name = "NAME",
        default_value = PIPELINE_JMX,
        env = "OFT_PIPELINE"
    )]
    pub pipeline: String,

    /// Pipeline instance index, for configurations declaring an array of instances
    #[arg(short, long, value_name = "INDEX", env = "OFT_INDEX")]
    pub index: Option<usize>,

    /// Validate translation without printing the configuration
    #[arg(long)]
    pub validate: bool,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        env = "OFT_LOG_LEVEL"
    )]
    pub log_level: LogLevel,

    /// Output format for the translated configuration
    #[arg(long, value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level - default
    Info,
    /// Warn level
    Warn,
    /// Error level - least verbose
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Output format options for the translated configuration
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML output - default
    Yaml,
    /// JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
