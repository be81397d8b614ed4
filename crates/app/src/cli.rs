//! Command line interface of the `server` binary

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Record Shop album catalogue HTTP service
#[derive(Debug, Parser)]
#[command(name = "server", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the env-style configuration file (DB_* and PORT keys)
    #[arg(long, env = "ENV_PATH")]
    pub env_path: PathBuf,

    /// Log output format
    #[arg(long, value_enum, env = "LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Formatter used by the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human readable
    Pretty,
    /// One JSON object per event
    Json,
}
