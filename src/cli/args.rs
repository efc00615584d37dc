//! CLI argument definitions using clap
//!
//! Commands:
//! - album-api serve
//! - album-api ping
//!
//! Backend settings come from `MONGO_*` environment variables, not flags.

use clap::{Parser, Subcommand};

use crate::observability::LogFormat;

/// album-api - album catalog HTTP service
#[derive(Parser, Debug)]
#[command(name = "album-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Connect to the backend, then serve the HTTP API on 127.0.0.1:8080
    Serve,

    /// Connect to the backend, verify it, print the result and exit
    Ping,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
