//! CLI module for album-api
//!
//! Provides command-line interface for:
//! - serve: Verify the backend, then serve the HTTP API
//! - ping: Verify the backend and exit

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{boot, load_config, ping, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
