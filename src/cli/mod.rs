//! CLI module for bookmarkd
//!
//! Provides command-line interface for:
//! - init: Create the database and apply migrations
//! - serve: Start the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
