//! CLI argument definitions using clap
//!
//! Commands:
//! - bookmarkd init [--config <path>]
//! - bookmarkd serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookmarkd - HTTP service for storing and serving bookmarks
#[derive(Parser, Debug)]
#[command(name = "bookmarkd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and apply migrations
    Init {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Apply migrations and start the HTTP server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
