//! CLI argument definitions using clap
//!
//! Commands:
//! - shelf serve
//! - shelf validate [FILE]
//! - shelf parse-id <VALUE>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelf - book API with request validation
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server until interrupted
    Serve,

    /// Validate a JSON book body the same way `POST /book/add` does
    Validate {
        /// File holding the JSON body; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Parse a path parameter the same way `GET /book/{id}` does
    ParseId {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}
