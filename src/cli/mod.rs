//! Command-line interface for Greenroom.

mod commands;

use clap::{Parser, Subcommand};

/// Greenroom - talk show episode and guest tracker
#[derive(Parser)]
#[command(name = "greenroom")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// List all episodes
    #[command(alias = "ls")]
    Episodes,

    /// List all guests
    Guests,

    /// Add a guest
    #[command(alias = "add")]
    AddGuest {
        /// Guest name
        #[arg(required = true)]
        name: Vec<String>,
        /// What the guest does for a living
        #[arg(long)]
        occupation: Option<String>,
    },
}

pub use commands::*;
