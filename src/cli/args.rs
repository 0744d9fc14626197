//! CLI argument definitions using clap
//!
//! Commands:
//! - keyrange compile [--config <path>]
//! - keyrange index-def [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Config file read when `--config` is not given; optional
pub const DEFAULT_CONFIG_PATH: &str = "./keyrange.json";

/// keyrange - compile index key ranges into document predicates
#[derive(Parser, Debug)]
#[command(name = "keyrange")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile one scan request read from stdin
    Compile {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the index definition and order document for an index read from stdin
    IndexDef {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
