//! CLI module for keyrange
//!
//! Provides command-line interface for:
//! - compile: One-shot scan request compilation
//! - index-def: Index definition and order document

mod args;
mod commands;
mod errors;
mod io;
mod request;

pub use args::{Cli, Command, DEFAULT_CONFIG_PATH};
pub use commands::{
    compile, compile_request, compile_value, index_def, index_def_value, load_config, run,
    run_command,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, parse_request, read_request, write_error, write_response};
pub use request::{BoundSpec, IndexSpec, KeyPartSpec, ScanRequest};
