//! CLI command implementations
//!
//! Each command loads the config, reads one request from stdin and
//! writes one response to stdout. Request failures become error
//! responses; config failures and failed writes abort the process.
//! Log lines go to stderr so stdout holds only the response.

use std::path::Path;

use serde_json::{json, Value};

use crate::config::CompilerConfig;
use crate::index::{create_index, order_document, MemoryCatalog};
use crate::observability::{Event, LogTarget, Logger};
use crate::predicate::{PredicateDocument, RangeCompiler};
use crate::scan::FindSemantic;

use super::args::{Cli, Command, DEFAULT_CONFIG_PATH};
use super::errors::CliResult;
use super::io::{read_request, write_error, write_response};
use super::request::{IndexSpec, ScanRequest};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a specific command
pub fn run_command(cmd: Command) -> CliResult<()> {
    Logger::set_target(LogTarget::Stderr);
    match cmd {
        Command::Compile { config } => compile(config.as_deref()),
        Command::IndexDef { config } => index_def(config.as_deref()),
    }
}

/// Loads the explicit config, or the default file when present.
///
/// Applies the configured log level before anything is logged.
pub fn load_config(path: Option<&Path>) -> CliResult<CompilerConfig> {
    let path = match path {
        Some(path) => Some(path),
        None => Some(Path::new(DEFAULT_CONFIG_PATH)).filter(|default| default.exists()),
    };
    let config = match path {
        Some(path) => CompilerConfig::load(path)?,
        None => CompilerConfig::default(),
    };
    Logger::set_min_severity(config.severity()?);

    if let Some(path) = path {
        let path_str = path.display().to_string();
        Logger::info(Event::ConfigLoaded, &[("path", path_str.as_str())]);
    }
    Ok(config)
}

/// Compile one scan request from stdin
pub fn compile(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    match read_request().and_then(|request| compile_value(&config, request)) {
        Ok(document) => write_response(document.to_json()),
        Err(e) => write_error(e.code_str(), e.message()),
    }
}

/// Print the definition of one index description from stdin
pub fn index_def(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    match read_request().and_then(|request| index_def_value(&config, request)) {
        Ok(data) => write_response(data),
        Err(e) => write_error(e.code_str(), e.message()),
    }
}

/// Decodes and compiles a scan request
pub fn compile_value(config: &CompilerConfig, request: Value) -> CliResult<PredicateDocument> {
    let request: ScanRequest = serde_json::from_value(request)?;
    compile_request(config, &request)
}

pub fn compile_request(config: &CompilerConfig, request: &ScanRequest) -> CliResult<PredicateDocument> {
    let index = request.index.to_descriptor(config.max_key_parts)?;

    let start_key = request.start.decode_key()?;
    let end_key = request.end.as_ref().map(|end| end.decode_key()).transpose()?;

    let start = request.start.to_bound(&start_key, FindSemantic::for_start);
    let end = request
        .end
        .as_ref()
        .zip(end_key.as_deref())
        .map(|(spec, key)| spec.to_bound(key, FindSemantic::for_end));

    let compiler = RangeCompiler::new(config.limits());
    Ok(compiler.compile(Some(&index), &start, end.as_ref())?)
}

/// Builds `{"definition": ..., "order": ...}` for an index description
pub fn index_def_value(config: &CompilerConfig, request: Value) -> CliResult<Value> {
    let spec: IndexSpec = serde_json::from_value(request)?;
    let index = spec.to_descriptor(config.max_key_parts)?;

    let mut catalog = MemoryCatalog::new();
    let definition = create_index(&mut catalog, &index)?;

    Ok(json!({
        "definition": serde_json::to_value(&definition)?,
        "order": order_document(&index).to_json(),
    }))
}
