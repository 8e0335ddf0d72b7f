//! Library facade for the `env-layers` binary.
//!
//! Exposes the command-line surface and the run loop so integration tests can
//! drive them without spawning a process.

pub mod cli;
pub mod error;

use env_layers::export::open_sink;
use env_layers::{InputSettings, build_environment, export_environment, load_documents};

use crate::cli::CommandLine;
use crate::error::{CliError, Result};

/// Resolve settings, merge the configured files, and export the result.
///
/// Returns the number of variables exported.
///
/// # Errors
///
/// Returns [`CliError`] when settings cannot be resolved, any configured file
/// fails to load, or the export destination rejects a variable.
pub fn run(cli: &CommandLine) -> Result<usize> {
    let settings = InputSettings::load(cli.config_path.as_deref(), &cli.overrides())
        .map_err(CliError::Settings)?;
    let files = settings.files();
    if files.is_empty() {
        tracing::warn!("no input files configured");
    }
    let documents = load_documents(&files).map_err(CliError::Load)?;
    let environment = build_environment(documents);
    let mut sink =
        open_sink(settings.format, settings.output.as_deref()).map_err(CliError::Export)?;
    let exported = export_environment(&environment, sink.as_mut(), settings.log_values)
        .map_err(CliError::Export)?;
    tracing::info!(files = files.len(), exported, "environment exported");
    Ok(exported)
}
