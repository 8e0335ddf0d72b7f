//! Error types for the `env-layers` binary.
//!
//! Each variant names the stage that failed so `main` can report it without
//! the caller having to inspect the library error.

use std::sync::Arc;

use env_layers::EnvLayersError;
use thiserror::Error;

/// Result alias for the binary.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures raised while running the binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings layers could not be read or held values of the wrong type.
    #[error("failed to resolve settings: {0}")]
    Settings(#[source] Arc<EnvLayersError>),
    /// One or more configuration files could not be loaded.
    #[error("failed to load configuration files: {0}")]
    Load(#[source] Arc<EnvLayersError>),
    /// The export destination could not be opened or written.
    #[error("failed to export environment: {0}")]
    Export(#[source] Arc<EnvLayersError>),
}
