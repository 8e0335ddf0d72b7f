//! Primary error enum for the collaborators around the merge pipeline.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors surfaced by file resolution, settings loading, and export.
///
/// The merge pipeline itself never fails; every variant here originates at
/// one of its boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvLayersError {
    /// Reading or parsing a configuration document failed.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O or parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The file extension does not map to a supported document format.
    #[error("Unsupported configuration format for '{path}'")]
    UnsupportedFormat {
        /// Path whose extension was not recognised.
        path: Utf8PathBuf,
    },

    /// A document's top-level value is not a mapping.
    #[error("Expected a mapping at the top level of {origin}, found {found}")]
    InvalidDocument {
        /// Where the document came from (a path or a sequence position).
        origin: String,
        /// Kind of value found instead of a mapping.
        found: &'static str,
    },

    /// Writing a variable to an export sink failed.
    #[error("Failed to export '{key}': {source}")]
    Export {
        /// Environment key being written.
        key: String,
        /// Underlying sink error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A required environment variable is unset or empty.
    #[error("Environment variable '{name}' is not set")]
    MissingVariable {
        /// Name of the missing variable.
        name: &'static str,
    },

    /// Layered settings could not be extracted.
    #[error("Failed to load settings: {0}")]
    Settings(#[from] Box<FigmentError>),

    /// Multiple errors occurred in a single run.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
