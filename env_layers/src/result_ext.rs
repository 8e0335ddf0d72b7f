//! Extensions for mapping errors to `EnvLayersResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(e.into()))`
//! patterns when converting external error types into the crate's
//! `EnvLayersResult<T>` alias (`Result<T, Arc<EnvLayersError>>`).
//!
//! # Examples
//!
//! ```
//! use env_layers::{EnvLayersResult, EnvLayersResultExt};
//! use figment::{Figment, providers::Serialized};
//!
//! fn settings() -> EnvLayersResult<u16> {
//!     Figment::new()
//!         .merge(Serialized::default("port", 8080))
//!         .extract_inner("port")
//!         .into_env_layers()
//! }
//! assert_eq!(settings().ok(), Some(8080));
//! ```

use std::sync::Arc;

use camino::Utf8Path;

use crate::{EnvLayersError, EnvLayersResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<EnvLayersError>` into an `EnvLayersResult<T>`.
pub trait EnvLayersResultExt<T, E> {
    /// Convert `Result<T, E>` into `EnvLayersResult<T>` using
    /// `Into<EnvLayersError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<EnvLayersError>`.
    fn into_env_layers(self) -> EnvLayersResult<T>;
}

impl<T, E> EnvLayersResultExt<T, E> for Result<T, E>
where
    E: Into<EnvLayersError>,
{
    fn into_env_layers(self) -> EnvLayersResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension attaching a file path to I/O and parser failures.
pub trait FileResultExt<T> {
    /// Convert the error into [`EnvLayersError::File`] for `path`.
    ///
    /// # Errors
    ///
    /// Returns an `EnvLayersError::File` wrapped in `Arc` when the input is
    /// `Err`.
    fn with_file(self, path: &Utf8Path) -> EnvLayersResult<T>;
}

impl<T, E> FileResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file(self, path: &Utf8Path) -> EnvLayersResult<T> {
        self.map_err(|e| Arc::new(EnvLayersError::file(path, e)))
    }
}

/// Extension converting `EnvLayersResult<T>` into `Result<T, figment::Error>`
/// so tests running inside `figment::Jail` can use `?`.
pub trait ResultIntoFigment<T> {
    /// Map the error into a `figment::Error` carrying its message.
    ///
    /// # Errors
    ///
    /// Returns a `figment::Error` containing the original message.
    fn to_figment(self) -> Result<T, figment::Error>;
}

impl<T> ResultIntoFigment<T> for EnvLayersResult<T> {
    fn to_figment(self) -> Result<T, figment::Error> {
        self.map_err(|err| figment::Error::from(err.to_string()))
    }
}
