//! Constructors and aggregation helpers for `EnvLayersError`.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;
use serde_json::Value;

use super::{AggregatedErrors, EnvLayersError};

impl EnvLayersError {
    /// Tries to build an [`EnvLayersError`] from an iterator of errors.
    ///
    /// Returns `None` when no errors are supplied, the inner error when a
    /// single uniquely owned error is supplied, and [`Self::Aggregate`]
    /// otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.is_empty() {
            return None;
        }
        Some(if arcs.len() == 1 {
            let last = arcs.pop()?;
            match Arc::try_unwrap(last) {
                Ok(err) => err,
                Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
            }
        } else {
            Self::Aggregate(Box::new(AggregatedErrors::new(arcs)))
        })
    }

    /// Build an [`EnvLayersError`] from at least one error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`EnvLayersError::try_aggregate`] when
    /// the list may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        Self::try_aggregate(errors).map_or_else(
            || panic!("aggregate requires at least one error"),
            |err| err,
        )
    }

    /// Construct a [`EnvLayersError::File`] for `path`.
    #[must_use]
    pub fn file(path: &Utf8Path, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Construct a [`EnvLayersError::File`] reporting that `path` does not exist.
    #[must_use]
    pub fn not_found(path: &Utf8Path) -> Self {
        Self::file(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
        )
    }

    /// Construct a [`EnvLayersError::InvalidDocument`] describing `value`.
    #[must_use]
    pub fn invalid_document(origin: impl Into<String>, value: &Value) -> Self {
        Self::InvalidDocument {
            origin: origin.into(),
            found: value_kind(value),
        }
    }

    /// Construct a [`EnvLayersError::Export`] for `key`.
    #[must_use]
    pub fn export(key: &str, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Export {
            key: key.to_owned(),
            source: source.into(),
        }
    }

    /// Construct a settings error from a [`figment::Error`].
    #[must_use]
    pub fn settings(source: figment::Error) -> Self {
        Self::Settings(Box::new(source))
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
