//! Format detection and parsing for configuration documents.

use camino::Utf8Path;
use serde_json::Value;

use crate::{EnvLayersResult, FileResultExt};

use super::value::from_toml;

/// Structured-data formats a document can be read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigFormat {
    /// YAML 1.2, parsed with strict boolean semantics.
    Yaml,
    /// JSON.
    Json,
    /// TOML. Datetimes are kept as their RFC 3339 text.
    Toml,
}

impl ConfigFormat {
    /// Choose a format from the extension of `path`, ignoring case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use camino::Utf8Path;
    /// use env_layers::ConfigFormat;
    ///
    /// assert_eq!(ConfigFormat::from_path(Utf8Path::new("base.YML")), Some(ConfigFormat::Yaml));
    /// assert_eq!(ConfigFormat::from_path(Utf8Path::new("notes.txt")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let ext = path.extension()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse `data` read from `path` into a JSON value.
    ///
    /// Input that is empty or only whitespace parses to `null` in every
    /// format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvLayersError::File`] naming `path` when the contents
    /// are malformed or the format's feature is disabled.
    pub fn parse(self, path: &Utf8Path, data: &str) -> EnvLayersResult<Value> {
        if data.trim().is_empty() {
            return Ok(Value::Null);
        }
        match self {
            Self::Yaml => parse_yaml(path, data),
            Self::Json => serde_json::from_str(data).with_file(path),
            Self::Toml => toml::from_str::<toml::Table>(data)
                .with_file(path)
                .map(|table| from_toml(toml::Value::Table(table))),
        }
    }
}

/// Whether `path` has an extension [`ConfigFormat::from_path`] recognises.
#[must_use]
pub fn has_supported_extension(path: &Utf8Path) -> bool {
    ConfigFormat::from_path(path).is_some()
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Utf8Path, data: &str) -> EnvLayersResult<Value> {
    use serde_saphyr::Options;

    use super::value::ParsedValue;

    serde_saphyr::from_str_with_options::<ParsedValue>(
        data,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map(|parsed| parsed.0)
    .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string()))
    .with_file(path)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Utf8Path, _data: &str) -> EnvLayersResult<Value> {
    Err(std::io::Error::other(
        "yaml feature disabled: enable the 'yaml' feature to support this file format",
    ))
    .with_file(path)
}
