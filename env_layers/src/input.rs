//! Configuration input: which files to merge and how to export the result.
//!
//! Settings are layered with Figment, lowest precedence first:
//!
//! 1. built-in defaults;
//! 2. a TOML settings file (`--config`, or `env-layers.toml` in the working
//!    directory when present);
//! 3. `INPUT_FILES`, the variable GitHub Actions sets for a `files` input;
//! 4. `ENV_LAYERS_*` environment variables;
//! 5. values given explicitly on the command line.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use uncased::Uncased;

use crate::{EnvLayersError, EnvLayersResult, ExportFormat};

/// Settings file picked up from the working directory when `--config` is not
/// given.
pub const SETTINGS_FILE_NAME: &str = "env-layers.toml";

/// Prefix for environment variables that override settings.
pub const ENV_PREFIX: &str = "ENV_LAYERS_";

/// Variable GitHub Actions uses to pass the `files` input.
pub const FILES_INPUT_VAR: &str = "INPUT_FILES";

/// Split a whitespace-separated list of file names.
///
/// `None`, an empty string, and whitespace-only input all yield an empty list.
/// Runs of spaces, tabs, or newlines separate entries, so no entry is ever
/// empty.
///
/// # Examples
///
/// ```rust
/// use env_layers::split_file_list;
///
/// assert_eq!(split_file_list(Some("file1.yml file2.yml")).len(), 2);
/// assert!(split_file_list(Some("")).is_empty());
/// assert!(split_file_list(None).is_empty());
/// ```
#[must_use]
pub fn split_file_list(raw: Option<&str>) -> Vec<Utf8PathBuf> {
    raw.map(|list| list.split_whitespace().map(Utf8PathBuf::from).collect())
        .unwrap_or_default()
}

/// Fully layered settings for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Whitespace-separated files to merge, lowest precedence first.
    pub files: Option<String>,
    /// Export format.
    pub format: ExportFormat,
    /// Output path; standard output or `GITHUB_ENV` when absent.
    pub output: Option<Utf8PathBuf>,
    /// Whether exported values are logged alongside their keys.
    pub log_values: bool,
}

/// Values supplied explicitly on the command line.
///
/// Fields left as `None` are not serialised, so they never mask values from
/// lower layers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InputOverrides {
    /// Whitespace-separated files to merge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// Export format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ExportFormat>,
    /// Output path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Utf8PathBuf>,
    /// Whether exported values are logged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_values: Option<bool>,
}

impl InputSettings {
    /// Load settings from every layer.
    ///
    /// # Errors
    ///
    /// Returns [`EnvLayersError::File`] when an explicit `settings_file` does
    /// not exist and [`EnvLayersError::Settings`] when a layer holds values of
    /// the wrong type.
    pub fn load(
        settings_file: Option<&Utf8Path>,
        overrides: &InputOverrides,
    ) -> EnvLayersResult<Self> {
        let settings: Self = Self::figment(settings_file, overrides)?
            .extract()
            .map_err(|err| Arc::new(EnvLayersError::settings(err)))?;
        tracing::debug!(?settings, "resolved input settings");
        Ok(settings)
    }

    /// Build the Figment used by [`InputSettings::load`].
    ///
    /// # Errors
    ///
    /// Returns [`EnvLayersError::File`] when an explicit `settings_file` does
    /// not exist.
    pub fn figment(
        settings_file: Option<&Utf8Path>,
        overrides: &InputOverrides,
    ) -> EnvLayersResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = resolve_settings_file(settings_file)? {
            tracing::debug!(path = %path, "reading settings file");
            figment = figment.merge(Toml::file(path));
        }
        Ok(figment
            .merge(
                Env::raw()
                    .only(&[FILES_INPUT_VAR])
                    .map(|_| Uncased::from("files")),
            )
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides)))
    }

    /// The configured files, split into paths.
    #[must_use]
    pub fn files(&self) -> Vec<Utf8PathBuf> {
        split_file_list(self.files.as_deref())
    }
}

fn resolve_settings_file(explicit: Option<&Utf8Path>) -> EnvLayersResult<Option<Utf8PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(Arc::new(EnvLayersError::not_found(path))),
        None => {
            let default = Utf8Path::new(SETTINGS_FILE_NAME);
            Ok(default.is_file().then(|| default.to_path_buf()))
        }
    }
}
