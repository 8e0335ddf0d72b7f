//! The GitHub Actions environment file.
//!
//! Runners expose a file path in `GITHUB_ENV`; every variable appended to it
//! becomes visible to later steps of the job.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::{EnvLayersError, EnvLayersResult, FileResultExt};

use super::{EnvironmentSink, export_error};

/// Variable naming the GitHub Actions environment file.
pub const GITHUB_ENV_VAR: &str = "GITHUB_ENV";

const DELIMITER_BASE: &str = "ENV_LAYERS_EOF";

/// Appends variables to a GitHub Actions environment file using the
/// multi-line `KEY<<DELIMITER` form.
#[derive(Debug)]
pub struct GithubEnvFile {
    path: Utf8PathBuf,
    writer: BufWriter<File>,
}

impl GithubEnvFile {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`EnvLayersError::File`] when the file cannot be opened.
    pub fn open(path: &Utf8Path) -> EnvLayersResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Open the file named by `GITHUB_ENV`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvLayersError::MissingVariable`] when `GITHUB_ENV` is unset
    /// or empty, and [`EnvLayersError::File`] when the file cannot be opened.
    pub fn from_env() -> EnvLayersResult<Self> {
        let path = std::env::var(GITHUB_ENV_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                Arc::new(EnvLayersError::MissingVariable {
                    name: GITHUB_ENV_VAR,
                })
            })?;
        Self::open(Utf8Path::new(&path))
    }

    /// Path of the file being appended to.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl EnvironmentSink for GithubEnvFile {
    fn export(&mut self, key: &str, value: &str) -> EnvLayersResult<()> {
        if key.is_empty() || key.contains(['=', '\n', '\r']) {
            return Err(Arc::new(EnvLayersError::export(
                key,
                "variable names must be non-empty and contain no '=' or line breaks",
            )));
        }
        let delimiter = heredoc_delimiter(value);
        write!(self.writer, "{key}<<{delimiter}\n{value}\n{delimiter}\n")
            .map_err(|err| export_error(key, err))
    }

    fn finish(&mut self) -> EnvLayersResult<()> {
        self.writer
            .flush()
            .map_err(|err| export_error("<flush>", err))
    }
}

/// Pick a delimiter that does not occur in `value`.
pub(super) fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = DELIMITER_BASE.to_owned();
    let mut suffix: u32 = 0;
    while value.contains(&delimiter) {
        suffix += 1;
        delimiter = format!("{DELIMITER_BASE}_{suffix}");
    }
    delimiter
}
