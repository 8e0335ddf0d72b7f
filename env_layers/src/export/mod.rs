//! Writing a [`FlatEnvironment`] to an external destination.
//!
//! Exporting is a single side-effecting step that runs once the whole
//! environment has been computed. Each [`EnvironmentSink`] receives every
//! variable as a rendered string, in order, followed by one call to
//! [`EnvironmentSink::finish`].

mod dotenv;
mod github;
mod json;

use std::fs::File;
use std::io::{self, BufWriter};
use std::sync::Arc;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{EnvLayersError, EnvLayersResult, FileResultExt, FlatEnvironment};

pub use dotenv::DotenvWriter;
pub use github::{GITHUB_ENV_VAR, GithubEnvFile};
pub use json::JsonWriter;

/// Destination for exported variables.
pub trait EnvironmentSink {
    /// Write one variable.
    ///
    /// # Errors
    ///
    /// Returns [`EnvLayersError::Export`] when the variable cannot be written.
    fn export(&mut self, key: &str, value: &str) -> EnvLayersResult<()>;

    /// Flush anything buffered once every variable has been written.
    ///
    /// # Errors
    ///
    /// Returns [`EnvLayersError::Export`] when flushing fails.
    fn finish(&mut self) -> EnvLayersResult<()> {
        Ok(())
    }
}

/// Output formats the command-line tool can export to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `KEY=value` lines.
    #[default]
    Dotenv,
    /// A single JSON object of string values.
    Json,
    /// The GitHub Actions environment file named by `GITHUB_ENV`.
    Github,
}

/// Render a leaf value as the string an environment variable holds.
///
/// Strings are used verbatim, `null` becomes the empty string, and every
/// other value (numbers, booleans, sequences) becomes its compact JSON text.
///
/// # Examples
///
/// ```rust
/// use env_layers::render_value;
/// use serde_json::json;
///
/// assert_eq!(render_value(&json!("d1")), "d1");
/// assert_eq!(render_value(&json!(null)), "");
/// assert_eq!(render_value(&json!([1, "a"])), r#"[1,"a"]"#);
/// ```
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Export every variable of `env` into `sink`, then finish the sink.
///
/// Each key is logged at `info` level; values are included only when
/// `log_values` is set. Returns the number of variables written.
///
/// # Errors
///
/// Stops at the first sink failure and returns it.
pub fn export_environment<S>(
    env: &FlatEnvironment,
    sink: &mut S,
    log_values: bool,
) -> EnvLayersResult<usize>
where
    S: EnvironmentSink + ?Sized,
{
    let pairs = env.to_string_pairs();
    for (key, value) in &pairs {
        if log_values {
            tracing::info!(key = %key, value = %value, "exporting variable");
        } else {
            tracing::info!(key = %key, "exporting variable");
        }
        sink.export(key, value)?;
    }
    sink.finish()?;
    Ok(pairs.len())
}

/// Open the sink for `format`.
///
/// `dotenv` and `json` write to `output` when given and to standard output
/// otherwise. `github` appends to `output` when given and to the file named
/// by `GITHUB_ENV` otherwise.
///
/// # Errors
///
/// Returns [`EnvLayersError::File`] when the output file cannot be opened and
/// [`EnvLayersError::MissingVariable`] when `github` is requested without an
/// output path or `GITHUB_ENV`.
pub fn open_sink(
    format: ExportFormat,
    output: Option<&Utf8Path>,
) -> EnvLayersResult<Box<dyn EnvironmentSink>> {
    Ok(match (format, output) {
        (ExportFormat::Dotenv, Some(path)) => Box::new(DotenvWriter::new(create_output(path)?)),
        (ExportFormat::Dotenv, None) => Box::new(DotenvWriter::new(io::stdout())),
        (ExportFormat::Json, Some(path)) => Box::new(JsonWriter::new(create_output(path)?)),
        (ExportFormat::Json, None) => Box::new(JsonWriter::new(io::stdout())),
        (ExportFormat::Github, Some(path)) => Box::new(GithubEnvFile::open(path)?),
        (ExportFormat::Github, None) => Box::new(GithubEnvFile::from_env()?),
    })
}

fn create_output(path: &Utf8Path) -> EnvLayersResult<BufWriter<File>> {
    File::create(path).map(BufWriter::new).with_file(path)
}

pub(crate) fn export_error(key: &str, err: io::Error) -> Arc<EnvLayersError> {
    Arc::new(EnvLayersError::export(key, err))
}
