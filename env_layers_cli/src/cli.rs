//! Command-line surface for `env-layers`.
//!
//! Flags only override settings explicitly given; anything left out falls
//! through to `ENV_LAYERS_*`, `INPUT_FILES`, and the settings file.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use env_layers::{ExportFormat, InputOverrides};

/// Merge layered configuration files into environment variables.
#[derive(Debug, Parser)]
#[command(
    name = "env-layers",
    about = "Merge layered YAML, JSON and TOML files into upper-snake-case environment variables",
    version
)]
pub struct CommandLine {
    /// Whitespace-separated files to merge, lowest precedence first.
    #[arg(long, value_name = "LIST")]
    pub files: Option<String>,
    /// Export format.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<ExportFormat>,
    /// Write to this file instead of standard output or `GITHUB_ENV`.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
    /// Log exported values alongside their keys.
    #[arg(long, action = ArgAction::SetTrue)]
    pub log_values: bool,
    /// TOML settings file; defaults to `env-layers.toml` when present.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config_path: Option<Utf8PathBuf>,
    /// Raise log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    /// Values given on the command line, as the highest settings layer.
    #[must_use]
    pub fn overrides(&self) -> InputOverrides {
        InputOverrides {
            files: self.files.clone(),
            format: self.format,
            output: self.output.clone(),
            log_values: self.log_values.then_some(true),
        }
    }
}
