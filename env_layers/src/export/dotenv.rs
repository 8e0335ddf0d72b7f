//! `KEY=value` output compatible with dotenv loaders.

use std::io::Write;

use crate::EnvLayersResult;

use super::{EnvironmentSink, export_error};

/// Writes variables as `KEY=value` lines.
///
/// Values containing whitespace, quotes, `#`, `=`, `$`, backticks, or
/// backslashes are wrapped in double quotes with those characters escaped.
#[derive(Debug)]
pub struct DotenvWriter<W> {
    writer: W,
}

impl<W: Write> DotenvWriter<W> {
    /// Wrap `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Return the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EnvironmentSink for DotenvWriter<W> {
    fn export(&mut self, key: &str, value: &str) -> EnvLayersResult<()> {
        writeln!(self.writer, "{key}={}", quote(value)).map_err(|err| export_error(key, err))
    }

    fn finish(&mut self) -> EnvLayersResult<()> {
        self.writer
            .flush()
            .map_err(|err| export_error("<flush>", err))
    }
}

fn needs_quotes(value: &str) -> bool {
    value.chars().any(|c| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '#' | '=' | '$' | '`' | '\\')
    })
}

fn quote(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_owned();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' | '$' | '`' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
