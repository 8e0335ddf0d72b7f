//! JSON object output.

use std::io::Write;

use serde_json::{Map, Value};

use crate::EnvLayersResult;

use super::{EnvironmentSink, export_error};

/// Buffers variables and writes them as one pretty-printed JSON object on
/// [`EnvironmentSink::finish`].
#[derive(Debug)]
pub struct JsonWriter<W> {
    writer: W,
    buffered: Map<String, Value>,
}

impl<W: Write> JsonWriter<W> {
    /// Wrap `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffered: Map::new(),
        }
    }

    /// Return the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EnvironmentSink for JsonWriter<W> {
    fn export(&mut self, key: &str, value: &str) -> EnvLayersResult<()> {
        self.buffered
            .insert(key.to_owned(), Value::String(value.to_owned()));
        Ok(())
    }

    fn finish(&mut self) -> EnvLayersResult<()> {
        let buffered = std::mem::take(&mut self.buffered);
        serde_json::to_writer_pretty(&mut self.writer, &buffered)
            .map_err(|err| export_error("<json>", err.into()))?;
        writeln!(self.writer).map_err(|err| export_error("<json>", err))?;
        self.writer
            .flush()
            .map_err(|err| export_error("<flush>", err))
    }
}
