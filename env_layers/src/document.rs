//! The mapping type every pipeline stage consumes and produces.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::EnvLayersError;

/// A nested mapping parsed from one configuration source.
///
/// Values are scalars, nested mappings, or sequences. Keys keep the order in
/// which the source declared them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an existing JSON object.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Convert `value` into a document, naming `origin` in the error when the
    /// value is not a mapping.
    ///
    /// A `null` value (for example an empty YAML file) becomes an empty
    /// document.
    ///
    /// # Errors
    ///
    /// Returns [`EnvLayersError::InvalidDocument`] for scalars and sequences.
    pub fn from_value(value: Value, origin: impl Into<String>) -> Result<Self, EnvLayersError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(EnvLayersError::invalid_document(origin, &other)),
        }
    }

    /// Borrow the underlying mapping.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) const fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    /// Consume the document, returning the underlying mapping.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Consume the document, returning it as a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Document {
    type Error = EnvLayersError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value, "document")
    }
}
