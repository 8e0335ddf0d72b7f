//! The merge, flatten, and normalise pipeline.
//!
//! [`build_environment`] is the only entry point the rest of the workspace
//! needs. It is a pure computation over in-memory documents: reading files
//! and writing variables happen elsewhere, before and after it runs.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::export::render_value;
use crate::{Document, ENV_DELIMITER, flatten, merge_documents, merge_sequence, normalize_key};

/// Flat mapping from normalised variable names to leaf values.
///
/// Keys are unique and kept in the traversal order of the merged document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatEnvironment(Map<String, Value>);

impl FlatEnvironment {
    /// Look up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no variables were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over variables in order.
    #[must_use]
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Iterate over variable names in order.
    #[must_use]
    pub fn keys(&self) -> serde_json::map::Keys<'_> {
        self.0.keys()
    }

    /// Render every value as the string an environment variable would hold.
    ///
    /// See [`render_value`] for the rendering rules.
    #[must_use]
    pub fn to_string_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), render_value(value)))
            .collect()
    }

    /// Consume the environment, returning it as a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl IntoIterator for FlatEnvironment {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatEnvironment {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merge `documents`, flatten the result, and normalise every key.
///
/// Later documents override earlier ones at each leaf, and sequences are
/// replaced wholesale. When two flattened paths normalise to the same name
/// the one visited last wins; a warning names both paths.
///
/// # Examples
///
/// ```rust
/// use env_layers::{Document, build_environment};
/// use serde_json::json;
///
/// let base = Document::try_from(json!({"name": "application", "terraform": {"bucket": "ID"}}))?;
/// let dev = Document::try_from(json!({"webService": {"dns": "d1"}, "name": "application-dev"}))?;
/// let env = build_environment([base, dev]);
/// assert_eq!(
///     env.into_value(),
///     json!({"NAME": "application-dev", "TERRAFORM_BUCKET": "ID", "WEB_SERVICE_DNS": "d1"})
/// );
/// # Ok::<_, env_layers::EnvLayersError>(())
/// ```
#[must_use]
pub fn build_environment<I>(documents: I) -> FlatEnvironment
where
    I: IntoIterator<Item = Document>,
{
    normalize_flat(flatten(merge_documents(documents), ENV_DELIMITER))
}

/// Variant of [`build_environment`] over a loosely typed sequence.
///
/// Anything other than a JSON array yields an empty environment; see
/// [`merge_sequence`].
#[must_use]
pub fn build_environment_from_value(documents: &Value) -> FlatEnvironment {
    normalize_flat(flatten(merge_sequence(documents), ENV_DELIMITER))
}

fn normalize_flat(flat: Map<String, Value>) -> FlatEnvironment {
    let mut env = Map::with_capacity(flat.len());
    let mut origins: HashMap<String, String> = HashMap::with_capacity(flat.len());
    for (path, value) in flat {
        let key = normalize_key(&path);
        if let Some(previous) = origins.insert(key.clone(), path.clone()) {
            tracing::warn!(
                key = %key,
                previous = %previous,
                current = %path,
                "flattened paths normalise to the same variable; keeping the later value"
            );
        }
        env.insert(key, value);
    }
    FlatEnvironment(env)
}
