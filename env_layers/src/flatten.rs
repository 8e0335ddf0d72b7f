//! Depth-first flattening of nested documents into delimiter-joined paths.

use serde_json::{Map, Value};

use crate::Document;

/// Delimiter the environment pipeline joins key paths with.
pub const ENV_DELIMITER: &str = "_";

/// Flatten `document` into a single-level mapping.
///
/// Every value that is not itself a mapping is a leaf: scalars and sequences
/// are emitted unchanged under the `delimiter`-joined path from the root.
/// Entries appear in traversal order. Empty nested mappings have no leaves
/// and contribute nothing.
///
/// # Examples
///
/// ```rust
/// use env_layers::{Document, flatten};
/// use serde_json::json;
///
/// let doc = Document::try_from(json!({"web": {"dns": "d1", "ports": [80]}, "name": "app"}))?;
/// let flat = flatten(doc, "_");
/// assert_eq!(
///     serde_json::Value::Object(flat),
///     json!({"web_dns": "d1", "web_ports": [80], "name": "app"})
/// );
/// # Ok::<_, env_layers::EnvLayersError>(())
/// ```
#[must_use]
pub fn flatten(document: Document, delimiter: &str) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(&mut flat, None, document.into_map(), delimiter);
    flat
}

fn flatten_into(
    flat: &mut Map<String, Value>,
    prefix: Option<&str>,
    map: Map<String, Value>,
    delimiter: &str,
) {
    for (key, value) in map {
        let path = match prefix {
            Some(parent) => format!("{parent}{delimiter}{key}"),
            None => key,
        };
        match value {
            Value::Object(nested) => flatten_into(flat, Some(&path), nested, delimiter),
            leaf => {
                flat.insert(path, leaf);
            }
        }
    }
}
