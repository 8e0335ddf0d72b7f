//! Deep merging of ordered document sequences.
//!
//! Later documents win at every leaf. Nested mappings merge key by key;
//! sequences and scalars replace whatever was there before, so an array is
//! never concatenated or merged positionally.

use serde_json::{Map, Value};

use crate::Document;

/// Merge `documents` in order, starting from an empty document.
///
/// # Examples
///
/// ```rust
/// use env_layers::{Document, merge_documents};
/// use serde_json::json;
///
/// let base = Document::try_from(json!({"a": [1, 2], "b": {"x": 1}}))?;
/// let overlay = Document::try_from(json!({"a": [3], "b": {"y": 2}}))?;
/// let merged = merge_documents([base, overlay]);
/// assert_eq!(merged.into_value(), json!({"a": [3], "b": {"x": 1, "y": 2}}));
/// # Ok::<_, env_layers::EnvLayersError>(())
/// ```
#[must_use]
pub fn merge_documents<I>(documents: I) -> Document
where
    I: IntoIterator<Item = Document>,
{
    documents
        .into_iter()
        .fold(Document::new(), |mut merged, document| {
            merge_map(merged.as_map_mut(), document.into_map());
            merged
        })
}

/// Merge a loosely typed sequence of documents.
///
/// Input that is not a JSON array produces an empty document instead of an
/// error. This is a compatibility choice for callers handing over whatever
/// their parser produced, not a missing check. Elements that are not mappings
/// are skipped; use [`Document::from_value`] to reject them instead.
#[must_use]
pub fn merge_sequence(documents: &Value) -> Document {
    let Value::Array(items) = documents else {
        return Document::new();
    };
    let accepted = items.iter().enumerate().filter_map(|(index, item)| {
        if let Value::Object(map) = item {
            Some(Document::from_map(map.clone()))
        } else {
            tracing::debug!(index, "skipping non-mapping element in document sequence");
            None
        }
    });
    merge_documents(accepted)
}

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - Objects are merged recursively; a non-object target is replaced by an
///   empty object first.
/// - Arrays and scalars replace `target` wholesale.
///
/// # Examples
///
/// ```rust
/// use env_layers::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"a": 1, "b": {"x": 1}});
/// merge_value(&mut acc, json!({"b": {"y": 2}, "c": 3}));
/// assert_eq!(acc, json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}));
///
/// merge_value(&mut acc, json!({"b": [1, 2, 3]}));
/// assert_eq!(acc["b"], json!([1, 2, 3]));
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    match layer {
        Value::Object(map) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(target_map) = target {
                merge_map(target_map, map);
            }
        }
        other => *target = other,
    }
}

fn merge_map(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}
