//! Step definitions for building environments from declared layers.
//!
//! Layers are described one key path at a time. A path uses `.` between
//! nesting levels and values are JSON literals, so `webService.dns = "d1"`
//! declares `{"webService": {"dns": "d1"}}`.

use anyhow::{Context, Result, anyhow, ensure};
use env_layers::{Document, build_environment};
use rstest_bdd_macros::{given, then, when};
use serde_json::{Map, Value};

use crate::fixtures::LayerState;

fn parse_literal(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("invalid JSON literal {raw}"))
}

fn insert_path(layer: &mut Value, path: &str, value: Value) -> Result<()> {
    let (parents, leaf) = match path.rsplit_once('.') {
        Some((parents, leaf)) => (parents.split('.').collect::<Vec<_>>(), leaf),
        None => (Vec::new(), path),
    };
    let mut node = layer;
    for segment in parents {
        let map = node
            .as_object_mut()
            .with_context(|| format!("{segment} is not nested under a mapping"))?;
        node = map
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    node.as_object_mut()
        .with_context(|| format!("cannot set {path} below a leaf"))?
        .insert(leaf.to_owned(), value);
    Ok(())
}

fn set_in_layer(layer_state: &LayerState, new_layer: bool, path: &str, raw: &str) -> Result<()> {
    let value = parse_literal(raw)?;
    let mut layers = layer_state.layers.take().unwrap_or_default();
    if new_layer || layers.is_empty() {
        layers.push(Value::Object(Map::new()));
    }
    let current = layers.last_mut().context("layer stack is empty")?;
    insert_path(current, path, value)?;
    layer_state.layers.set(layers);
    Ok(())
}

#[given("a layer setting {path} to {value}")]
fn new_layer(layer_state: &LayerState, path: String, value: String) -> Result<()> {
    set_in_layer(layer_state, true, &path, &value)
}

#[given("the same layer also sets {path} to {value}")]
fn extend_layer(layer_state: &LayerState, path: String, value: String) -> Result<()> {
    set_in_layer(layer_state, false, &path, &value)
}

#[given("no layers")]
fn no_layers(layer_state: &LayerState) {
    layer_state.layers.set(Vec::new());
}

#[when("the environment is built")]
fn build(layer_state: &LayerState) -> Result<()> {
    let layers = layer_state.layers.take().unwrap_or_default();
    let documents = layers
        .into_iter()
        .map(Document::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| anyhow!(err))?;
    layer_state.environment.set(build_environment(documents));
    Ok(())
}

#[then("variable {key} equals {value}")]
fn variable_equals(layer_state: &LayerState, key: String, value: String) -> Result<()> {
    let expected = parse_literal(&value)?;
    let actual = layer_state
        .environment
        .with_ref(|env| env.get(&key).cloned())
        .context("environment has not been built")?;
    ensure!(
        actual.as_ref() == Some(&expected),
        "{key}: expected {expected}, found {actual:?}"
    );
    Ok(())
}

#[then("variable {key} is not set")]
fn variable_absent(layer_state: &LayerState, key: String) -> Result<()> {
    let present = layer_state
        .environment
        .with_ref(|env| env.get(&key).is_some())
        .context("environment has not been built")?;
    ensure!(!present, "{key} should not be set");
    Ok(())
}

#[then("the environment holds {count:usize} variables")]
fn variable_count(layer_state: &LayerState, count: usize) -> Result<()> {
    let len = layer_state
        .environment
        .with_ref(env_layers::FlatEnvironment::len)
        .context("environment has not been built")?;
    ensure!(len == count, "expected {count} variables, found {len}");
    Ok(())
}

#[then("the variables appear in the order {keys}")]
fn variable_order(layer_state: &LayerState, keys: String) -> Result<()> {
    let expected: Vec<&str> = keys.split(',').map(str::trim).collect();
    let actual = layer_state
        .environment
        .with_ref(|env| env.keys().cloned().collect::<Vec<_>>())
        .context("environment has not been built")?;
    ensure!(actual == expected, "unexpected order {actual:?}");
    Ok(())
}
