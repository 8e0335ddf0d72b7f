//! Shared fixtures for the layered environment scenarios.

use env_layers::FlatEnvironment;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;

/// Layers declared so far and the environment built from them.
#[derive(Debug, Default, ScenarioState)]
pub struct LayerState {
    /// Raw layers in declaration order, lowest precedence first.
    pub layers: Slot<Vec<Value>>,
    /// Result of the most recent build.
    pub environment: Slot<FlatEnvironment>,
}

/// Creates an empty layer stack for each scenario.
#[fixture]
pub fn layer_state() -> LayerState {
    LayerState::default()
}
