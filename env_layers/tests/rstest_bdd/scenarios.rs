//! Binds the feature files to the step registry.

use crate::fixtures::{LayerState, layer_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/layered_environment.feature",
    fixtures = [layer_state: LayerState]
);
