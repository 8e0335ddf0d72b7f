//! Test helpers shared across the env-layers workspace.
//!
//! [`env`] serialises process-environment mutation behind RAII guards and
//! [`figment`] wraps `figment::Jail` so tests can return `anyhow::Result`.

pub mod env;
pub mod figment;
