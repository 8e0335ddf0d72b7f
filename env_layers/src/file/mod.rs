//! Resolving configuration files into [`crate::Document`]s.
//!
//! The format is chosen from the file extension: YAML (`.yaml`, `.yml`),
//! JSON (`.json`), or TOML (`.toml`). A missing file is an error; nothing is
//! silently skipped.

mod format;
mod helpers;
mod loader;
mod value;

pub use format::{ConfigFormat, has_supported_extension};
pub use loader::{load_document, load_documents};

#[cfg(test)]
mod tests;
