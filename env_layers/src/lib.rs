//! Merge layered configuration documents into a flat process environment.
//!
//! Documents (parsed YAML, JSON, or TOML mappings) are deep-merged in order,
//! flattened into `_`-joined key paths, and normalised to upper-snake-case:
//!
//! ```rust
//! use env_layers::{Document, build_environment};
//! use serde_json::json;
//!
//! let base = Document::try_from(json!({"test": "test", "testTwo": "test2"}))?;
//! let overlay = Document::try_from(json!({"test": "test2", "nested": {"dnsName": "d1"}}))?;
//! let env = build_environment([base, overlay]);
//! assert_eq!(
//!     env.into_value(),
//!     json!({"TEST": "test2", "TEST_TWO": "test2", "NESTED_DNS_NAME": "d1"})
//! );
//! # Ok::<_, env_layers::EnvLayersError>(())
//! ```
//!
//! [`build_environment`] is pure. The [`file`], [`input`], and [`export`]
//! modules hold the effectful steps that surround it: reading documents from
//! disk, resolving which files to read, and writing the variables out.

mod document;
mod environment;
mod error;
pub mod export;
pub mod file;
mod flatten;
pub mod input;
mod merge;
mod normalize;
mod result_ext;

use std::sync::Arc;

pub use document::Document;
pub use environment::{FlatEnvironment, build_environment, build_environment_from_value};
pub use error::{AggregatedErrors, EnvLayersError};
pub use export::{EnvironmentSink, ExportFormat, export_environment, render_value};
pub use file::{ConfigFormat, load_document, load_documents};
pub use flatten::{ENV_DELIMITER, flatten};
pub use input::{InputOverrides, InputSettings, split_file_list};
pub use merge::{merge_documents, merge_sequence, merge_value};
pub use normalize::normalize_key;
pub use result_ext::{EnvLayersResultExt, FileResultExt, ResultIntoFigment};

/// Re-export of `serde_json` so callers can build documents without adding
/// the dependency themselves.
pub use serde_json;

/// Result type used throughout the crate.
pub type EnvLayersResult<T> = Result<T, Arc<EnvLayersError>>;
