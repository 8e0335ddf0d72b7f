//! Error types produced while resolving, merging, and exporting documents.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::EnvLayersError;
