//! Aggregation container for multiple `EnvLayersError` values.

use std::{error::Error, fmt, sync::Arc};

use super::EnvLayersError;

/// Collection of [`EnvLayersError`]s produced while loading a batch of files.
///
/// # Examples
///
/// ```
/// use env_layers::EnvLayersError;
/// let e = EnvLayersError::aggregate(vec![
///     EnvLayersError::UnsupportedFormat { path: "a.ini".into() },
///     EnvLayersError::UnsupportedFormat { path: "b.ini".into() },
/// ]);
/// if let EnvLayersError::Aggregate(agg) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<EnvLayersError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<EnvLayersError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &EnvLayersError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<EnvLayersError>;
    type IntoIter = std::vec::IntoIter<Arc<EnvLayersError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
