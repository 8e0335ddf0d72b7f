//! Upper-snake-case normalisation of flattened key paths.

use heck::ToShoutySnakeCase;

/// Normalise a flattened key path into an environment variable name.
///
/// Word boundaries inside segments (camelCase humps, hyphens, spaces, and
/// underscores) become a single underscore and every letter is upper-cased.
/// The transform runs on the joined path, so the segment delimiter is kept
/// as one underscore and never doubled. Normalising twice changes nothing.
///
/// # Examples
///
/// ```rust
/// use env_layers::normalize_key;
///
/// assert_eq!(normalize_key("webService_dns"), "WEB_SERVICE_DNS");
/// assert_eq!(normalize_key("test-test"), "TEST_TEST");
/// assert_eq!(normalize_key("TEST"), "TEST");
/// ```
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.to_shouty_snake_case()
}
