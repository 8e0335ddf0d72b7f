//! Loading entrypoints that turn paths into documents.

use std::sync::Arc;

use camino::Utf8Path;

use crate::{Document, EnvLayersError, EnvLayersResult, FileResultExt};

use super::format::ConfigFormat;
use super::helpers::open_parent_dir_and_name;

/// Read and parse the document stored at `path`.
///
/// An empty file yields an empty document.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use env_layers::load_document;
///
/// # fn run() -> env_layers::EnvLayersResult<()> {
/// let doc = load_document(Utf8Path::new("config/base.yml"))?;
/// println!("{} top-level keys", doc.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`EnvLayersError::UnsupportedFormat`] when the extension is unknown.
/// - [`EnvLayersError::File`] when the file is missing, unreadable, or
///   malformed.
/// - [`EnvLayersError::InvalidDocument`] when the top-level value is not a
///   mapping.
pub fn load_document(path: &Utf8Path) -> EnvLayersResult<Document> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| {
        Arc::new(EnvLayersError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    })?;
    let (dir, name) = open_parent_dir_and_name(path).with_file(path)?;
    if !dir.is_file(&name) {
        return Err(Arc::new(EnvLayersError::not_found(path)));
    }
    let data = dir.read_to_string(&name).with_file(path)?;
    let value = format.parse(path, &data)?;
    let document = Document::from_value(value, path.as_str()).map_err(Arc::new)?;
    tracing::debug!(
        path = %path,
        format = ?format,
        keys = document.len(),
        "loaded configuration document"
    );
    Ok(document)
}

/// Load every path in order.
///
/// All paths are attempted so a single run reports every broken file.
///
/// # Errors
///
/// Returns the failure unchanged when exactly one path fails and an
/// [`EnvLayersError::Aggregate`] when several do.
pub fn load_documents<P>(paths: &[P]) -> EnvLayersResult<Vec<Document>>
where
    P: AsRef<Utf8Path>,
{
    let mut documents = Vec::with_capacity(paths.len());
    let mut errors = Vec::new();
    for path in paths {
        match load_document(path.as_ref()) {
            Ok(document) => documents.push(document),
            Err(err) => errors.push(err),
        }
    }
    match EnvLayersError::try_aggregate(errors) {
        Some(err) => Err(Arc::new(err)),
        None => {
            tracing::info!(count = documents.len(), "loaded configuration documents");
            Ok(documents)
        }
    }
}
