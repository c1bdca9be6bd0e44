//! In-memory content source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::RemoteQueryError;
use crate::source::ContentSource;
use crate::types::Area;

/// Content source serving a fixed tree.
///
/// # Example
///
/// ```ignore
/// use remdoc_directus::{ContentSource, StaticSource};
///
/// let source = StaticSource::from_json(serde_json::json!([
///     { "id": 1, "slug": "guides", "type": "article", "sort": 0 }
/// ]))?;
/// let tree = source.fetch_documentation_tree()?;
/// ```
#[derive(Debug, Default)]
pub struct StaticSource {
    areas: Vec<Area>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl StaticSource {
    /// Create a source that returns `areas` on every fetch.
    #[must_use]
    pub fn new(areas: Vec<Area>) -> Self {
        Self {
            areas,
            ..Self::default()
        }
    }

    /// Create a source from a JSON value shaped like the Directus `data` array.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteQueryError::Schema`] if the value is not a valid tree.
    pub fn from_json(value: serde_json::Value) -> Result<Self, RemoteQueryError> {
        let areas = serde_json::from_value(value).map_err(|source| RemoteQueryError::Schema {
            collection: crate::query::DOCUMENTATION_COLLECTION.to_owned(),
            source,
        })?;
        Ok(Self::new(areas))
    }

    /// Create a source whose fetch always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of fetches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentSource for StaticSource {
    fn fetch_documentation_tree(&self) -> Result<Vec<Area>, RemoteQueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(RemoteQueryError::Unavailable(message.clone())),
            None => Ok(self.areas.clone()),
        }
    }
}
