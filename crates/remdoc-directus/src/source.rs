//! Content source abstraction.

use crate::error::RemoteQueryError;
use crate::types::Area;

/// Source of the documentation tree.
///
/// Implementations perform exactly one query per call and never retry.
pub trait ContentSource {
    /// Fetch every documentation area with its categories and pages.
    ///
    /// Order is preserved as returned by the backend.
    fn fetch_documentation_tree(&self) -> Result<Vec<Area>, RemoteQueryError>;
}
