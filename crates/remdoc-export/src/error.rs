//! Error types for export.

use std::path::PathBuf;

use remdoc_directus::RemoteQueryError;

/// Error while writing the markdown tree.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Directory removal, creation, or file write failed.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        /// Path being touched.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A slug would place a file outside its parent directory.
    #[error("slug {slug:?} contains a path separator")]
    UnsafeSlug {
        /// Offending slug.
        slug: String,
    },

    /// Front matter could not be serialized.
    #[error("front matter serialization failed: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

impl ExportError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Error from a full fetch-and-export build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Fetching the tree failed.
    #[error("failed to fetch documentation tree: {0}")]
    Fetch(#[from] RemoteQueryError),

    /// Writing the tree failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
