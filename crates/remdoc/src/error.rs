//! CLI error types.

use remdoc_config::ConfigError;
use remdoc_directus::RemoteQueryError;
use remdoc_export::{BuildError, ExportError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Query(#[from] RemoteQueryError),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("{0}")]
    Build(#[from] BuildError),
}
