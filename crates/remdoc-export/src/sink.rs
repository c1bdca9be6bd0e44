//! Destinations for exported files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Receives exported files in tree order.
pub trait FileSink {
    /// Write `contents` to `relative`, a path below the export root.
    fn write(&mut self, relative: &Path, contents: &str) -> Result<(), ExportError>;
}

/// Writes files below a root directory, creating parent directories as needed.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create a sink rooted at `root`. Nothing is created until the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSink for FsSink {
    fn write(&mut self, relative: &Path, contents: &str) -> Result<(), ExportError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::filesystem(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| ExportError::filesystem(&path, e))
    }
}

/// A file the export would write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the export root.
    pub path: PathBuf,
    /// Full document text.
    pub contents: String,
}

/// Collects files in memory instead of writing them.
#[derive(Debug, Default)]
pub struct PlanSink {
    files: Vec<PlannedFile>,
}

impl PlanSink {
    /// Create an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the sink, returning files in write order.
    #[must_use]
    pub fn into_files(self) -> Vec<PlannedFile> {
        self.files
    }
}

impl FileSink for PlanSink {
    fn write(&mut self, relative: &Path, contents: &str) -> Result<(), ExportError> {
        self.files.push(PlannedFile {
            path: relative.to_path_buf(),
            contents: contents.to_owned(),
        });
        Ok(())
    }
}
