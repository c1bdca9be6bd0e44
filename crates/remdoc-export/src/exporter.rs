//! Page exporter.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use remdoc_directus::Area;
use tracing::info;

use crate::error::ExportError;
use crate::sink::{FileSink, FsSink, PlanSink, PlannedFile};
use crate::walk::{ExportReport, walk};

/// Writes a documentation tree to an output directory it owns exclusively.
#[derive(Debug)]
pub struct PageExporter {
    output_dir: PathBuf,
}

impl PageExporter {
    /// Create an exporter for `output_dir`.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Replace the output directory contents with `tree`.
    ///
    /// The directory is deleted first. A failure part-way through leaves the
    /// files written so far in place.
    pub fn export(&self, tree: &[Area]) -> Result<ExportReport, ExportError> {
        self.reset()?;
        let mut sink = FsSink::new(&self.output_dir);
        let report = export_into(tree, &mut sink)?;
        info!(
            "Wrote {} files to {} ({} nodes skipped)",
            report.files.len(),
            self.output_dir.display(),
            report.skipped
        );
        Ok(report)
    }

    fn reset(&self) -> Result<(), ExportError> {
        match fs::remove_dir_all(&self.output_dir) {
            Ok(()) => {
                info!("Removed previous output {}", self.output_dir.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ExportError::filesystem(&self.output_dir, e)),
        }
    }
}

/// Walk `tree` into any sink, without touching the output directory.
pub fn export_into<S>(tree: &[Area], sink: &mut S) -> Result<ExportReport, ExportError>
where
    S: FileSink + ?Sized,
{
    let mut report = ExportReport::default();
    walk(tree, None, Path::new(""), sink, &mut report)?;
    Ok(report)
}

/// Compute the files an export of `tree` would write.
pub fn plan(tree: &[Area]) -> Result<Vec<PlannedFile>, ExportError> {
    let mut sink = PlanSink::new();
    export_into(tree, &mut sink)?;
    Ok(sink.into_files())
}
