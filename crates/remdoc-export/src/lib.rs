//! Markdown tree export for remdoc.
//!
//! Walks the documentation tree fetched from a [`ContentSource`] and writes one
//! markdown file per area, category and page, each with a YAML front matter
//! block. Nodes whose derived [`Style`] is not in [`ALLOWED_STYLES`] produce no
//! file, but their children are still visited.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use std::time::Duration;
//! use remdoc_directus::DirectusClient;
//!
//! let client = DirectusClient::new("https://cms.example.com", None, Duration::from_secs(30));
//! let report = remdoc_export::build_pages(&client, Path::new("."))?;
//! println!("{} files written", report.files.len());
//! ```

mod error;
mod exporter;
mod node;
mod sink;
mod style;
mod title;
mod walk;

use std::path::Path;

use remdoc_directus::ContentSource;
use tracing::info;

pub use error::{BuildError, ExportError};
pub use exporter::{PageExporter, export_into, plan};
pub use node::{PathSegment, STUB, TreeNode, render_document};
pub use sink::{FileSink, FsSink, PlanSink, PlannedFile};
pub use style::{ALLOWED_STYLES, Level, Style};
pub use title::format_title;
pub use walk::ExportReport;

/// Output directory name, relative to the project directory.
pub const REMOTE_DIR: &str = ".remote";

/// Fetch the documentation tree and materialize it under `<project_dir>/.remote`.
///
/// This is the build hook entry point: one fetch, one full reset of the
/// output directory, one sequential walk.
pub fn build_pages<C>(source: &C, project_dir: &Path) -> Result<ExportReport, BuildError>
where
    C: ContentSource + ?Sized,
{
    build_into(source, &project_dir.join(REMOTE_DIR))
}

/// Fetch the documentation tree and materialize it under `output_dir`.
pub fn build_into<C>(source: &C, output_dir: &Path) -> Result<ExportReport, BuildError>
where
    C: ContentSource + ?Sized,
{
    let tree = source.fetch_documentation_tree()?;
    info!("Exporting {} areas to {}", tree.len(), output_dir.display());
    let report = PageExporter::new(output_dir).export(&tree)?;
    Ok(report)
}
