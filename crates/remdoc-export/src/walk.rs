//! Depth-first tree walk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExportError;
use crate::node::{TreeNode, render_document};
use crate::sink::FileSink;
use crate::style::Style;

/// Outcome of an export walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Files written, relative to the export root, in write order.
    pub files: Vec<PathBuf>,
    /// Nodes skipped because their style is not allowed.
    pub skipped: usize,
}

/// Visit `nodes` in order, writing allowed nodes to `sink` and descending into
/// children regardless of whether the parent was written.
///
/// `kind` is the area type inherited from the parent; areas replace it with
/// their own.
pub(crate) fn walk<'t, N, S>(
    nodes: &'t [N],
    kind: Option<&'t str>,
    parent: &Path,
    sink: &mut S,
    report: &mut ExportReport,
) -> Result<(), ExportError>
where
    N: TreeNode,
    S: FileSink + ?Sized,
{
    for node in nodes {
        let kind = node.kind().or(kind);
        let segment = node.segment();
        if !segment.is_single_component() {
            return Err(ExportError::UnsafeSlug {
                slug: segment.slug.to_owned(),
            });
        }
        let stem = segment.to_string();
        let style = Style::derive(kind, N::LEVEL);

        if style.is_allowed() {
            let path = parent.join(format!("{stem}.md"));
            let document = render_document(&node.front_matter(&style)?, node.body());
            sink.write(&path, &document)?;
            debug!("Wrote {} ({style})", path.display());
            report.files.push(path);
        } else {
            debug!("Skipped {} ({style})", parent.join(&stem).display());
            report.skipped += 1;
        }

        if let Some(children) = node.children() {
            walk(children, kind, &parent.join(&stem), sink, report)?;
        }
    }
    Ok(())
}
