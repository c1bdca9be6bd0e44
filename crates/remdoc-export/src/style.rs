//! Node styles.

use std::fmt;

use crate::title::format_title;

/// Styles that are materialized. Everything else is skipped silently.
///
/// `DocumentationPage` is the only documentation style: documentation areas
/// and categories derive `DocumentationArea` / `DocumentationCategory` and
/// produce no file.
pub const ALLOWED_STYLES: [&str; 4] = [
    "DocumentationPage",
    "ArticleArea",
    "ArticleCategory",
    "ArticlePage",
];

/// Depth of a node in the documentation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Top-level area.
    Area,
    /// Category under an area.
    Category,
    /// Page under a category.
    Page,
}

impl Level {
    /// Suffix appended to the formatted area type.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::Category => "Category",
            Self::Page => "Page",
        }
    }
}

/// Display style label derived from an area's type and a node's depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style(String);

impl Style {
    /// Derive the style for a node at `level` under an area of type `kind`.
    ///
    /// A missing type formats as an empty title, yielding the bare suffix.
    #[must_use]
    pub fn derive(kind: Option<&str>, level: Level) -> Self {
        Self(format!(
            "{}{}",
            format_title(kind.unwrap_or_default()),
            level.suffix()
        ))
    }

    /// Whether files are written for this style.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        ALLOWED_STYLES.contains(&self.0.as_str())
    }

    /// Style label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
