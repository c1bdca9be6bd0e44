//! Items query construction.

use serde::Deserialize;

/// Collection holding documentation areas.
pub const DOCUMENTATION_COLLECTION: &str = "documentation_area";

/// Upper bound on areas fetched in one call. Areas beyond this are dropped.
pub const MAX_AREAS: u32 = 5000;

/// Fields requested for the documentation tree: area fields, two nested
/// relations (categories, pages) and two leaf relations per page.
pub const DOCUMENTATION_FIELDS: &[&str] = &[
    "id",
    "slug",
    "type",
    "sort",
    "categories.id",
    "categories.slug",
    "categories.sort",
    "categories.pages.id",
    "categories.pages.slug",
    "categories.pages.title",
    "categories.pages.content",
    "categories.pages.sort",
    "categories.pages.tags.tag.id",
    "categories.pages.tags.tag.icon",
    "categories.pages.tags.tag.name",
    "categories.pages.additional_paths.id",
    "categories.pages.additional_paths.path",
];

/// A `readItems` request against one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsQuery {
    /// Collection name.
    pub collection: &'static str,
    /// Dotted field paths to return.
    pub fields: &'static [&'static str],
    /// Maximum number of top-level items.
    pub limit: u32,
}

impl ItemsQuery {
    /// Query for the full documentation tree.
    #[must_use]
    pub fn documentation_tree() -> Self {
        Self {
            collection: DOCUMENTATION_COLLECTION,
            fields: DOCUMENTATION_FIELDS,
            limit: MAX_AREAS,
        }
    }

    /// Build the REST URL for this query relative to the Directus base URL.
    ///
    /// Field paths only contain `[a-z_.]`, so no percent-encoding is needed.
    #[must_use]
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}/items/{}?fields={}&limit={}",
            base_url.trim_end_matches('/'),
            self.collection,
            self.fields.join(","),
            self.limit
        )
    }
}

/// Successful items response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsResponse<T> {
    pub data: T,
}

/// Error response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorsResponse {
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEntry {
    pub message: String,
}

impl ErrorsResponse {
    /// Parse an error body, joining all messages.
    ///
    /// Returns `None` when the body is not a Directus error envelope.
    pub(crate) fn message_from(body: &str) -> Option<String> {
        let parsed: Self = serde_json::from_str(body).ok()?;
        if parsed.errors.is_empty() {
            return None;
        }
        Some(
            parsed
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
