//! Documentation tree types as returned by Directus.
//!
//! Field names mirror the Directus collections so that serde can decode the
//! nested `fields` query result directly.

use serde::{Deserialize, Serialize};

/// Primary key of a Directus item.
///
/// Collections use either serial integer keys or UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Serial integer key.
    Int(i64),
    /// String key (UUID or manual).
    Str(String),
}

/// Top-level documentation grouping (`documentation_area`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Area {
    /// Item ID.
    pub id: ItemId,
    /// URL slug.
    pub slug: String,
    /// Display type, e.g. `article` or `documentation`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Manual sort value.
    #[serde(default)]
    pub sort: Option<i64>,
    /// Child categories.
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// Second-level grouping under an [`Area`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    /// Item ID.
    pub id: ItemId,
    /// URL slug.
    pub slug: String,
    /// Manual sort value.
    #[serde(default)]
    pub sort: Option<i64>,
    /// Child pages.
    #[serde(default)]
    pub pages: Option<Vec<Page>>,
}

/// Leaf content unit under a [`Category`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Page {
    /// Item ID.
    pub id: ItemId,
    /// URL slug.
    pub slug: String,
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Raw markdown body.
    #[serde(default)]
    pub content: Option<String>,
    /// Manual sort value.
    #[serde(default)]
    pub sort: Option<i64>,
    /// Tag junction records.
    #[serde(default)]
    pub tags: Option<Vec<PageTag>>,
    /// Alternate routing paths.
    #[serde(default)]
    pub additional_paths: Option<Vec<AdditionalPath>>,
}

/// Junction record linking a [`Page`] to a [`Tag`].
///
/// `tag` is null when the related tag has been deleted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageTag {
    /// Related tag.
    #[serde(default)]
    pub tag: Option<Tag>,
}

/// Tag attached to a page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tag {
    /// Item ID.
    pub id: ItemId,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Alternate routing path for a page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AdditionalPath {
    /// Item ID.
    pub id: ItemId,
    /// Path string.
    #[serde(default)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_full_tree() {
        let value = json!([{
            "id": 1,
            "slug": "guides",
            "type": "article",
            "sort": 2,
            "categories": [{
                "id": 10,
                "slug": "basics",
                "sort": null,
                "pages": [{
                    "id": "5b0c8f3e-1d2a-4c1e-9f00-000000000001",
                    "slug": "intro",
                    "title": "Introduction",
                    "content": "Hello",
                    "sort": 1,
                    "tags": [{ "tag": { "id": 3, "icon": "book", "name": "Basics" } }],
                    "additional_paths": [{ "id": 7, "path": "/start" }]
                }]
            }]
        }]);

        let areas: Vec<Area> = serde_json::from_value(value).unwrap();

        assert_eq!(areas.len(), 1);
        let area = &areas[0];
        assert_eq!(area.id, ItemId::Int(1));
        assert_eq!(area.kind.as_deref(), Some("article"));
        assert_eq!(area.sort, Some(2));

        let category = &area.categories.as_ref().unwrap()[0];
        assert_eq!(category.sort, None);

        let page = &category.pages.as_ref().unwrap()[0];
        assert_eq!(
            page.id,
            ItemId::Str("5b0c8f3e-1d2a-4c1e-9f00-000000000001".to_owned())
        );
        assert_eq!(page.content.as_deref(), Some("Hello"));
        assert_eq!(
            page.tags.as_ref().unwrap()[0].tag,
            Some(Tag {
                id: ItemId::Int(3),
                icon: Some("book".to_owned()),
                name: Some("Basics".to_owned()),
            })
        );
        assert_eq!(
            page.additional_paths.as_ref().unwrap()[0].path.as_deref(),
            Some("/start")
        );
    }

    #[test]
    fn test_decode_missing_relations() {
        let area: Area =
            serde_json::from_value(json!({ "id": 1, "slug": "empty", "type": "article" })).unwrap();
        assert!(area.categories.is_none());
        assert!(area.sort.is_none());
    }

    #[test]
    fn test_decode_deleted_tag() {
        let link: PageTag = serde_json::from_value(json!({ "tag": null })).unwrap();
        assert!(link.tag.is_none());
    }
}
