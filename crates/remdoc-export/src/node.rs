//! Tree node abstraction and per-level front matter.

use std::fmt;

use remdoc_directus::{Area, Category, ItemId, Page, Tag};
use serde::Serialize;

use crate::style::{Level, Style};

/// Body written for nodes without content of their own.
pub const STUB: &str = "STUB";

/// One `{sort}.{slug}` component of an output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegment<'a> {
    /// Sort prefix; absent sort values become 0.
    pub sort: i64,
    /// Node slug.
    pub slug: &'a str,
}

impl<'a> PathSegment<'a> {
    fn new(sort: Option<i64>, slug: &'a str) -> Self {
        Self {
            sort: sort.unwrap_or(0),
            slug,
        }
    }

    /// Whether the slug stays a single path component.
    ///
    /// The sort prefix keeps `.` and `..` slugs from naming a directory, so
    /// only separators and NUL need rejecting.
    #[must_use]
    pub fn is_single_component(&self) -> bool {
        !self.slug.contains(['/', '\\', '\0'])
    }
}

impl fmt::Display for PathSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.sort, self.slug)
    }
}

/// A node of the documentation tree that can be exported.
pub trait TreeNode {
    /// Node type of the next level down.
    type Child: TreeNode;

    /// Depth of this node type.
    const LEVEL: Level;

    /// Path component for this node.
    fn segment(&self) -> PathSegment<'_>;

    /// Area type this node defines for its subtree. Only areas define one.
    fn kind(&self) -> Option<&str> {
        None
    }

    /// Serialize the front matter, with `style` as the first key.
    fn front_matter(&self, style: &Style) -> Result<String, serde_yaml::Error>;

    /// Markdown body.
    fn body(&self) -> &str {
        STUB
    }

    /// Children, or `None` when the relation is absent.
    fn children(&self) -> Option<&[Self::Child]>;
}

/// Assemble a markdown document from front matter YAML and a body.
pub fn render_document(front_matter: &str, body: &str) -> String {
    format!("---\n{}\n---\n{body}", front_matter.trim_end_matches('\n'))
}

#[derive(Serialize)]
struct AreaFrontMatter<'a> {
    style: &'a str,
    id: &'a ItemId,
    slug: &'a str,
    #[serde(rename = "type")]
    kind: Option<&'a str>,
    sort: Option<i64>,
}

impl TreeNode for Area {
    type Child = Category;
    const LEVEL: Level = Level::Area;

    fn segment(&self) -> PathSegment<'_> {
        PathSegment::new(self.sort, &self.slug)
    }

    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn front_matter(&self, style: &Style) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&AreaFrontMatter {
            style: style.as_str(),
            id: &self.id,
            slug: &self.slug,
            kind: self.kind.as_deref(),
            sort: self.sort,
        })
    }

    fn children(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }
}

#[derive(Serialize)]
struct CategoryFrontMatter<'a> {
    style: &'a str,
    id: &'a ItemId,
    slug: &'a str,
    sort: Option<i64>,
}

impl TreeNode for Category {
    type Child = Page;
    const LEVEL: Level = Level::Category;

    fn segment(&self) -> PathSegment<'_> {
        PathSegment::new(self.sort, &self.slug)
    }

    fn front_matter(&self, style: &Style) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&CategoryFrontMatter {
            style: style.as_str(),
            id: &self.id,
            slug: &self.slug,
            sort: self.sort,
        })
    }

    fn children(&self) -> Option<&[Page]> {
        self.pages.as_deref()
    }
}

/// Page front matter: tag junctions are unwrapped to the tags themselves and
/// additional paths reduced to their path strings.
#[derive(Serialize)]
struct PageFrontMatter<'a> {
    style: &'a str,
    id: &'a ItemId,
    slug: &'a str,
    title: Option<&'a str>,
    sort: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Option<&'a Tag>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_paths: Option<Vec<Option<&'a str>>>,
}

impl TreeNode for Page {
    // Pages are leaves; `children` is always `None`.
    type Child = Page;
    const LEVEL: Level = Level::Page;

    fn segment(&self) -> PathSegment<'_> {
        PathSegment::new(self.sort, &self.slug)
    }

    fn front_matter(&self, style: &Style) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&PageFrontMatter {
            style: style.as_str(),
            id: &self.id,
            slug: &self.slug,
            title: self.title.as_deref(),
            sort: self.sort,
            tags: self
                .tags
                .as_ref()
                .map(|tags| tags.iter().map(|link| link.tag.as_ref()).collect()),
            additional_paths: self
                .additional_paths
                .as_ref()
                .map(|paths| paths.iter().map(|p| p.path.as_deref()).collect()),
        })
    }

    fn body(&self) -> &str {
        match self.content.as_deref() {
            Some(content) if !content.is_empty() => content,
            _ => STUB,
        }
    }

    fn children(&self) -> Option<&[Page]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page(value: serde_json::Value) -> Page {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_segment_defaults_sort_to_zero() {
        let area: Area =
            serde_json::from_value(json!({ "id": 1, "slug": "guides", "type": "article" }))
                .unwrap();
        assert_eq!(area.segment().to_string(), "0.guides");
    }

    #[test]
    fn test_segment_keeps_negative_sort() {
        let category: Category =
            serde_json::from_value(json!({ "id": 1, "slug": "basics", "sort": -3 })).unwrap();
        assert_eq!(category.segment().to_string(), "-3.basics");
    }

    #[test]
    fn test_segment_rejects_separators() {
        for slug in ["x/../../escaped", "a\\b", "nul\0byte"] {
            let segment = PathSegment { sort: 0, slug };
            assert!(!segment.is_single_component(), "{slug:?} should be rejected");
        }
        for slug in ["intro", "..", ".", "a.md"] {
            let segment = PathSegment { sort: 0, slug };
            assert!(segment.is_single_component(), "{slug:?} should be accepted");
        }
    }

    #[test]
    fn test_render_document() {
        assert_eq!(
            render_document("style: ArticlePage\n", "Hello"),
            "---\nstyle: ArticlePage\n---\nHello"
        );
    }

    #[test]
    fn test_area_front_matter_excludes_categories() {
        let area: Area = serde_json::from_value(json!({
            "id": 1,
            "slug": "guides",
            "type": "article",
            "sort": 4,
            "categories": [{ "id": 2, "slug": "basics" }]
        }))
        .unwrap();
        let style = Style::derive(area.kind(), Level::Area);

        let yaml = area.front_matter(&style).unwrap();

        assert_eq!(
            yaml,
            "style: ArticleArea\nid: 1\nslug: guides\ntype: article\nsort: 4\n"
        );
    }

    #[test]
    fn test_category_front_matter_excludes_pages() {
        let category: Category = serde_json::from_value(json!({
            "id": 2,
            "slug": "basics",
            "sort": null,
            "pages": [{ "id": 3, "slug": "intro" }]
        }))
        .unwrap();
        let style = Style::derive(Some("article"), Level::Category);

        let yaml = category.front_matter(&style).unwrap();

        assert_eq!(yaml, "style: ArticleCategory\nid: 2\nslug: basics\nsort: null\n");
    }

    #[test]
    fn test_page_front_matter_flattens_relations() {
        let page = page(json!({
            "id": 3,
            "slug": "intro",
            "title": "Introduction",
            "content": "Hello",
            "sort": 1,
            "tags": [{ "tag": { "id": 9, "icon": "book", "name": "Basics" } }],
            "additional_paths": [{ "id": 5, "path": "/start" }]
        }));
        let style = Style::derive(Some("article"), Level::Page);

        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&page.front_matter(&style).unwrap()).unwrap();

        let expected: serde_yaml::Value = serde_yaml::from_str(
            "style: ArticlePage\nid: 3\nslug: intro\ntitle: Introduction\nsort: 1\n\
             tags:\n  - id: 9\n    icon: book\n    name: Basics\n\
             additional_paths:\n  - /start\n",
        )
        .unwrap();
        assert_eq!(yaml, expected);
        assert!(yaml.get("content").is_none());
    }

    #[test]
    fn test_page_front_matter_omits_absent_relations() {
        let page = page(json!({ "id": 3, "slug": "intro" }));
        let style = Style::derive(Some("article"), Level::Page);

        let yaml = page.front_matter(&style).unwrap();

        assert!(!yaml.contains("tags"));
        assert!(!yaml.contains("additional_paths"));
    }

    #[test]
    fn test_page_body_placeholder() {
        assert_eq!(page(json!({ "id": 1, "slug": "a" })).body(), STUB);
        assert_eq!(page(json!({ "id": 1, "slug": "a", "content": "" })).body(), STUB);
        assert_eq!(
            page(json!({ "id": 1, "slug": "a", "content": "# Title" })).body(),
            "# Title"
        );
    }

    #[test]
    fn test_page_has_no_children() {
        assert!(page(json!({ "id": 1, "slug": "a" })).children().is_none());
    }
}
