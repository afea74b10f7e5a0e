//! Post model

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::FrontMatter;

/// A single resolved post: front-matter metadata plus the slug derived
/// from its source filename
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier, the source filename without its `.md` extension
    pub slug: String,

    /// Explicit sort key; posts within a collection are ordered by this value
    #[serde(rename = "indexVal")]
    pub index_val: f64,

    /// Post title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date, passed through as written in the front matter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Remaining front-matter fields, carried through verbatim
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Post {
    /// Build a post from parsed front matter and a derived slug.
    ///
    /// The derived slug always wins over a stray `slug` key in the front
    /// matter. The ordering key must already be validated by the caller.
    pub fn from_front_matter(slug: String, index_val: f64, fm: FrontMatter) -> Self {
        let FrontMatter {
            title,
            date,
            mut extra,
            ..
        } = fm;
        extra.shift_remove("slug");

        Self {
            slug,
            index_val,
            title,
            date,
            extra,
        }
    }

    /// Parsed publication date, when the front-matter value is recognizable
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date
            .as_deref()
            .and_then(super::frontmatter::parse_date_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_wins_over_metadata_slug() {
        let (fm, _) = FrontMatter::parse("---\nindexVal: 1\nslug: from-metadata\n---\n").unwrap();
        let post = Post::from_front_matter("from-filename".to_string(), 1.0, fm);
        assert_eq!(post.slug, "from-filename");
        assert!(!post.extra.contains_key("slug"));
    }

    #[test]
    fn test_minimal_post_serializes_to_two_fields() {
        let post = Post::from_front_matter("d".to_string(), 5.0, FrontMatter::default());
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value, serde_json::json!({"slug": "d", "indexVal": 5.0}));
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let (fm, _) =
            FrontMatter::parse("---\nindexVal: 2\ntitle: Hello\nseries: go-web\n---\n").unwrap();
        let post = Post::from_front_matter("hello".to_string(), 2.0, fm);
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["title"], "Hello");
        assert_eq!(value["series"], "go-web");
    }
}
