//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Front-matter data from a post
///
/// The ordering key is the only field the API contract requires. Everything
/// else is optional and carried through to the JSON output untouched, so
/// authors can attach arbitrary metadata to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    /// Explicit sort key controlling display order within a collection
    #[serde(rename = "indexVal")]
    pub index_val: Option<f64>,

    /// Additional custom fields, in document order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();

        if let Some(rest) = trimmed.strip_prefix("---") {
            let rest = rest.trim_start_matches(['\n', '\r']);

            if let Some(end_pos) = rest.find("\n---") {
                let yaml_content = &rest[..end_pos];
                let remaining = &rest[end_pos + 4..];
                let remaining = remaining.trim_start_matches(['\n', '\r']);

                if yaml_content.trim().is_empty() {
                    return Ok((FrontMatter::default(), remaining));
                }

                let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
                    .map_err(|e| anyhow!("invalid front-matter: {}", e))?;
                return Ok((fm, remaining));
            }

            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        }

        Ok((FrontMatter::default(), content))
    }

    /// Parse the date string into a DateTime for display
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }
}

/// Parse a date string in various formats
pub(super) fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Routing in Go
date: 2024-01-15
indexVal: 3
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Routing in Go".to_string()));
        assert_eq!(fm.index_val, Some(3.0));
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_extra_fields_preserve_order() {
        let content = r#"---
indexVal: 0
series: go-web
difficulty: beginner
---
body
"#;

        let (fm, _) = FrontMatter::parse(content).unwrap();
        let keys: Vec<_> = fm.extra.keys().cloned().collect();
        assert_eq!(keys, vec!["series", "difficulty"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just some markdown.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(fm.index_val, None);
        assert!(remaining.contains("Just some markdown."));
    }

    #[test]
    fn test_unclosed_frontmatter_is_content() {
        let content = "---\ntitle: Oops\nno closing fence\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("no closing fence"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unterminated\n---\nbody\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_parse_date() {
        let fm = FrontMatter {
            date: Some("2024-01-15 10:30:00".to_string()),
            ..Default::default()
        };

        let dt = fm.parse_date().unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-15");
    }

    #[test]
    fn test_integer_index_val() {
        let (fm, _) = FrontMatter::parse("---\nindexVal: 7\n---\n").unwrap();
        assert_eq!(fm.index_val, Some(7.0));
    }
}
