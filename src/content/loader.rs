//! Content discovery - enumerates the markdown files of a collection

use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::FrontMatter;

/// Errors raised while enumerating a collection.
///
/// Per-file problems are not errors: a file that cannot be read or whose
/// front matter does not parse yields a unit without metadata, which the
/// collector omits from its output.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid collection pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to enumerate collection: {0}")]
    Enumerate(#[from] glob::GlobError),
}

/// A discovered markdown file, before validation
#[derive(Debug, Clone, Default)]
pub struct ContentUnit {
    /// Parsed front matter, `None` when the file carries none that is usable
    pub metadata: Option<FrontMatter>,
}

/// Source of content units for a glob pattern.
///
/// One entry per matching file. Iteration order of the returned map is the
/// enumeration order; the collector's stable sort keeps it for posts with
/// equal sort keys.
pub trait ContentSource {
    fn discover(&self, pattern: &str) -> Result<IndexMap<String, ContentUnit>, ContentError>;
}

/// Filesystem-backed content source
#[derive(Debug, Clone, Default)]
pub struct FsContentSource;

impl ContentSource for FsContentSource {
    fn discover(&self, pattern: &str) -> Result<IndexMap<String, ContentUnit>, ContentError> {
        let mut units = IndexMap::new();

        for entry in glob::glob(pattern)? {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            let metadata = load_front_matter(&path);
            units.insert(path.to_string_lossy().into_owned(), ContentUnit { metadata });
        }

        Ok(units)
    }
}

fn load_front_matter(path: &Path) -> Option<FrontMatter> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            return None;
        }
    };

    match FrontMatter::parse(&text) {
        Ok((fm, _body)) => Some(fm),
        Err(e) => {
            tracing::warn!("Failed to parse front-matter in {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_orders_by_filename() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "---\nindexVal: 0\n---\n").unwrap();
        fs::write(dir.path().join("a.md"), "---\nindexVal: 1\n---\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let pattern = format!("{}/*.md", dir.path().display());
        let units = FsContentSource.discover(&pattern).unwrap();

        let names: Vec<_> = units
            .keys()
            .map(|p| Path::new(p).file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_unparseable_file_has_no_metadata() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.md"), "---\ntitle: [oops\n---\n").unwrap();

        let pattern = format!("{}/*.md", dir.path().display());
        let units = FsContentSource.discover(&pattern).unwrap();

        assert_eq!(units.len(), 1);
        assert!(units[0].metadata.is_none());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = FsContentSource.discover("[").unwrap_err();
        assert!(matches!(err, ContentError::Pattern(_)));
    }

    #[test]
    fn test_empty_directory_discovers_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/missing/*.md", dir.path().display());
        let units = FsContentSource.discover(&pattern).unwrap();
        assert!(units.is_empty());
    }
}
