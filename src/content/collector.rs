//! Post collection - the discovery, transform, and sort pipeline behind the API

use std::path::{Path, PathBuf};

use super::loader::{ContentError, ContentSource};
use super::Post;

/// Collects and orders the posts of a single collection
pub struct PostCollector<S: ContentSource> {
    source: S,
    content_dir: PathBuf,
}

impl<S: ContentSource> PostCollector<S> {
    /// Create a collector over a content source rooted at `content_dir`
    pub fn new(source: S, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            content_dir: content_dir.into(),
        }
    }

    /// Produce the complete, ordered post list for one collection.
    ///
    /// Discovered entries without usable metadata, without a derivable slug,
    /// or without a finite ordering key contribute nothing to the result.
    /// Enumeration failures propagate to the caller.
    pub fn collect(&self, collection: &str) -> Result<Vec<Post>, ContentError> {
        let pattern = self
            .content_dir
            .join(collection)
            .join("*.md")
            .to_string_lossy()
            .into_owned();

        let units = self.source.discover(&pattern)?;

        let mut posts = Vec::with_capacity(units.len());
        for (path, unit) in units {
            let Some(slug) = derive_slug(&path) else {
                tracing::debug!("Skipping {}: no derivable slug", path);
                continue;
            };
            let Some(metadata) = unit.metadata else {
                tracing::debug!("Skipping {}: no metadata", path);
                continue;
            };
            let Some(index_val) = metadata.index_val.filter(|v| v.is_finite()) else {
                tracing::warn!("Skipping {}: missing or invalid indexVal", path);
                continue;
            };

            posts.push(Post::from_front_matter(slug.to_string(), index_val, metadata));
        }

        // Stable: posts with equal keys keep enumeration order
        posts.sort_by(|a, b| a.index_val.total_cmp(&b.index_val));

        Ok(posts)
    }
}

/// Final path segment with the `.md` suffix stripped; `None` when empty
fn derive_slug(path: &str) -> Option<&str> {
    let name = Path::new(path).file_name()?.to_str()?;
    let slug = name.strip_suffix(".md").unwrap_or(name);
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
