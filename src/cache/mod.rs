//! In-process content index
//!
//! Collections are collected lazily on first request and the result kept in
//! process-wide state. The server's file watcher clears the index whenever
//! anything under the content directory changes, so the next request
//! re-collects from disk.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::content::Post;

/// Cached per-collection post lists
#[derive(Debug, Default)]
pub struct ContentIndex {
    entries: RwLock<HashMap<String, Vec<Post>>>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached posts for a collection, if indexed since the last invalidation
    pub async fn get(&self, collection: &str) -> Option<Vec<Post>> {
        self.entries.read().await.get(collection).cloned()
    }

    pub async fn insert(&self, collection: &str, posts: Vec<Post>) {
        self.entries
            .write()
            .await
            .insert(collection.to_string(), posts);
    }

    /// Drop all cached collections
    pub async fn invalidate(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FrontMatter, Post};

    fn post(slug: &str) -> Post {
        Post::from_front_matter(slug.to_string(), 0.0, FrontMatter::default())
    }

    #[tokio::test]
    async fn test_get_returns_inserted_posts() {
        let index = ContentIndex::new();
        assert!(index.get("go-web").await.is_none());

        index.insert("go-web", vec![post("a")]).await;
        let cached = index.get("go-web").await.unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].slug, "a");
    }

    #[tokio::test]
    async fn test_invalidate_clears_all_collections() {
        let index = ContentIndex::new();
        index.insert("go-web", vec![post("a")]).await;
        index.insert("rust", vec![post("b")]).await;

        index.invalidate().await;

        assert!(index.get("go-web").await.is_none());
        assert!(index.get("rust").await.is_none());
    }
}
