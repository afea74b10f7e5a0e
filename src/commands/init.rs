//! Initialize a new content workspace

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new content workspace in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content/go-web"))?;

    // Create default _config.yml
    let config_content = r#"# mdfeed configuration

# Site
name: My Site
title: My Site
contact_mail: ''

# URL
url: http://example.com/
dev_url: http://localhost:4000/

# Directory
content_dir: content
default_collection: go-web

# Server
server:
  ip: localhost
  port: 4000
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Create a sample post
    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
indexVal: 0
---

Welcome! This post is listed at `/api/go-web` once you run `mdfeed serve`.
Add more markdown files next to this one; their `indexVal` front-matter key
controls the order they appear in.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(
        target_dir.join("content/go-web/hello-world.md"),
        sample_post,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FsContentSource, PostCollector};
    use crate::Site;

    #[test]
    fn test_init_creates_a_servable_workspace() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::new(dir.path(), false).unwrap();
        assert_eq!(site.config.default_collection, "go-web");

        let collector = PostCollector::new(FsContentSource, site.content_dir.clone());
        let posts = collector.collect("go-web").unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-world");
        assert_eq!(posts[0].index_val, 0.0);
    }
}
