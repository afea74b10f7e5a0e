//! List collection content

use anyhow::Result;
use walkdir::WalkDir;

use crate::content::{FsContentSource, PostCollector};
use crate::helpers;
use crate::Site;

/// Print the posts of a collection in display order
pub fn run(site: &Site, collection: Option<&str>) -> Result<()> {
    let collection = collection.unwrap_or(&site.config.default_collection);
    let collector = PostCollector::new(FsContentSource, site.content_dir.clone());
    let posts = collector.collect(collection)?;

    println!("Posts in {} ({}):", collection, posts.len());
    for post in &posts {
        let date = post
            .parse_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        println!(
            "  [{:>3}] {} - {} ({})",
            post.index_val,
            date,
            post.title.as_deref().unwrap_or(&post.slug),
            helpers::post_url(site, collection, &post.slug)
        );
    }

    Ok(())
}

/// Print the collections found under the content directory
pub fn run_collections(site: &Site) -> Result<()> {
    if !site.content_dir.exists() {
        println!("No content directory at {}", site.content_dir.display());
        return Ok(());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(&site.content_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();

    let collector = PostCollector::new(FsContentSource, site.content_dir.clone());

    println!("Collections ({}):", names.len());
    for name in names {
        let posts = collector.collect(&name)?;
        println!("  {} ({} posts)", name, posts.len());
    }

    Ok(())
}
