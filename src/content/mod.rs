//! Content module - discovery, front matter, and post collection

mod collector;
mod frontmatter;
mod loader;
mod post;

pub use collector::PostCollector;
pub use frontmatter::FrontMatter;
pub use loader::{ContentError, ContentSource, ContentUnit, FsContentSource};
pub use post::Post;
