//! Helper functions for URL generation

mod url;

pub use url::*;
