//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::Site;

/// Characters escaped when a slug or collection name appears in a URL path
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a full URL against the site's public base URL
///
/// # Examples
/// ```ignore
/// full_url_for(&site, "/go-web/my-post") // -> "https://example.com/go-web/my-post"
/// ```
pub fn full_url_for(site: &Site, path: &str) -> String {
    let base = site.base_url().trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Public URL of a single post within its collection
pub fn post_url(site: &Site, collection: &str, slug: &str) -> String {
    full_url_for(
        site,
        &format!("{}/{}", encode_url(collection), encode_url(slug)),
    )
}

/// Encode a URL path segment
pub fn encode_url(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
