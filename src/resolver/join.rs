//! String rules for building URLs from a root.
//!
//! Both rules are plain string operations. Nothing here parses or
//! validates URLs.

/// Ensure a base URL ends with `/`.
///
/// # Examples
/// ```
/// use siteroot::normalize;
///
/// assert_eq!(normalize("http://example.com/app"), "http://example.com/app/");
/// assert_eq!(normalize("http://example.com/app/"), "http://example.com/app/");
/// ```
pub fn normalize(url: &str) -> String {
    let mut url = url.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Join `child` onto `root`, stripping exactly one leading `/` from `child`.
///
/// No separator is inserted: `root` is expected to carry its own trailing `/`.
///
/// # Examples
/// ```
/// use siteroot::append;
///
/// assert_eq!(append("http://example.com/", "/foo"), "http://example.com/foo");
/// assert_eq!(append("http://example.com/", "//foo"), "http://example.com//foo");
/// ```
pub fn append(root: &str, child: &str) -> String {
    let child = child.strip_prefix('/').unwrap_or(child);
    format!("{root}{child}")
}
