//! Site and static URL resolution.
//!
//! # Module Structure
//!
//! ```text
//! resolver/
//! ├── join       # normalize / append string rules
//! ├── root       # Root newtype (always ends with `/`)
//! ├── global     # Process-wide resolver handle
//! └── mod.rs     # UrlResolver (this file)
//! ```
//!
//! # Example
//!
//! ```
//! use siteroot::UrlResolver;
//!
//! let mut urls = UrlResolver::new();
//! urls.set_site_root("http://example.com/app");
//!
//! assert_eq!(urls.site_url("/foo/bar").unwrap(), "http://example.com/app/foo/bar");
//! assert_eq!(urls.static_url("img.png").unwrap(), "http://example.com/app/static/img.png");
//! ```

pub mod global;
mod join;
mod root;

pub use join::{append, normalize};
pub use root::Root;

use std::fmt;

use serde::Serialize;

use crate::error::{Result, UrlError};

/// Path joined onto the site root to derive a default static root.
const DEFAULT_STATIC_DIR: &str = "/static/";

/// Which root a resolver call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootKind {
    Site,
    Static,
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Site => f.write_str("site"),
            Self::Static => f.write_str("static"),
        }
    }
}

/// How the static root got its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootSource {
    /// Derived from the first site root as `<site root>static/`
    Derived,
    /// Set through `set_static_root`
    Explicit,
}

/// Site and static roots with URL builders.
///
/// Invariants:
/// - Both roots end with `/` once set
/// - The static root is derived at most once, and only while it is unset
/// - An explicit static root is never replaced by a derived one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlResolver {
    site_root: Option<Root>,
    static_root: Option<Root>,
    static_source: Option<RootSource>,
}

impl UrlResolver {
    pub const fn new() -> Self {
        Self {
            site_root: None,
            static_root: None,
            static_source: None,
        }
    }

    /// Create a resolver with its site root (and derived static root) set.
    pub fn with_site_root(url: &str) -> Self {
        let mut resolver = Self::new();
        resolver.set_site_root(url);
        resolver
    }

    /// Set the site root.
    ///
    /// If no static root exists yet, derives one as `<site root>static/`.
    pub fn set_site_root(&mut self, url: &str) {
        let root = Root::new(url);
        if self.static_root.is_none() {
            self.static_root = Some(Root::new(&root.join(DEFAULT_STATIC_DIR)));
            self.static_source = Some(RootSource::Derived);
        }
        self.site_root = Some(root);
    }

    /// Set the static root, replacing any derived or explicit value.
    pub fn set_static_root(&mut self, url: &str) {
        self.static_root = Some(Root::new(url));
        self.static_source = Some(RootSource::Explicit);
    }

    /// Build a URL under the site root.
    pub fn site_url(&self, path: &str) -> Result<String> {
        Self::resolve(self.site_root.as_ref(), RootKind::Site, path)
    }

    /// Build a URL under the static root.
    pub fn static_url(&self, path: &str) -> Result<String> {
        Self::resolve(self.static_root.as_ref(), RootKind::Static, path)
    }

    /// Build a URL under the root selected by `kind`.
    pub fn url(&self, kind: RootKind, path: &str) -> Result<String> {
        match kind {
            RootKind::Site => self.site_url(path),
            RootKind::Static => self.static_url(path),
        }
    }

    #[inline]
    pub fn site_root(&self) -> Option<&Root> {
        self.site_root.as_ref()
    }

    #[inline]
    pub fn static_root(&self) -> Option<&Root> {
        self.static_root.as_ref()
    }

    #[inline]
    pub fn static_source(&self) -> Option<RootSource> {
        self.static_source
    }

    fn resolve(root: Option<&Root>, kind: RootKind, path: &str) -> Result<String> {
        root.map(|root| root.join(path))
            .ok_or(UrlError::UninitializedRoot(kind))
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_root_derives_static_root() {
        let urls = UrlResolver::with_site_root("http://example.com/app");

        assert_eq!(urls.site_root().unwrap().as_str(), "http://example.com/app/");
        assert_eq!(
            urls.static_root().unwrap().as_str(),
            "http://example.com/app/static/"
        );
        assert_eq!(urls.static_source(), Some(RootSource::Derived));
    }

    #[test]
    fn test_site_url_strips_leading_slash() {
        let urls = UrlResolver::with_site_root("http://example.com/app/");
        assert_eq!(urls.site_url("/foo/bar").unwrap(), "http://example.com/app/foo/bar");
    }

    #[test]
    fn test_explicit_static_root_wins() {
        let mut urls = UrlResolver::new();
        urls.set_site_root("http://example.com/");
        urls.set_static_root("http://cdn.example.com/assets/");

        assert_eq!(
            urls.static_url("img.png").unwrap(),
            "http://cdn.example.com/assets/img.png"
        );
        assert_eq!(urls.static_source(), Some(RootSource::Explicit));
    }

    #[test]
    fn test_explicit_static_root_replaces_derived() {
        let mut urls = UrlResolver::with_site_root("http://example.com/app");
        urls.set_static_root("http://cdn.example.com");

        // Derived value is discarded, not merged
        let root = urls.static_root().unwrap().as_str();
        assert_eq!(root, "http://cdn.example.com/");
        assert!(!root.contains("app"));
    }

    #[test]
    fn test_explicit_static_root_survives_site_root_change() {
        let mut urls = UrlResolver::new();
        urls.set_static_root("http://cdn.example.com/");
        urls.set_site_root("http://example.com/");
        urls.set_site_root("http://other.example.com/");

        assert_eq!(urls.static_url("a.css").unwrap(), "http://cdn.example.com/a.css");
        assert_eq!(urls.site_url("a").unwrap(), "http://other.example.com/a");
    }

    #[test]
    fn test_derived_static_root_not_rederived() {
        let mut urls = UrlResolver::with_site_root("http://first.example.com/");
        urls.set_site_root("http://second.example.com/");

        assert_eq!(
            urls.static_root().unwrap().as_str(),
            "http://first.example.com/static/"
        );
        assert_eq!(urls.site_root().unwrap().as_str(), "http://second.example.com/");
    }

    #[test]
    fn test_static_root_set_before_site_root() {
        let mut urls = UrlResolver::new();
        urls.set_static_root("/assets");

        assert_eq!(urls.static_url("/js/app.js").unwrap(), "/assets/js/app.js");
        assert_eq!(
            urls.site_url("x"),
            Err(UrlError::UninitializedRoot(RootKind::Site))
        );
    }

    #[test]
    fn test_empty_path_returns_root() {
        let urls = UrlResolver::with_site_root("http://example.com/app");
        assert_eq!(urls.site_url("").unwrap(), "http://example.com/app/");
        assert_eq!(urls.static_url("").unwrap(), "http://example.com/app/static/");
    }

    #[test]
    fn test_multiple_leading_slashes() {
        let urls = UrlResolver::with_site_root("http://example.com/");
        assert_eq!(urls.site_url("//cdn/x").unwrap(), "http://example.com//cdn/x");
    }

    #[test]
    fn test_uninitialized_roots_fail() {
        let urls = UrlResolver::new();
        assert_eq!(
            urls.site_url("/foo"),
            Err(UrlError::UninitializedRoot(RootKind::Site))
        );
        assert_eq!(
            urls.static_url("/foo"),
            Err(UrlError::UninitializedRoot(RootKind::Static))
        );
        assert_eq!(urls.static_source(), None);
    }

    #[test]
    fn test_url_by_kind() {
        let urls = UrlResolver::with_site_root("http://example.com");
        assert_eq!(urls.url(RootKind::Site, "a").unwrap(), "http://example.com/a");
        assert_eq!(
            urls.url(RootKind::Static, "a").unwrap(),
            "http://example.com/static/a"
        );
    }

    #[test]
    fn test_serialize_roots() {
        let urls = UrlResolver::with_site_root("http://example.com");
        let json = serde_json::to_value(&urls).unwrap();

        assert_eq!(json["site_root"], "http://example.com/");
        assert_eq!(json["static_root"], "http://example.com/static/");
        assert_eq!(json["static_source"], "derived");
    }
}
