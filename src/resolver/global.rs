//! Process-wide resolver with atomic update support.
//!
//! Uses `arc-swap` for lock-free reads. Setters go through `rcu`, so
//! concurrent writers never drop each other's updates.
//!
//! Prefer passing a [`UrlResolver`] explicitly. This handle exists for page
//! code that cannot thread one through.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use super::UrlResolver;
use crate::error::Result;

/// Global resolver storage.
pub static URLS: LazyLock<ResolverHandle> = LazyLock::new(ResolverHandle::new);

/// Shared, atomically replaceable [`UrlResolver`].
#[derive(Debug)]
pub struct ResolverHandle {
    inner: ArcSwap<UrlResolver>,
}

impl ResolverHandle {
    pub fn new() -> Self {
        Self::from_resolver(UrlResolver::new())
    }

    pub fn from_resolver(resolver: UrlResolver) -> Self {
        Self {
            inner: ArcSwap::from_pointee(resolver),
        }
    }

    /// Current resolver state.
    #[inline]
    pub fn load(&self) -> Arc<UrlResolver> {
        self.inner.load_full()
    }

    /// Replace the whole resolver.
    pub fn store(&self, resolver: UrlResolver) {
        self.inner.store(Arc::new(resolver));
    }

    /// Apply `f` to a copy of the current resolver and publish the result.
    pub fn update(&self, f: impl Fn(&mut UrlResolver)) {
        self.inner.rcu(|current| {
            let mut next = UrlResolver::clone(current);
            f(&mut next);
            next
        });
    }

    pub fn set_site_root(&self, url: &str) {
        self.update(|urls| urls.set_site_root(url));
    }

    pub fn set_static_root(&self, url: &str) {
        self.update(|urls| urls.set_static_root(url));
    }

    pub fn site_url(&self, path: &str) -> Result<String> {
        self.inner.load().site_url(path)
    }

    pub fn static_url(&self, path: &str) -> Result<String> {
        self.inner.load().static_url(path)
    }
}

impl Default for ResolverHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// free functions over the global handle
// ============================================================================

#[inline]
pub fn set_site_root(url: &str) {
    URLS.set_site_root(url);
}

#[inline]
pub fn set_static_root(url: &str) {
    URLS.set_static_root(url);
}

#[inline]
pub fn site_url(path: &str) -> Result<String> {
    URLS.site_url(path)
}

#[inline]
pub fn static_url(path: &str) -> Result<String> {
    URLS.static_url(path)
}

/// Snapshot of the global resolver.
#[inline]
pub fn snapshot() -> Arc<UrlResolver> {
    URLS.load()
}

/// Install a fully configured resolver (e.g. built from `urls.toml`).
#[inline]
pub fn install(resolver: UrlResolver) -> Arc<UrlResolver> {
    URLS.store(resolver);
    URLS.load()
}

/// Clear both roots.
#[inline]
pub fn reset() {
    URLS.store(UrlResolver::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UrlError;
    use crate::resolver::{RootKind, RootSource};

    #[test]
    fn test_handle_matches_value_semantics() {
        let handle = ResolverHandle::new();
        assert_eq!(
            handle.site_url("a"),
            Err(UrlError::UninitializedRoot(RootKind::Site))
        );

        handle.set_site_root("http://example.com/app");
        assert_eq!(handle.site_url("/a").unwrap(), "http://example.com/app/a");
        assert_eq!(
            handle.static_url("b.png").unwrap(),
            "http://example.com/app/static/b.png"
        );

        handle.set_static_root("http://cdn.example.com");
        assert_eq!(handle.static_url("b.png").unwrap(), "http://cdn.example.com/b.png");
        assert_eq!(handle.load().static_source(), Some(RootSource::Explicit));
    }

    #[test]
    fn test_snapshot_is_stable_after_update() {
        let handle = ResolverHandle::from_resolver(UrlResolver::with_site_root("http://a.com"));
        let before = handle.load();

        handle.store(UrlResolver::with_site_root("http://b.com"));

        assert_eq!(before.site_url("").unwrap(), "http://a.com/");
        assert_eq!(handle.site_url("").unwrap(), "http://b.com/");
    }

    #[test]
    fn test_concurrent_setters_keep_both_roots() {
        let handle = Arc::new(ResolverHandle::new());

        let threads: Vec<_> = (0..8)
            .map(|i| {
                let handle = Arc::clone(&handle);
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        handle.set_static_root("http://cdn.example.com/");
                    } else {
                        handle.set_site_root("http://example.com/");
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        let urls = handle.load();
        assert_eq!(urls.site_root().unwrap().as_str(), "http://example.com/");
        assert_eq!(urls.static_root().unwrap().as_str(), "http://cdn.example.com/");
        assert_eq!(urls.static_source(), Some(RootSource::Explicit));
    }

    #[test]
    fn test_global_functions() {
        // Only test touching the global handle
        install(UrlResolver::new());
        set_site_root("http://example.com/");
        set_static_root("http://cdn.example.com/assets/");

        assert_eq!(site_url("/foo").unwrap(), "http://example.com/foo");
        assert_eq!(
            static_url("img.png").unwrap(),
            "http://cdn.example.com/assets/img.png"
        );
        assert!(snapshot().site_root().is_some());

        reset();
        assert!(site_url("x").is_err());
    }
}
