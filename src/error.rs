//! Resolver error types.

use thiserror::Error;

use crate::resolver::RootKind;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, UrlError>;

/// Errors raised while resolving URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// A resolver was called before its root was configured.
    #[error("{0} root is not set, call set_{0}_root first")]
    UninitializedRoot(RootKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_error_display() {
        let err = UrlError::UninitializedRoot(RootKind::Site);
        assert_eq!(format!("{err}"), "site root is not set, call set_site_root first");

        let err = UrlError::UninitializedRoot(RootKind::Static);
        assert_eq!(
            format!("{err}"),
            "static root is not set, call set_static_root first"
        );
    }
}
