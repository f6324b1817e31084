//! Normalized base URL type.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::join::{append, normalize};

/// A base URL that always ends with `/`.
///
/// Invariants:
/// - Built only through [`normalize`], so the trailing `/` is guaranteed
/// - Never re-normalized after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root(Arc<str>);

impl Root {
    /// Create a root from any string, appending `/` if missing.
    pub fn new(url: &str) -> Self {
        Self(Arc::from(normalize(url)))
    }

    /// Join a relative path onto this root.
    #[inline]
    pub fn join(&self, path: &str) -> String {
        append(&self.0, path)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Root {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Root {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
