//! siteroot - build site and static asset URLs from configured roots.
//!
//! A [`UrlResolver`] holds two optional base URLs: the site root and the
//! static root. Setting the site root also derives a default static root
//! (`<site root>static/`) unless one is already set.
//!
//! ```
//! use siteroot::UrlResolver;
//!
//! let mut urls = UrlResolver::new();
//! urls.set_site_root("http://example.com/");
//! urls.set_static_root("http://cdn.example.com/assets/");
//!
//! assert_eq!(urls.site_url("/about").unwrap(), "http://example.com/about");
//! assert_eq!(urls.static_url("img.png").unwrap(), "http://cdn.example.com/assets/img.png");
//! ```
//!
//! | Module     | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `resolver` | `UrlResolver`, `Root`, join rules, global handle |
//! | `config`   | `urls.toml` loading and validation              |
//! | `error`    | `UrlError`                                      |
//! | `logger`   | `log!` / `debug!` macros                        |

pub mod config;
pub mod error;
pub mod logger;
pub mod resolver;

pub use config::{ConfigError, UrlConfig};
pub use error::UrlError;
pub use resolver::{Root, RootKind, RootSource, UrlResolver, append, normalize};
