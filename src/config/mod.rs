//! URL root configuration from `urls.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # Config file search, tilde expansion
//! └── mod.rs     # UrlConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [site]
//! root = "http://example.com/app"                  # Site root
//! static_root = "https://cdn.example.com/assets"   # Optional, defaults to <root>static/
//! ```

mod error;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use util::{expand_tilde, find_config_file};

use crate::{UrlResolver, debug, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const DEFAULT_CONFIG_NAME: &str = "urls.toml";

// ============================================================================
// [site] section
// ============================================================================

/// `[site]` section: the two URL roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site root (e.g., "http://example.com/app").
    pub root: Option<String>,

    /// Static asset root. Derived from `root` when unset.
    pub static_root: Option<String>,
}

impl SiteSection {
    pub const ROOT: &str = "site.root";
    pub const STATIC_ROOT: &str = "site.static_root";

    /// Validate the section.
    ///
    /// # Checks
    /// - Configured roots must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.root.as_deref().is_some_and(is_blank) {
            diag.error(
                Self::ROOT,
                "site root is empty",
                Some("set it to a base URL, e.g.: \"https://example.com/\"".into()),
            );
        }

        if self.static_root.as_deref().is_some_and(is_blank) {
            diag.error(
                Self::STATIC_ROOT,
                "static root is empty",
                Some(format!("remove it to derive it from {}", Self::ROOT)),
            );
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing urls.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Path of the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// URL roots
    #[serde(default)]
    pub site: SiteSection,
}

impl UrlConfig {
    /// Load the config named by `--config`, searching upward from `start`.
    ///
    /// Only the default `urls.toml` may be missing. Any other name must
    /// resolve to a file. A leading `~` is expanded.
    pub fn load(start: &Path, requested: &Path) -> Result<Self, ConfigError> {
        let config = Self::discover(start, &expand_tilde(requested))?;
        if config.config_path.is_none() && requested != Path::new(DEFAULT_CONFIG_NAME) {
            return Err(ConfigError::NotFound(requested.to_path_buf()));
        }
        Ok(config)
    }

    /// Search upward from `start` for `config_name` and load it.
    ///
    /// A missing file yields an empty config.
    pub fn discover(start: &Path, config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(start, config_name) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("config"; "no {} found from {}", config_name.display(), start.display());
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Override roots with values given on the command line.
    pub fn apply_overrides(&mut self, site_root: Option<&str>, static_root: Option<&str>) {
        Self::update_option(&mut self.site.root, site_root);
        Self::update_option(&mut self.site.static_root, static_root);
    }

    /// Update config option if CLI value is provided.
    fn update_option(config_option: &mut Option<String>, cli_option: Option<&str>) {
        if let Some(option) = cli_option {
            *config_option = Some(option.to_string());
        }
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Build a resolver from the configured roots.
    ///
    /// The site root is applied first so an explicit static root always
    /// replaces the derived one.
    pub fn to_resolver(&self) -> UrlResolver {
        let mut resolver = UrlResolver::new();
        if let Some(root) = &self.site.root {
            resolver.set_site_root(root);
        }
        if let Some(root) = &self.site.static_root {
            resolver.set_static_root(root);
        }
        resolver
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> UrlConfig {
    let (parsed, ignored) = UrlConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
