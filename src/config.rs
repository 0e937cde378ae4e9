//! Site configuration module.
//!
//! Handles loading, validating, and resolving the site configuration. Values
//! come from three layers, later layers winning:
//!
//! ```text
//! stock defaults  →  <root>/config.toml  →  IMAGEKIT_URL (environment)
//! ```
//!
//! The environment is read exactly once, by [`load_config`], and the result is
//! an ordinary value passed to whoever needs it. Nothing downstream looks at
//! the environment again, so every URL built during a run shares one base URL.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [imagekit]
//! url = "https://ik.imagekit.io/your-account"  # overridden by IMAGEKIT_URL
//!
//! [site]
//! input = "src"
//! output = "_site"
//! includes = "_includes"
//! data = "_data"
//! template_formats = ["njk", "md", "html"]
//!
//! [[passthrough]]
//! from = "src/assets/images"
//! to = "images"
//!
//! [collections.pages]
//! root = "src/pages"
//! extension = "njk"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse; override just the values you want. Tables merge
//! key by key, arrays (such as `passthrough`) replace the default list as a
//! whole. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;
use tracing::{debug, info};

/// Fallback CDN endpoint when neither `config.toml` nor the environment set one.
pub const DEFAULT_IMAGEKIT_URL: &str = "https://ik.imagekit.io/your-account";

/// Environment variable holding the CDN endpoint.
pub const IMAGEKIT_URL_ENV: &str = "IMAGEKIT_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the site's stock layout. User config
/// files need only specify the values they want to override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// CDN settings for the image shortcodes.
    pub imagekit: ImageKitConfig,
    /// Directory layout handed to the templating engine.
    pub site: DirsConfig,
    /// Static files copied verbatim into the output directory.
    pub passthrough: Vec<PassthroughRule>,
    /// Glob-style collections.
    pub collections: CollectionsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            imagekit: ImageKitConfig::default(),
            site: DirsConfig::default(),
            passthrough: default_passthrough(),
            collections: CollectionsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.imagekit.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "imagekit.url must not be empty".into(),
            ));
        }
        if self.site.input.is_empty() || self.site.output.is_empty() {
            return Err(ConfigError::Validation(
                "site.input and site.output must not be empty".into(),
            ));
        }
        if self.site.input == self.site.output {
            return Err(ConfigError::Validation(
                "site.output must differ from site.input".into(),
            ));
        }
        if let Some(rule) = self.passthrough.iter().find(|r| r.from.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "passthrough rule with empty `from` (to = {:?})",
                rule.to
            )));
        }
        if let Some(to) = self
            .passthrough
            .iter()
            .filter_map(|r| r.to.as_deref())
            .find(|to| escapes_output(to))
        {
            return Err(ConfigError::Validation(format!(
                "passthrough `to` must stay inside site.output: {to}"
            )));
        }
        if self.collections.pages.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "collections.pages.extension must not start with a dot".into(),
            ));
        }
        Ok(())
    }

    /// Apply the `IMAGEKIT_URL` override.
    ///
    /// An unset or empty value leaves the configured URL alone.
    pub fn with_env_override(mut self, imagekit_url: Option<String>) -> Self {
        if let Some(url) = imagekit_url.filter(|u| !u.is_empty()) {
            info!(url = %url, "using IMAGEKIT_URL from environment");
            self.imagekit.url = url;
        }
        self
    }
}

/// True when `to` would resolve outside the output directory once joined.
fn escapes_output(to: &str) -> bool {
    Path::new(to)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
}

/// ImageKit CDN settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ImageKitConfig {
    /// URL endpoint of the ImageKit account, without a trailing slash.
    pub url: String,
}

impl Default for ImageKitConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_IMAGEKIT_URL.to_string(),
        }
    }
}

/// Directory layout of the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DirsConfig {
    /// Template and content sources, relative to the project root.
    pub input: String,
    /// Rendered site, relative to the project root.
    pub output: String,
    /// Layouts and partials, relative to `input`.
    pub includes: String,
    /// Global data files, relative to `input`.
    pub data: String,
    /// File extensions the templating engine renders.
    pub template_formats: Vec<String>,
}

impl Default for DirsConfig {
    fn default() -> Self {
        Self {
            input: "src".to_string(),
            output: "_site".to_string(),
            includes: "_includes".to_string(),
            data: "_data".to_string(),
            template_formats: vec!["njk".to_string(), "md".to_string(), "html".to_string()],
        }
    }
}

/// One passthrough copy rule.
///
/// `from` is relative to the project root. Without `to`, the file keeps its
/// path with the `site.input` prefix stripped (`src/robots.txt` →
/// `_site/robots.txt`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PassthroughRule {
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

fn default_passthrough() -> Vec<PassthroughRule> {
    vec![
        PassthroughRule {
            from: "src/assets/images".to_string(),
            to: Some("images".to_string()),
        },
        PassthroughRule {
            from: "src/assets/fonts".to_string(),
            to: Some("fonts".to_string()),
        },
        PassthroughRule {
            from: "src/robots.txt".to_string(),
            to: None,
        },
    ]
}

/// Collection definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionsConfig {
    pub pages: CollectionConfig,
}

/// A collection of every file with `extension` below `root`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionConfig {
    /// Directory searched recursively, relative to the project root.
    pub root: String,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            root: "src/pages".to_string(),
            extension: "njk".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config.toml, using stock defaults");
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    debug!(path = %config_path.display(), "loaded config.toml");
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    Ok(config)
}

/// Load the site configuration for a project root.
///
/// Merges `config.toml` on top of stock defaults, applies the
/// `IMAGEKIT_URL` environment override, and validates the result. This is
/// the only place the environment is consulted.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let config =
        resolve_config(base, overlay)?.with_env_override(std::env::var(IMAGEKIT_URL_ENV).ok());
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# ik-shortcodes configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# ImageKit
# ---------------------------------------------------------------------------
[imagekit]
# URL endpoint of your ImageKit account, without a trailing slash.
# The IMAGEKIT_URL environment variable (or .env entry) takes precedence.
url = "https://ik.imagekit.io/your-account"

# ---------------------------------------------------------------------------
# Directory layout
# ---------------------------------------------------------------------------
[site]
# Template and content sources, relative to the project root.
input = "src"
# Rendered site, relative to the project root.
output = "_site"
# Layouts and partials, relative to `input`.
includes = "_includes"
# Global data files, relative to `input`.
data = "_data"
# File extensions rendered by the templating engine.
template_formats = ["njk", "md", "html"]

# ---------------------------------------------------------------------------
# Passthrough copy
# ---------------------------------------------------------------------------
# Files and directories copied verbatim into the output directory.
# Without `to`, the path is kept with the input directory stripped.
# Listing any rule replaces this whole default list.
[[passthrough]]
from = "src/assets/images"
to = "images"

[[passthrough]]
from = "src/assets/fonts"
to = "fonts"

[[passthrough]]
from = "src/robots.txt"

# ---------------------------------------------------------------------------
# Collections
# ---------------------------------------------------------------------------
[collections.pages]
# Directory searched recursively for pages.
root = "src/pages"
# Page file extension, without the dot.
extension = "njk"
"##
}
