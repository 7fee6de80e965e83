//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional `config.toml` in the source root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Documentation"  # Suffix of every page <title>
//! docs_dir = "docs"             # Output subdirectory for generated pages
//! assets_dir = "assets"         # Copied verbatim to the output root
//!
//! [brand]
//! prefix = "Hive"               # Highlighted part of the header logo
//! name = "Pro"
//!
//! [[header_links]]
//! label = "Docs"
//! href = "index.html"           # Root-relative, external, or #fragment
//!
//! [sections.getting-started]
//! title = "Getting Started"
//! order = 1
//!
//! [processing]
//! max_processes = 4             # Max parallel render workers (omit for auto)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Tables merge key by key, so adding one section
//! keeps the stock ones:
//!
//! ```toml
//! [sections.tutorials]
//! title = "Tutorials"
//! order = 6
//! ```
//!
//! Arrays replace the stock value entirely; `header_links` is all or nothing.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Appended to every page title: `Install - Documentation`.
    pub site_title: String,
    /// Output subdirectory that mirrors the source tree.
    pub docs_dir: String,
    /// Source-root directory whose files are copied to the output root.
    pub assets_dir: String,
    /// Header logo text.
    pub brand: BrandConfig,
    /// Links in the header nav.
    pub header_links: Vec<HeaderLink>,
    /// Titles and ordering for top-level sections, keyed by directory name.
    pub sections: BTreeMap<String, SectionConfig>,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Documentation".to_string(),
            docs_dir: "docs".to_string(),
            assets_dir: "assets".to_string(),
            brand: BrandConfig::default(),
            header_links: default_header_links(),
            sections: default_sections(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_title must not be empty".into(),
            ));
        }
        let docs_dir = Path::new(&self.docs_dir);
        if docs_dir.is_absolute()
            || docs_dir
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(ConfigError::Validation(format!(
                "docs_dir must be a relative path without '..': {}",
                self.docs_dir
            )));
        }
        if let Some(link) = self.header_links.iter().find(|l| l.label.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "header_links entry for '{}' has an empty label",
                link.href
            )));
        }
        for (key, section) in &self.sections {
            if section.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "sections.{key}.title must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Header logo, rendered as `<span>{prefix}</span>{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    pub prefix: String,
    pub name: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            prefix: "Hive".to_string(),
            name: "Pro".to_string(),
        }
    }
}

/// One header nav entry. `href` is relative to the output root unless it is
/// an external URL or a `#fragment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderLink {
    pub label: String,
    pub href: String,
}

impl HeaderLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

fn default_header_links() -> Vec<HeaderLink> {
    vec![
        HeaderLink::new("Docs", "index.html"),
        HeaderLink::new("API", "docs/api-reference/overview.html"),
        HeaderLink::new("Community", "#community"),
        HeaderLink::new("GitHub", "#github"),
    ]
}

/// Display settings for one top-level section. Missing values fall back to
/// the title derived from the directory name and to the end of the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl SectionConfig {
    fn new(title: &str, order: i64) -> Self {
        Self {
            title: Some(title.to_string()),
            order: Some(order),
        }
    }
}

fn default_sections() -> BTreeMap<String, SectionConfig> {
    [
        ("getting-started", "Getting Started", 1),
        ("core-concepts", "Core Concepts", 2),
        ("guides", "Guides", 3),
        ("api-reference", "API Reference", 4),
        ("resources", "Resources", 5),
    ]
    .into_iter()
    .map(|(key, title, order)| (key.to_string(), SectionConfig::new(title, order)))
    .collect()
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
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
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the source root.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(root)?;
    tracing::debug!(
        root = %root.display(),
        has_config = overlay.is_some(),
        "resolving site config"
    );
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Docs Configuration
# =========================
#
# Place this file as config.toml in the root of your docs source directory.
# Every option is optional; the values below are the built-in defaults.
# Unknown keys are rejected.

# Suffix of every page title ("Install - Documentation").
site_title = "Documentation"

# Output subdirectory for generated pages. The source tree is mirrored below
# it: docs-src/guides/faq.md -> dist/docs/guides/faq.html
docs_dir = "docs"

# Directory in the source root whose files are copied to the output root.
# A styles.css, script.js or index.html here replaces the built-in one.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Header logo: <span>prefix</span>name
# ---------------------------------------------------------------------------
[brand]
prefix = "Hive"
name = "Pro"

# ---------------------------------------------------------------------------
# Header navigation. Plain paths are relative to the output root and are
# rewritten for each page's depth; URLs and #fragments are used as-is.
# Setting header_links replaces the whole list.
# ---------------------------------------------------------------------------
[[header_links]]
label = "Docs"
href = "index.html"

[[header_links]]
label = "API"
href = "docs/api-reference/overview.html"

[[header_links]]
label = "Community"
href = "#community"

[[header_links]]
label = "GitHub"
href = "#github"

# ---------------------------------------------------------------------------
# Sidebar sections, keyed by top-level directory name.
# Sections not listed here are titled from their directory name
# ("release-notes" -> "Release Notes") and sorted after all listed ones.
# ---------------------------------------------------------------------------
[sections.getting-started]
title = "Getting Started"
order = 1

[sections.core-concepts]
title = "Core Concepts"
order = 2

[sections.guides]
title = "Guides"
order = 3

[sections.api-reference]
title = "API Reference"
order = 4

[sections.resources]
title = "Resources"
order = 5

# ---------------------------------------------------------------------------
# Parallel rendering
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site_title, "Documentation");
        assert_eq!(config.docs_dir, "docs");
        assert_eq!(config.assets_dir, "assets");
        assert_eq!(config.brand.prefix, "Hive");
        assert_eq!(config.header_links.len(), 4);
    }

    #[test]
    fn default_sections_are_ordered() {
        let config = SiteConfig::default();
        let guides = &config.sections["guides"];
        assert_eq!(guides.title.as_deref(), Some("Guides"));
        assert_eq!(guides.order, Some(3));
        assert_eq!(
            config.sections["api-reference"].title.as_deref(),
            Some("API Reference")
        );
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
site_title = "Acme Docs"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site_title, "Acme Docs");
        assert_eq!(config.docs_dir, "docs");
    }

    #[test]
    fn section_without_order_parses() {
        let toml = r#"
[sections.tutorials]
title = "Tutorials"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.sections["tutorials"].order, None);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site_title, "Documentation");
        assert_eq!(config.sections.len(), 5);
    }

    #[test]
    fn load_config_merges_sections_with_stock() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[sections.tutorials]
title = "Tutorials"
order = 6

[sections.guides]
order = 10
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.sections.len(), 6);
        assert_eq!(config.sections["tutorials"].order, Some(6));
        // Partial override keeps the stock title
        assert_eq!(config.sections["guides"].title.as_deref(), Some("Guides"));
        assert_eq!(config.sections["guides"].order, Some(10));
    }

    #[test]
    fn header_links_replace_stock_list() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[[header_links]]
label = "Home"
href = "index.html"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(
            config.header_links,
            vec![HeaderLink::new("Home", "index.html")]
        );
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "site_title = [unclosed").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "site_titel = \"typo\"\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn unknown_section_key_rejected() {
        let toml = r#"
[sections.guides]
weight = 3
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_site_title() {
        let config = SiteConfig {
            site_title: "  ".into(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_docs_dir_parent_rejected() {
        let config = SiteConfig {
            docs_dir: "../outside".into(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_docs_dir_absolute_rejected() {
        let config = SiteConfig {
            docs_dir: "/var/www".into(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_docs_dir_allowed() {
        let config = SiteConfig {
            docs_dir: String::new(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_section_title() {
        let mut config = SiteConfig::default();
        config.sections.insert(
            "misc".into(),
            SectionConfig {
                title: Some(String::new()),
                order: None,
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_header_label() {
        let mut config = SiteConfig::default();
        config.header_links.push(HeaderLink::new("", "#x"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "docs_dir = \"../x\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_nested_tables() {
        let base: toml::Value = toml::from_str("[t]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[t]\ny = 5\nz = 6").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["t"]["x"].as_integer(), Some(1));
        assert_eq!(merged["t"]["y"].as_integer(), Some(5));
        assert_eq!(merged["t"]["z"].as_integer(), Some(6));
    }

    // =========================================================================
    // Threads and stock config
    // =========================================================================

    #[test]
    fn effective_threads_user_constrains_down() {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let config = ProcessingConfig {
            max_processes: Some(1),
        };
        assert_eq!(effective_threads(&config), 1);
        let config = ProcessingConfig {
            max_processes: Some(cores + 100),
        };
        assert_eq!(effective_threads(&config), cores);
    }

    #[test]
    fn effective_threads_zero_means_one() {
        let config = ProcessingConfig {
            max_processes: Some(0),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site_title, defaults.site_title);
        assert_eq!(config.docs_dir, defaults.docs_dir);
        assert_eq!(config.header_links, defaults.header_links);
        assert_eq!(config.sections, defaults.sections);
        assert_eq!(config.processing.max_processes, None);
    }

    #[test]
    fn stock_defaults_value_is_table() {
        let value = stock_defaults_value();
        assert!(value.is_table());
        assert!(value.get("sections").is_some_and(|s| s.is_table()));
    }
}
