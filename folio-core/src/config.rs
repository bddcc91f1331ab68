//! Site configuration.
//!
//! # Lookup order
//!
//! 1. An explicit `--config <path>`.
//! 2. `folio.yaml` in the working directory, if present.
//! 3. Built-in defaults: templates in `src`, output in `docs`, pages 1 through 42.
//!
//! ```yaml
//! template_dir: src
//! output_dir: docs
//! first_page: 1
//! last_page: 42
//! layout: _layout.html
//! titles:
//!   01.html: Getting Started
//! ```
//!
//! Relative directories in a config file are resolved against the file's
//! parent directory, so a config can be used from anywhere.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Page, PageIndex, PageRange};

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.yaml";

/// Everything a run needs to know about the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory the page templates are loaded from.
    pub template_dir: PathBuf,
    /// Directory the rendered pages are written to. Never created by folio.
    pub output_dir: PathBuf,
    pub first_page: u32,
    pub last_page: u32,
    /// Optional wrapper template, looked up in `template_dir`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Page titles keyed by file name (`01.html`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub titles: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("src"),
            output_dir: PathBuf::from("docs"),
            first_page: PageRange::DEFAULT_FIRST,
            last_page: PageRange::DEFAULT_LAST,
            layout: None,
            titles: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load and validate a config file.
    ///
    /// Returns `ConfigError::Io` if unreadable, `ConfigError::Parse` (with path +
    /// line context) if malformed YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: SiteConfig = if contents.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };
        if let Some(base) = path.parent() {
            config.template_dir = resolve(base, &config.template_dir);
            config.output_dir = resolve(base, &config.output_dir);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `<cwd>/folio.yaml` if it exists, else defaults.
    pub fn discover_at(cwd: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(&candidate);
        }
        let config = SiteConfig {
            template_dir: resolve(cwd, Path::new("src")),
            output_dir: resolve(cwd, Path::new("docs")),
            ..SiteConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject ranges and layouts that cannot produce a well-formed run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_page > self.last_page {
            return Err(ConfigError::InvalidRange {
                first: self.first_page,
                last: self.last_page,
            });
        }
        if let Some(layout) = &self.layout {
            if self.range().file_names().iter().any(|n| n == layout) {
                return Err(ConfigError::LayoutIsPage {
                    name: layout.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn range(&self) -> PageRange {
        PageRange::new(self.first_page, self.last_page)
    }

    /// Resolve a single page: its file name and display title.
    pub fn page(&self, index: PageIndex) -> Page {
        let name = index.file_name();
        let title = self
            .titles
            .get(&name)
            .cloned()
            .unwrap_or_else(|| index.stem());
        Page { index, name, title }
    }

    /// All pages of the range, ascending.
    pub fn pages(&self) -> Vec<Page> {
        self.range().iter().map(|i| self.page(i)).collect()
    }

    /// Path of the template for `name`.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.template_dir.join(name)
    }

    /// Path of the rendered output for `name`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

fn resolve(base: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() || base.as_os_str().is_empty() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_fixed_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.template_dir, PathBuf::from("src"));
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.range().len(), 42);
        assert!(config.layout.is_none());
    }

    #[test]
    fn title_falls_back_to_stem() {
        let mut config = SiteConfig::default();
        config
            .titles
            .insert("02.html".to_string(), "Selecting Text".to_string());
        assert_eq!(config.page(PageIndex(1)).title, "01");
        assert_eq!(config.page(PageIndex(2)).title, "Selecting Text");
    }

    #[test]
    fn discover_without_file_uses_defaults_under_cwd() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::discover_at(tmp.path(), None).unwrap();
        assert_eq!(config.template_dir, tmp.path().join("src"));
        assert_eq!(config.output_dir, tmp.path().join("docs"));
        assert_eq!(config.first_page, 1);
        assert_eq!(config.last_page, 42);
    }

    #[test]
    fn discover_picks_up_folio_yaml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(DEFAULT_CONFIG_FILE), "last_page: 3\n").unwrap();
        let config = SiteConfig::discover_at(tmp.path(), None).unwrap();
        assert_eq!(config.last_page, 3);
        assert_eq!(config.template_dir, tmp.path().join("src"));
    }

    #[test]
    fn empty_file_is_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.yaml");
        std::fs::write(&path, "").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.range(), PageRange::default());
    }

    #[test]
    fn layout_named_like_a_page_is_rejected() {
        let config = SiteConfig {
            layout: Some("05.html".to_string()),
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::LayoutIsPage { .. }), "got: {err}");
    }
}
