//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` in the content
//! root. Every key has a default, so a site with no config file builds with
//! stock settings.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "My Site"         # Site name (header, <title> suffix, footer)
//! lang = "en"               # <html lang> attribute
//! exclude = ["_drafts"]     # Directory names hidden at every depth
//!
//! [markdown]
//! tables = true
//! footnotes = true
//! definition_lists = true
//! heading_attributes = true
//! strikethrough = false
//! tasklists = false
//! smart_punctuation = false
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
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
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name, shown in the header and footer of every page.
    pub title: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Directory names that are never read, listed, navigated or emitted.
    pub exclude: Vec<String>,
    /// Markdown extensions enabled for page bodies.
    pub markdown: MarkdownConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            lang: "en".to_string(),
            exclude: vec!["_drafts".to_string()],
            markdown: MarkdownConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        for name in &self.exclude {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "exclude entries must not be empty".into(),
                ));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ConfigError::Validation(format!(
                    "exclude entry '{name}' must be a plain directory name"
                )));
            }
        }
        Ok(())
    }

    pub fn exclusions(&self) -> Exclusions {
        Exclusions::new(self.exclude.iter().cloned())
    }
}

/// Markdown extension switches, mapped onto pulldown-cmark options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub footnotes: bool,
    pub definition_lists: bool,
    pub heading_attributes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub smart_punctuation: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            definition_lists: true,
            heading_attributes: true,
            strikethrough: false,
            tasklists: false,
            smart_punctuation: false,
        }
    }
}

/// The set of directory names hidden from the build.
///
/// Matching is by exact directory name and applies at every depth of the
/// content tree, not only the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions(BTreeSet<String>);

impl Exclusions {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

/// Load `config.toml` from the content root.
///
/// Returns the stock defaults if the file does not exist. A file that exists
/// but fails to parse or validate is an error.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented `config.toml` with every option set to its default.
pub fn stock_config_toml() -> &'static str {
    r#"# pagewright site configuration
#
# Place this file in the content root. Every key is optional;
# the values below are the defaults.

# Site name, shown in the header, the <title> suffix and the footer.
title = "My Site"

# Value of the <html lang> attribute.
lang = "en"

# Directory names that are never read, listed, navigated or emitted.
# Matching is by name at every depth of the content tree.
exclude = ["_drafts"]

# Markdown extensions for page bodies.
[markdown]
tables = true
footnotes = true
definition_lists = true
heading_attributes = true
strikethrough = false
tasklists = false
smart_punctuation = false
"#
}
