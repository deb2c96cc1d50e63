//! Derived site structures shared by the listing, navigation, rendering and
//! output modules.
//!
//! All of them are serializable so `pagewright scan` can dump the site structure
//! as JSON.

use crate::frontmatter::scalar_to_string;
use serde::Serialize;
use serde_yaml::Value;
use std::path::PathBuf;

/// One child page or subsection in a section's listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingEntry {
    pub title: String,
    /// Raw front matter date; an empty string when the key is missing.
    pub date: Value,
    pub url: String,
}

impl ListingEntry {
    /// The date as written, for display. Empty when absent.
    pub fn date_label(&self) -> String {
        scalar_to_string(&self.date).unwrap_or_default()
    }
}

/// One site-wide navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub title: String,
    pub url: String,
}

impl NavEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A section and its ordered listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub title: String,
    pub url: String,
    pub source: PathBuf,
    pub listing: Vec<ListingEntry>,
}

/// The derived structure of a site: what `check` prints and `scan` dumps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteManifest {
    pub navigation: Vec<NavEntry>,
    pub sections: Vec<SectionSummary>,
}
