//! Front matter extraction.
//!
//! A document may start with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: My Title
//! date: 2024-06-01
//! tags: [rust, notes]
//! ---
//! Markdown content...
//! ```
//!
//! Parsing never fails. A malformed block degrades to empty metadata and the
//! problem is reported through [`ParsedDocument::error`] so the caller can
//! print a diagnostic; the body is still everything after the closing fence.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use thiserror::Error;

const DELIMITER: &str = "---";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("front matter must be a mapping, found {0}")]
    NotAMapping(&'static str),
}

/// Metadata parsed from a document's front matter.
///
/// Only `title` and `date` are interpreted; every other key is kept in
/// `extra` untouched so templates can still reach it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl PageMetadata {
    /// The `title` key, or `default` when the key is missing or unusable.
    pub fn title_or(&self, default: &str) -> String {
        self.title.clone().unwrap_or_else(|| default.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.extra.is_empty()
    }
}

/// Result of splitting a document into metadata and body.
#[derive(Debug)]
pub struct ParsedDocument {
    pub metadata: PageMetadata,
    /// Body text with surrounding whitespace trimmed.
    pub body: String,
    /// Set when a front matter block was present but could not be used.
    pub error: Option<FrontMatterError>,
}

/// Split raw document text into front matter and body.
pub fn parse(text: &str) -> ParsedDocument {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some((block, body)) = split_front_matter(text) else {
        return ParsedDocument {
            metadata: PageMetadata::default(),
            body: text.trim().to_string(),
            error: None,
        };
    };

    let parsed = if block.trim().is_empty() {
        Ok(PageMetadata::default())
    } else {
        serde_yaml::from_str::<Value>(block)
            .map_err(FrontMatterError::from)
            .and_then(metadata_from_yaml)
    };
    let (metadata, error) = match parsed {
        Ok(metadata) => (metadata, None),
        Err(e) => (PageMetadata::default(), Some(e)),
    };

    ParsedDocument {
        metadata,
        body: body.trim().to_string(),
        error,
    }
}

/// Locate the front matter block.
///
/// Returns `(block, body)` when the first line is a delimiter and a second
/// delimiter line follows; `None` otherwise.
fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&text[start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn metadata_from_yaml(value: Value) -> Result<PageMetadata, FrontMatterError> {
    let mapping = match value {
        Value::Null => return Ok(PageMetadata::default()),
        Value::Mapping(mapping) => mapping,
        Value::Sequence(_) => return Err(FrontMatterError::NotAMapping("a sequence")),
        Value::Tagged(_) => return Err(FrontMatterError::NotAMapping("a tagged value")),
        _ => return Err(FrontMatterError::NotAMapping("a scalar")),
    };

    let mut metadata = PageMetadata::default();
    for (key, value) in mapping {
        let Some(key) = scalar_to_string(&key) else {
            continue;
        };
        match key.as_str() {
            "title" => metadata.title = scalar_to_string(&value),
            "date" => metadata.date = Some(value),
            _ => {
                metadata.extra.insert(key, value);
            }
        }
    }
    Ok(metadata)
}

/// Render a YAML scalar as text. Null and collections yield `None`.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
