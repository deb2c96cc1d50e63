//! Content tree enumeration.
//!
//! Stage 1 of the build. Walks the content root once and produces an owned
//! [`ContentTree`] in which every node already knows what it is:
//!
//! ```text
//! content/                     # Directory, or SectionIndex if it has index.md
//! ├── config.toml              # ignored (not a document)
//! ├── index.md                 # the root section's index
//! ├── about.md                 # Document → /about/
//! ├── blog/                    # SectionIndex → /blog/
//! │   ├── index.md
//! │   ├── post1.md             # Document → /blog/post1/
//! │   └── series/              # SectionIndex → /blog/series/
//! │       └── index.md
//! ├── notes/                   # Directory (no index): not navigated or listed,
//! │   └── scratch.md           #   but its documents are still pages
//! └── _drafts/                 # excluded: never read
//! ```
//!
//! ## Rules
//!
//! - A document is a file with an `md` extension (ASCII case-insensitive).
//! - A directory is a section iff it directly contains a document whose stem
//!   is `index` (ASCII case-insensitive).
//! - Directories named in the exclusion set are skipped at every depth.
//! - Dot-prefixed entries are skipped.
//! - Symlinked directories are never descended into (reported as a
//!   diagnostic); symlinked documents are read like any other file.
//! - Siblings are ordered by file name, so every derived structure
//!   (navigation, listings, traversal) is deterministic.
//!
//! Each document's front matter is parsed exactly once here. Malformed front
//! matter never fails the scan; it is recorded as a [`Diagnostic`].

use crate::config::Exclusions;
use crate::frontmatter::{self, PageMetadata};
use serde::Serialize;
use std::fs::{self, FileType};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DOCUMENT_EXTENSION: &str = "md";
pub const INDEX_STEM: &str = "index";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Content root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A non-fatal problem found while scanning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub message: String,
}

/// The enumerated content tree plus everything worth warning about.
#[derive(Debug)]
pub struct ContentTree {
    pub root: ContentNode,
    pub diagnostics: Vec<Diagnostic>,
}

/// A single parsed document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Location on disk.
    pub source: PathBuf,
    /// Path relative to the content root, e.g. `blog/post1.md`.
    pub rel_path: PathBuf,
    /// File name without extension.
    pub stem: String,
    pub metadata: PageMetadata,
    /// Body text, front matter removed, whitespace trimmed.
    pub body: String,
}

impl Document {
    /// Page title: the `title` key, else the file stem.
    pub fn title(&self) -> String {
        self.metadata.title_or(&self.stem)
    }
}

/// A directory and its enumerated children.
#[derive(Debug, Clone)]
pub struct Directory {
    pub source: PathBuf,
    /// Path relative to the content root; empty for the root itself.
    pub rel_path: PathBuf,
    pub name: String,
    pub children: Vec<ContentNode>,
}

/// A directory designated a section by its index document.
#[derive(Debug, Clone)]
pub struct Section {
    pub dir: Directory,
    /// The section's `index` document; not repeated in `dir.children`.
    pub index: Document,
}

#[derive(Debug, Clone)]
pub enum ContentNode {
    Document(Document),
    SectionIndex(Section),
    Directory(Directory),
}

impl ContentNode {
    /// The directory behind a section or plain directory node.
    pub fn directory(&self) -> Option<&Directory> {
        match self {
            ContentNode::SectionIndex(section) => Some(&section.dir),
            ContentNode::Directory(dir) => Some(dir),
            ContentNode::Document(_) => None,
        }
    }

    pub fn rel_path(&self) -> &Path {
        match self {
            ContentNode::Document(doc) => &doc.rel_path,
            ContentNode::SectionIndex(section) => &section.dir.rel_path,
            ContentNode::Directory(dir) => &dir.rel_path,
        }
    }
}

impl ContentTree {
    /// Every section in the tree, depth-first in sibling order.
    pub fn sections(&self) -> Vec<&Section> {
        let mut sections = Vec::new();
        collect_sections(&self.root, &mut sections);
        sections
    }

    /// Every document that becomes a page, index documents included.
    pub fn page_count(&self) -> usize {
        count_pages(&self.root)
    }
}

fn collect_sections<'a>(node: &'a ContentNode, out: &mut Vec<&'a Section>) {
    if let ContentNode::SectionIndex(section) = node {
        out.push(section);
    }
    if let Some(dir) = node.directory() {
        for child in &dir.children {
            collect_sections(child, out);
        }
    }
}

fn count_pages(node: &ContentNode) -> usize {
    match node {
        ContentNode::Document(_) => 1,
        ContentNode::SectionIndex(section) => {
            1 + section.dir.children.iter().map(count_pages).sum::<usize>()
        }
        ContentNode::Directory(dir) => dir.children.iter().map(count_pages).sum(),
    }
}

/// Enumerate the content tree rooted at `root`.
pub fn scan(root: &Path, exclusions: &Exclusions) -> Result<ContentTree, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    let mut diagnostics = Vec::new();
    let root_node = scan_directory(root, Path::new(""), exclusions, &mut diagnostics)?;
    Ok(ContentTree {
        root: root_node,
        diagnostics,
    })
}

fn scan_directory(
    path: &Path,
    rel_path: &Path,
    exclusions: &Exclusions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<ContentNode, ScanError> {
    let mut index: Option<Document> = None;
    let mut children = Vec::new();

    for (entry, file_type) in collect_entries(path)? {
        let name = file_name(&entry);
        let child_rel = rel_path.join(&name);

        if file_type.is_symlink() && entry.is_dir() {
            if exclusions.contains(&name) {
                continue;
            }
            diagnostics.push(Diagnostic {
                path: entry.clone(),
                message: "symlinked directory not followed".to_string(),
            });
        } else if file_type.is_dir() {
            if exclusions.contains(&name) {
                continue;
            }
            children.push(scan_directory(&entry, &child_rel, exclusions, diagnostics)?);
        } else if is_document(&entry) {
            let doc = read_document(&entry, child_rel, diagnostics)?;
            if !is_index(&doc) {
                children.push(ContentNode::Document(doc));
            } else if index.is_none() {
                index = Some(doc);
            } else {
                diagnostics.push(Diagnostic {
                    path: entry.clone(),
                    message: "duplicate index document ignored".to_string(),
                });
            }
        }
    }

    let dir = Directory {
        source: path.to_path_buf(),
        rel_path: rel_path.to_path_buf(),
        name: file_name(path),
        children,
    };

    Ok(match index {
        Some(index) => ContentNode::SectionIndex(Section { dir, index }),
        None => ContentNode::Directory(dir),
    })
}

/// Sorted, non-hidden entries of `path` with their unfollowed file types.
fn collect_entries(path: &Path) -> Result<Vec<(PathBuf, FileType)>, ScanError> {
    let io_err = |source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(path)
        .map_err(io_err)?
        .map(|e| e.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;

    entries.retain(|(p, _)| !file_name(p).starts_with('.'));
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(entries)
}

fn read_document(
    path: &Path,
    rel_path: PathBuf,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Document, ScanError> {
    let text = fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = frontmatter::parse(&text);
    if let Some(error) = parsed.error {
        diagnostics.push(Diagnostic {
            path: path.to_path_buf(),
            message: error.to_string(),
        });
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Document {
        source: path.to_path_buf(),
        rel_path,
        stem,
        metadata: parsed.metadata,
        body: parsed.body,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_document(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}

fn is_index(doc: &Document) -> bool {
    doc.stem.eq_ignore_ascii_case(INDEX_STEM)
}
