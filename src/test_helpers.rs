//! Shared test utilities for the pagewright test suite.
//!
//! Provides fixture setup and lookup helpers that work with scan-phase data
//! structures (`ContentTree`, `Section`, `Document`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let tree = scan(tmp.path(), &Exclusions::new(["_drafts"])).unwrap();
//!
//! let blog = find_section(&tree, "blog");
//! assert_eq!(child_names(&blog.dir)[0], "broken.md");
//!
//! let post = find_document(&tree, "blog/post1.md");
//! assert_eq!(post.title(), "First Post");
//! ```

use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::scan::{ContentNode, ContentTree, Directory, Document, Section};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Relative path with `/` separators, whatever the platform.
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

// =========================================================================
// Tree lookups, panicking with a clear message on miss
// =========================================================================

/// Find a section by its path relative to the content root (`""` for the
/// root). Panics if not found.
pub fn find_section<'a>(tree: &'a ContentTree, rel_path: &str) -> &'a Section {
    let sections = tree.sections();
    sections
        .iter()
        .find(|s| slash_path(&s.dir.rel_path) == rel_path)
        .copied()
        .unwrap_or_else(|| {
            let paths = section_paths(tree);
            panic!("section '{rel_path}' not found. Available: {paths:?}")
        })
}

/// Find a non-index document by its relative path. Panics if not found.
pub fn find_document<'a>(tree: &'a ContentTree, rel_path: &str) -> &'a Document {
    let mut docs = Vec::new();
    collect_documents(&tree.root, &mut docs);
    docs.iter()
        .find(|d| slash_path(&d.rel_path) == rel_path)
        .copied()
        .unwrap_or_else(|| {
            let paths: Vec<String> = docs.iter().map(|d| slash_path(&d.rel_path)).collect();
            panic!("document '{rel_path}' not found. Available: {paths:?}")
        })
}

fn collect_documents<'a>(node: &'a ContentNode, out: &mut Vec<&'a Document>) {
    match node {
        ContentNode::Document(doc) => out.push(doc),
        ContentNode::SectionIndex(section) => {
            for child in &section.dir.children {
                collect_documents(child, out);
            }
        }
        ContentNode::Directory(dir) => {
            for child in &dir.children {
                collect_documents(child, out);
            }
        }
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// File names of a directory's children in enumeration order.
pub fn child_names(dir: &Directory) -> Vec<String> {
    dir.children
        .iter()
        .map(|c| {
            c.rel_path()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect()
}

/// Relative paths of every section, depth-first.
pub fn section_paths(tree: &ContentTree) -> Vec<String> {
    tree.sections()
        .iter()
        .map(|s| slash_path(&s.dir.rel_path))
        .collect()
}

/// Every file under `root`, as sorted `/`-separated relative paths.
pub fn output_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.path().strip_prefix(root).ok().map(slash_path))
        .collect();
    files.sort();
    files
}
