//! Pretty-URL mapping from content paths to output locations.
//!
//! Every page is written as `<dir>/index.html` so its URL carries no
//! extension:
//!
//! | Content               | URL             | Output file                  |
//! |-----------------------|-----------------|------------------------------|
//! | `index.md`            | `/`             | `build/index.html`           |
//! | `about.md`            | `/about/`       | `build/about/index.html`     |
//! | `blog/index.md`       | `/blog/`        | `build/blog/index.html`      |
//! | `blog/post1.md`       | `/blog/post1/`  | `build/blog/post1/index.html`|
//!
//! All functions here are pure; nothing touches the filesystem.

use std::path::{Component, Path, PathBuf};

pub const PAGE_EXTENSION: &str = "html";

/// URL of the section whose directory is `rel_dir` (empty or `.` for the root).
pub fn section_url(rel_dir: &Path) -> String {
    url_from_segments(&segments(rel_dir))
}

/// URL of the standalone document at `rel_doc` (e.g. `blog/post1.md`).
pub fn page_url(rel_doc: &Path) -> String {
    url_from_segments(&page_segments(rel_doc))
}

/// Output file for the section whose directory is `rel_dir`.
pub fn section_output(output_root: &Path, rel_dir: &Path) -> PathBuf {
    output_file(output_root, &segments(rel_dir))
}

/// Output file for the standalone document at `rel_doc`.
pub fn page_output(output_root: &Path, rel_doc: &Path) -> PathBuf {
    output_file(output_root, &page_segments(rel_doc))
}

/// Normal path components as strings; `.` and empty paths yield nothing.
fn segments(rel: &Path) -> Vec<String> {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Parent directory segments followed by the document stem.
fn page_segments(rel_doc: &Path) -> Vec<String> {
    let mut segs = rel_doc.parent().map(segments).unwrap_or_default();
    if let Some(stem) = rel_doc.file_stem() {
        segs.push(stem.to_string_lossy().into_owned());
    }
    segs
}

fn url_from_segments(segs: &[String]) -> String {
    if segs.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segs.join("/"))
    }
}

fn output_file(output_root: &Path, segs: &[String]) -> PathBuf {
    let mut path = output_root.to_path_buf();
    path.extend(segs);
    path.push(format!("index.{PAGE_EXTENSION}"));
    path
}
