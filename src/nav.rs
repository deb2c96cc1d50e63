//! Site navigation.
//!
//! Navigation is built once per build from the content root's direct
//! children, after the fixed `Home → /` entry:
//!
//! - a top-level section contributes its index title, else its directory
//!   name capitalized;
//! - a top-level document contributes its title, else its stem capitalized;
//! - index-less directories contribute nothing.
//!
//! Entries keep the scan's sibling order (by file name). No date ordering
//! applies here.

use crate::paths;
use crate::scan::ContentNode;
use crate::types::NavEntry;

pub const HOME_TITLE: &str = "Home";
pub const HOME_URL: &str = "/";

pub fn build_navigation(root: &ContentNode) -> Vec<NavEntry> {
    let mut nav = vec![NavEntry::new(HOME_TITLE, HOME_URL)];
    let Some(dir) = root.directory() else {
        return nav;
    };

    for child in &dir.children {
        match child {
            ContentNode::SectionIndex(section) => nav.push(NavEntry::new(
                section.index.metadata.title_or(&capitalize(&section.dir.name)),
                paths::section_url(&section.dir.rel_path),
            )),
            ContentNode::Document(doc) => nav.push(NavEntry::new(
                doc.metadata.title_or(&capitalize(&doc.stem)),
                paths::page_url(&doc.rel_path),
            )),
            ContentNode::Directory(_) => {}
        }
    }
    nav
}

/// First character uppercased, the rest lowercased (`blog` → `Blog`,
/// `myPage` → `Mypage`).
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
