//! Section listings.
//!
//! A section's listing covers its immediate children only:
//!
//! 1. sibling documents (the section's own index is never among them),
//! 2. subdirectories that are themselves sections.
//!
//! Entries are then sorted by normalized date, newest first. Missing or
//! malformed dates normalize to the minimum date, so those entries sink to
//! the bottom. The sort is stable: ties keep enumeration order (documents
//! before subsections, each by file name).
//!
//! Index-less subdirectories and excluded directories never appear; the
//! latter were already dropped by the scan.

use crate::date::normalize_date;
use crate::paths;
use crate::scan::{ContentNode, Directory, Document};
use crate::types::ListingEntry;
use serde_yaml::Value;

/// Build the ordered listing for the section whose directory is `dir`.
pub fn build_listing(dir: &Directory) -> Vec<ListingEntry> {
    let documents = dir.children.iter().filter_map(|child| match child {
        ContentNode::Document(doc) => Some(entry_for(doc, &doc.stem, paths::page_url(&doc.rel_path))),
        _ => None,
    });
    let subsections = dir.children.iter().filter_map(|child| match child {
        ContentNode::SectionIndex(section) => Some(entry_for(
            &section.index,
            &section.dir.name,
            paths::section_url(&section.dir.rel_path),
        )),
        _ => None,
    });

    let mut listing: Vec<(ListingEntry, chrono::NaiveDate)> = documents
        .chain(subsections)
        .map(|entry| {
            let key = normalize_date(Some(&entry.date));
            (entry, key)
        })
        .collect();
    listing.sort_by(|(_, a), (_, b)| b.cmp(a));
    listing.into_iter().map(|(entry, _)| entry).collect()
}

fn entry_for(doc: &Document, default_title: &str, url: String) -> ListingEntry {
    ListingEntry {
        title: doc.metadata.title_or(default_title),
        date: doc
            .metadata
            .date
            .clone()
            .unwrap_or_else(|| Value::String(String::new())),
        url,
    }
}
