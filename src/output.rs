//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes the lines out. Format functions are pure, so
//! the console output is unit-tested like everything else.
//!
//! ## Check
//!
//! ```text
//! Navigation
//! 001 Home → /
//! 002 About → /about/
//! 003 Blog → /blog/
//!
//! Sections
//! 001 Blog → /blog/
//!     001 Second Post (2024-06-01) → /blog/post2/
//!     002 First Post (2024-01-01) → /blog/post1/
//!     003 Undated Post → /blog/post3/
//! ```
//!
//! ## Build
//!
//! ```text
//! content/about.md → build/about/index.html
//! content/blog/index.md → build/blog/index.html
//! Static: static → build/static (3 files)
//! Built 5 pages (2 sections) → build
//! ```
//!
//! Diagnostics go to stderr as `warning: <path>: <message>`.

use crate::generate::{BuildReport, StaticCopy};
use crate::scan::Diagnostic;
use crate::types::{ListingEntry, SiteManifest};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn listing_line(index: usize, entry: &ListingEntry) -> String {
    let label = entry.date_label();
    if label.is_empty() {
        format!("    {} {} \u{2192} {}", format_index(index), entry.title, entry.url)
    } else {
        format!(
            "    {} {} ({}) \u{2192} {}",
            format_index(index),
            entry.title,
            label,
            entry.url
        )
    }
}

pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .map(|d| format!("warning: {}: {}", d.path.display(), d.message))
        .collect()
}

pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for line in format_diagnostics(diagnostics) {
        eprintln!("{}", line);
    }
}

/// Format the site inventory: navigation, then every section's listing.
pub fn format_check_output(manifest: &SiteManifest) -> Vec<String> {
    let mut lines = vec!["Navigation".to_string()];
    for (i, entry) in manifest.navigation.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            entry.title,
            entry.url
        ));
    }

    lines.push(String::new());
    lines.push("Sections".to_string());
    for (i, section) in manifest.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            section.title,
            section.url
        ));
        for (j, entry) in section.listing.iter().enumerate() {
            lines.push(listing_line(j + 1, entry));
        }
    }
    lines
}

pub fn print_check_output(manifest: &SiteManifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}

/// Format build results: one line per page, the static copy, a summary.
pub fn format_build_output(report: &BuildReport, output_dir: &Path) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .map(|page| {
            format!(
                "{} \u{2192} {}",
                page.source.display(),
                page.output.display()
            )
        })
        .collect();

    lines.push(match &report.static_copy {
        StaticCopy::Copied { from, to, files } => format!(
            "Static: {} \u{2192} {} ({} files)",
            from.display(),
            to.display(),
            files
        ),
        StaticCopy::Missing(path) => format!("Static: {} not found, skipped", path.display()),
    });

    lines.push(format!(
        "Built {} pages ({} sections) \u{2192} {}",
        report.pages.len(),
        report.section_count(),
        output_dir.display()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport, output_dir: &Path) {
    for line in format_build_output(report, output_dir) {
        println!("{}", line);
    }
}
