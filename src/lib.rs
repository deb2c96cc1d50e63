//! # Pagewright
//!
//! A small static site generator for content trees. Your filesystem is the
//! data source: directories with an `index.md` become sections, every other
//! markdown file becomes a page, and YAML front matter supplies titles and
//! dates.
//!
//! # Architecture: Scan, Then Generate
//!
//! ```text
//! 1. Scan      content/    →  ContentTree   (filesystem → typed tree, front matter parsed once)
//! 2. Generate  ContentTree →  build/        (navigation + listings → HTML pages)
//! ```
//!
//! The scan produces a complete, owned snapshot of the tree before anything is
//! written. Navigation and every listing are derived from that snapshot, so
//! they always agree with each other and with the set of generated pages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: walks the content directory into a [`scan::ContentTree`] |
//! | [`generate`] | Stage 2: walks the tree and writes one page per document |
//! | [`frontmatter`] | Splits a document into YAML metadata and body |
//! | [`date`] | Turns raw front matter dates into sortable calendar dates |
//! | [`paths`] | Maps content paths to public URLs and output files |
//! | [`listing`] | Builds a section's date-sorted listing |
//! | [`nav`] | Builds the site-wide navigation from top-level content |
//! | [`render`] | `Formatter` and `Layout` traits plus the markdown formatter |
//! | [`templates`] | The built-in maud page layout |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | Derived structures shared between stages (`NavEntry`, `ListingEntry`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Pretty URLs
//!
//! Every page is written as `index.html` inside a directory named after it:
//! `blog/post1.md` becomes `build/blog/post1/index.html`, served at
//! `/blog/post1/`. Sections keep their own directory: `blog/index.md` becomes
//! `build/blog/index.html` at `/blog/`.
//!
//! ## Bad Front Matter Is Not Fatal
//!
//! A document with malformed YAML still becomes a page. Its metadata is
//! empty, so the title falls back to the file name, and the problem is
//! reported as a warning. Only filesystem failures stop a build.
//!
//! ## Rendering Behind Traits
//!
//! The generator never talks to pulldown-cmark or maud directly. It receives a
//! [`render::RenderContext`] holding a [`render::Formatter`] and a
//! [`render::Layout`], which keeps the tree walk testable with plain-text
//! stand-ins.

pub mod config;
pub mod date;
pub mod frontmatter;
pub mod generate;
pub mod listing;
pub mod nav;
pub mod output;
pub mod paths;
pub mod render;
pub mod scan;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
