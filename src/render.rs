//! Rendering collaborators.
//!
//! Turning a document into a page takes two steps, each behind a trait so the
//! build never depends on a concrete engine:
//!
//! 1. [`Formatter`]: body text → markup (production: [`Markdown`], pulldown-cmark)
//! 2. [`Layout`]: markup + page context → final page (production:
//!    [`SiteTemplate`](crate::templates::SiteTemplate), maud)
//!
//! A [`RenderContext`] owns one of each plus the build year. It is built once
//! per build and passed by reference to the generator; there is no global
//! rendering state.

use crate::config::{MarkdownConfig, SiteConfig};
use crate::templates::SiteTemplate;
use crate::types::{ListingEntry, NavEntry};
use chrono::Datelike;
use pulldown_cmark::{Options, Parser, html as md_html};

/// Converts a document body into markup.
pub trait Formatter {
    fn format(&self, body: &str) -> String;
}

/// Everything a layout needs to produce one page.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub title: &'a str,
    /// Formatter output; inserted without escaping.
    pub content: &'a str,
    pub year: i32,
    /// `Some` for section index pages only.
    pub listing: Option<&'a [ListingEntry]>,
    pub navigation: &'a [NavEntry],
    /// URL of the page being rendered.
    pub url: &'a str,
}

/// Wraps formatted content into a complete page.
pub trait Layout {
    fn render(&self, page: &PageView<'_>) -> String;
}

/// CommonMark with the extensions enabled in `[markdown]`.
#[derive(Debug, Clone)]
pub struct Markdown {
    options: Options,
}

impl Markdown {
    pub fn new(config: &MarkdownConfig) -> Self {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, config.tables);
        options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
        options.set(Options::ENABLE_DEFINITION_LIST, config.definition_lists);
        options.set(Options::ENABLE_HEADING_ATTRIBUTES, config.heading_attributes);
        options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, config.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, config.smart_punctuation);
        Self { options }
    }
}

impl Formatter for Markdown {
    fn format(&self, body: &str) -> String {
        let parser = Parser::new_ext(body, self.options);
        let mut html = String::new();
        md_html::push_html(&mut html, parser);
        html
    }
}

pub struct RenderContext {
    formatter: Box<dyn Formatter>,
    layout: Box<dyn Layout>,
    year: i32,
}

impl RenderContext {
    pub fn new(formatter: Box<dyn Formatter>, layout: Box<dyn Layout>, year: i32) -> Self {
        Self {
            formatter,
            layout,
            year,
        }
    }

    /// Production context: markdown bodies, the site template, this year.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            Box::new(Markdown::new(&config.markdown)),
            Box::new(SiteTemplate::new(config)),
            chrono::Local::now().year(),
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Format `body` and lay it out as a complete page.
    pub fn render_page(
        &self,
        title: &str,
        body: &str,
        url: &str,
        listing: Option<&[ListingEntry]>,
        navigation: &[NavEntry],
    ) -> String {
        let content = self.formatter.format(body);
        self.layout.render(&PageView {
            title,
            content: &content,
            year: self.year,
            listing,
            navigation,
            url,
        })
    }
}
