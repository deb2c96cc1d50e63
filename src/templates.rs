//! HTML page layout.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every interpolated value is escaped; only formatter output is inserted
//! pre-escaped.
//!
//! ```text
//! <header>   site name · navigation (current entry marked)
//! <main>     <h1>title</h1> · formatted body · listing (section pages only)
//! <footer>   © year site name
//! ```

use crate::config::SiteConfig;
use crate::render::{Layout, PageView};
use crate::types::{ListingEntry, NavEntry};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../theme/style.css");

/// The built-in site layout.
#[derive(Debug, Clone)]
pub struct SiteTemplate {
    site_title: String,
    lang: String,
}

impl SiteTemplate {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            site_title: config.title.clone(),
            lang: config.lang.clone(),
        }
    }

    fn document_title(&self, page: &PageView<'_>) -> String {
        if page.url == "/" {
            self.site_title.clone()
        } else {
            format!("{} · {}", page.title, self.site_title)
        }
    }
}

impl Layout for SiteTemplate {
    fn render(&self, page: &PageView<'_>) -> String {
        let content = html! {
            (site_header(&self.site_title, page.navigation, page.url))
            main {
                article {
                    h1 { (page.title) }
                    (PreEscaped(page.content))
                }
                @if let Some(listing) = page.listing {
                    (render_listing(listing))
                }
            }
            footer.site-footer {
                "© " (page.year) " " (self.site_title)
            }
        };
        base_document(&self.document_title(page), &self.lang, content).into_string()
    }
}

fn base_document(title: &str, lang: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(site_title: &str, navigation: &[NavEntry], current_url: &str) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (site_title) }
            nav.site-nav {
                ul {
                    @for entry in navigation {
                        li class=[is_current(entry, current_url).then_some("current")] {
                            a href=(entry.url) { (entry.title) }
                        }
                    }
                }
            }
        }
    }
}

/// An entry is current on its own page and, except for Home, below it.
fn is_current(entry: &NavEntry, current_url: &str) -> bool {
    entry.url == current_url || (entry.url != "/" && current_url.starts_with(&entry.url))
}

fn render_listing(listing: &[ListingEntry]) -> Markup {
    html! {
        @if !listing.is_empty() {
            section.listing {
                ul {
                    @for entry in listing {
                        @let label = entry.date_label();
                        li {
                            a href=(entry.url) { (entry.title) }
                            @if !label.is_empty() {
                                " "
                                time datetime=(label) { (label) }
                            }
                        }
                    }
                }
            }
        }
    }
}
