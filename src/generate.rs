//! Page generation.
//!
//! Stage 2 of the build. Takes the scanned [`ContentTree`] and writes one
//! page per document:
//!
//! - **Section index** (`blog/index.md`): rendered with the section's listing
//!   and written to `blog/index.html`.
//! - **Standalone document** (`blog/post1.md`): rendered without a listing
//!   and written to `blog/post1/index.html`.
//!
//! Navigation is built once before the walk and handed unchanged to every
//! page. Existing files at an output location are overwritten.
//!
//! ## Output Structure
//!
//! ```text
//! build/
//! ├── index.html                 # content/index.md
//! ├── about/index.html           # content/about.md
//! ├── blog/
//! │   ├── index.html             # content/blog/index.md (+ listing)
//! │   └── post1/index.html       # content/blog/post1.md
//! └── static/                    # copy of the static directory
//! ```
//!
//! [`build`] runs the whole pipeline: scan, reset the output directory,
//! generate, copy static assets.

use crate::config::SiteConfig;
use crate::listing::build_listing;
use crate::nav::build_navigation;
use crate::paths;
use crate::render::RenderContext;
use crate::scan::{self, ContentNode, ContentTree, Diagnostic, ScanError};
use crate::types::{NavEntry, SectionSummary, SiteManifest};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Name of the static assets directory inside the output root.
pub const STATIC_DIR_NAME: &str = "static";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Static copy error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Output directory {output} would contain the content directory {content}")]
    OutputContainsSource { output: PathBuf, content: PathBuf },
}

/// One page written by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub source: PathBuf,
    pub output: PathBuf,
    pub url: String,
    pub title: String,
    /// Whether the page is a section index (rendered with a listing).
    pub is_section: bool,
}

/// Outcome of the static asset copy.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticCopy {
    Copied {
        from: PathBuf,
        to: PathBuf,
        files: usize,
    },
    /// The static directory does not exist; nothing was copied.
    Missing(PathBuf),
}

/// Everything a full build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub pages: Vec<GeneratedPage>,
    pub diagnostics: Vec<Diagnostic>,
    pub static_copy: StaticCopy,
}

impl BuildReport {
    pub fn section_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_section).count()
    }
}

/// Run the full build: scan `source`, recreate `output`, write every page,
/// then copy `static_dir` to `output/static`.
///
/// The content tree is scanned before the output directory is touched, so a
/// fatal scan error leaves the previous output in place.
pub fn build(
    source: &Path,
    output: &Path,
    static_dir: &Path,
    config: &SiteConfig,
    ctx: &RenderContext,
) -> Result<BuildReport, GenerateError> {
    let tree = scan::scan(source, &config.exclusions())?;
    check_output_location(source, output)?;
    reset_output(output)?;

    let pages = generate(&tree, ctx, output)?;
    let static_copy = copy_static(static_dir, output)?;

    Ok(BuildReport {
        pages,
        diagnostics: tree.diagnostics,
        static_copy,
    })
}

/// Navigation plus every section's listing, without rendering anything.
pub fn manifest(tree: &ContentTree) -> SiteManifest {
    let sections = tree
        .sections()
        .into_iter()
        .map(|section| SectionSummary {
            title: section.index.title(),
            url: paths::section_url(&section.dir.rel_path),
            source: section.index.source.clone(),
            listing: build_listing(&section.dir),
        })
        .collect();
    SiteManifest {
        navigation: build_navigation(&tree.root),
        sections,
    }
}

/// Render and write every page in the tree.
pub fn generate(
    tree: &ContentTree,
    ctx: &RenderContext,
    output_dir: &Path,
) -> Result<Vec<GeneratedPage>, GenerateError> {
    let navigation = build_navigation(&tree.root);
    let mut pages = Vec::new();
    walk(&tree.root, ctx, &navigation, output_dir, &mut pages)?;
    Ok(pages)
}

fn walk(
    node: &ContentNode,
    ctx: &RenderContext,
    navigation: &[NavEntry],
    output_dir: &Path,
    pages: &mut Vec<GeneratedPage>,
) -> Result<(), GenerateError> {
    match node {
        ContentNode::Document(doc) => {
            let title = doc.title();
            let url = paths::page_url(&doc.rel_path);
            let html = ctx.render_page(&title, &doc.body, &url, None, navigation);
            let output = paths::page_output(output_dir, &doc.rel_path);
            write_page(&output, &html)?;
            pages.push(GeneratedPage {
                source: doc.source.clone(),
                output,
                url,
                title,
                is_section: false,
            });
        }
        ContentNode::SectionIndex(section) => {
            let listing = build_listing(&section.dir);
            let title = section.index.title();
            let url = paths::section_url(&section.dir.rel_path);
            let html = ctx.render_page(
                &title,
                &section.index.body,
                &url,
                Some(&listing),
                navigation,
            );
            let output = paths::section_output(output_dir, &section.dir.rel_path);
            write_page(&output, &html)?;
            pages.push(GeneratedPage {
                source: section.index.source.clone(),
                output,
                url,
                title,
                is_section: true,
            });
            for child in &section.dir.children {
                walk(child, ctx, navigation, output_dir, pages)?;
            }
        }
        ContentNode::Directory(dir) => {
            for child in &dir.children {
                walk(child, ctx, navigation, output_dir, pages)?;
            }
        }
    }
    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_at(parent))?;
    }
    fs::write(path, html).map_err(io_at(path))
}

/// Copy `static_dir` to `output_dir/static`, replacing any previous copy.
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<StaticCopy, GenerateError> {
    if !static_dir.is_dir() {
        return Ok(StaticCopy::Missing(static_dir.to_path_buf()));
    }
    let dest = output_dir.join(STATIC_DIR_NAME);
    if dest.exists() {
        fs::remove_dir_all(&dest).map_err(io_at(&dest))?;
    }

    let mut files = 0;
    for entry in WalkDir::new(static_dir) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(static_dir) else {
            continue;
        };
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_at(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_at(entry.path()))?;
            files += 1;
        }
    }

    Ok(StaticCopy::Copied {
        from: static_dir.to_path_buf(),
        to: dest,
        files,
    })
}

/// Refuse to wipe an output directory that holds the content itself.
fn check_output_location(source: &Path, output: &Path) -> Result<(), GenerateError> {
    if !output.exists() {
        return Ok(());
    }
    let content = source.canonicalize().map_err(io_at(source))?;
    let out = output.canonicalize().map_err(io_at(output))?;
    if content.starts_with(&out) {
        return Err(GenerateError::OutputContainsSource {
            output: output.to_path_buf(),
            content: source.to_path_buf(),
        });
    }
    Ok(())
}

fn reset_output(output: &Path) -> Result<(), GenerateError> {
    if output.exists() {
        fs::remove_dir_all(output).map_err(io_at(output))?;
    }
    fs::create_dir_all(output).map_err(io_at(output))
}

fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> GenerateError + '_ {
    move |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Exclusions;
    use crate::render::tests::plain_context;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// The minimal blog site: home, about, and a blog with two dated posts.
    fn blog_site() -> TempDir {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "index.md", "---\ntitle: Home\n---\nWelcome");
        write(tmp.path(), "about.md", "---\ntitle: About\n---\nAbout me");
        write(tmp.path(), "blog/index.md", "---\ntitle: Blog\n---\nPosts");
        write(tmp.path(), "blog/post1.md", "---\ndate: 2024-01-01\n---\nOne");
        write(tmp.path(), "blog/post2.md", "---\ndate: 2024-06-01\n---\nTwo");
        tmp
    }

    fn generate_site(content: &Path, out: &Path) -> Vec<GeneratedPage> {
        let tree = scan::scan(content, &Exclusions::new(["_drafts"])).unwrap();
        generate(&tree, &plain_context(), out).unwrap()
    }

    #[test]
    fn pages_written_at_pretty_urls() {
        let content = blog_site();
        let out = TempDir::new().unwrap();
        generate_site(content.path(), out.path());

        assert_eq!(
            output_files(out.path()),
            vec![
                "about/index.html",
                "blog/index.html",
                "blog/post1/index.html",
                "blog/post2/index.html",
                "index.html",
            ]
        );
    }

    #[test]
    fn section_page_gets_listing() {
        let content = blog_site();
        let out = TempDir::new().unwrap();
        generate_site(content.path(), out.path());

        let blog = fs::read_to_string(out.path().join("blog/index.html")).unwrap();
        assert!(blog.contains("listing: post2, post1"));
        let post = fs::read_to_string(out.path().join("blog/post1/index.html")).unwrap();
        assert!(post.contains("listing: none"));
    }

    #[test]
    fn every_page_gets_the_same_navigation() {
        let content = blog_site();
        let out = TempDir::new().unwrap();
        let pages = generate_site(content.path(), out.path());

        for page in &pages {
            let html = fs::read_to_string(&page.output).unwrap();
            assert!(html.contains("nav: Home, About, Blog"), "{}", page.url);
        }
    }

    #[test]
    fn page_titles_default_to_stem() {
        let content = blog_site();
        let out = TempDir::new().unwrap();
        let pages = generate_site(content.path(), out.path());

        let post = pages.iter().find(|p| p.url == "/blog/post1/").unwrap();
        assert_eq!(post.title, "post1");
        assert!(!post.is_section);
    }

    #[test]
    fn body_goes_through_formatter() {
        let content = blog_site();
        let out = TempDir::new().unwrap();
        generate_site(content.path(), out.path());

        let about = fs::read_to_string(out.path().join("about/index.html")).unwrap();
        assert!(about.contains("content: <body>About me</body>"));
        assert!(about.contains("title: About"));
    }

    #[test]
    fn excluded_directory_produces_no_output() {
        let content = blog_site();
        write(content.path(), "_drafts/index.md", "---\ntitle: Drafts\n---\n");
        write(content.path(), "_drafts/wip.md", "wip");
        write(content.path(), "blog/_drafts/later.md", "later");
        let out = TempDir::new().unwrap();
        generate_site(content.path(), out.path());

        assert!(
            output_files(out.path())
                .iter()
                .all(|f| !f.contains("_drafts") && !f.contains("wip") && !f.contains("later"))
        );
    }

    #[test]
    fn documents_in_index_less_directories_still_rendered() {
        let content = blog_site();
        write(content.path(), "notes/scratch.md", "scratch");
        let out = TempDir::new().unwrap();
        generate_site(content.path(), out.path());

        assert!(out.path().join("notes/scratch/index.html").is_file());
        assert!(!out.path().join("notes/index.html").exists());
    }

    #[test]
    fn existing_output_is_overwritten() {
        let content = blog_site();
        let out = TempDir::new().unwrap();
        write(out.path(), "about/index.html", "stale");
        generate_site(content.path(), out.path());

        let about = fs::read_to_string(out.path().join("about/index.html")).unwrap();
        assert_ne!(about, "stale");
    }

    #[test]
    fn manifest_matches_generated_structure() {
        let content = blog_site();
        let tree = scan::scan(content.path(), &Exclusions::default()).unwrap();
        let manifest = manifest(&tree);

        let nav: Vec<&str> = manifest.navigation.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(nav, vec!["Home", "About", "Blog"]);

        let urls: Vec<&str> = manifest.sections.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["/", "/blog/"]);

        let blog: Vec<&str> = manifest.sections[1]
            .listing
            .iter()
            .map(|e| e.url.as_str())
            .collect();
        assert_eq!(blog, vec!["/blog/post2/", "/blog/post1/"]);
    }

    #[test]
    fn manifest_serializes_to_json() {
        let content = blog_site();
        let tree = scan::scan(content.path(), &Exclusions::default()).unwrap();
        let json = serde_json::to_value(manifest(&tree)).unwrap();

        assert_eq!(json["navigation"][0]["title"], "Home");
        assert_eq!(json["sections"][1]["listing"][0]["date"], "2024-06-01");
    }

    #[test]
    fn copy_static_replaces_previous_copy() {
        let assets = TempDir::new().unwrap();
        write(assets.path(), "style.css", "body {}");
        write(assets.path(), "img/logo.svg", "<svg/>");
        let out = TempDir::new().unwrap();
        write(out.path(), "static/old.css", "old");

        let result = copy_static(assets.path(), out.path()).unwrap();

        assert!(matches!(result, StaticCopy::Copied { files: 2, .. }));
        assert!(out.path().join("static/style.css").is_file());
        assert!(out.path().join("static/img/logo.svg").is_file());
        assert!(!out.path().join("static/old.css").exists());
    }

    #[test]
    fn copy_static_missing_directory_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let missing = tmp.path().join("static");

        let result = copy_static(&missing, out.path()).unwrap();
        assert_eq!(result, StaticCopy::Missing(missing));
        assert!(!out.path().join(STATIC_DIR_NAME).exists());
    }

    #[test]
    fn build_recreates_output_directory() {
        let content = blog_site();
        let out = TempDir::new().unwrap();
        write(out.path(), "leftover/index.html", "from a previous build");

        let report = build(
            content.path(),
            out.path(),
            &content.path().join("no-static"),
            &SiteConfig::default(),
            &plain_context(),
        )
        .unwrap();

        assert!(!out.path().join("leftover").exists());
        assert_eq!(report.pages.len(), 5);
        assert_eq!(report.section_count(), 2);
        assert!(matches!(report.static_copy, StaticCopy::Missing(_)));
    }

    #[test]
    fn build_refuses_output_containing_content() {
        let site = TempDir::new().unwrap();
        write(site.path(), "content/index.md", "home");

        let result = build(
            &site.path().join("content"),
            site.path(),
            &site.path().join("static"),
            &SiteConfig::default(),
            &plain_context(),
        );

        assert!(matches!(
            result,
            Err(GenerateError::OutputContainsSource { .. })
        ));
        assert!(site.path().join("content/index.md").is_file());
    }

    #[test]
    fn build_reports_diagnostics() {
        let content = blog_site();
        write(content.path(), "blog/bad.md", "---\ntitle: [\n---\nbody");
        let out = TempDir::new().unwrap();

        let report = build(
            content.path(),
            &out.path().join("site"),
            &content.path().join("static"),
            &SiteConfig::default(),
            &plain_context(),
        )
        .unwrap();

        assert_eq!(report.diagnostics.len(), 1);
        assert!(out.path().join("site/blog/bad/index.html").is_file());
    }

    #[test]
    fn build_missing_content_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let result = build(
            &tmp.path().join("content"),
            &tmp.path().join("build"),
            &tmp.path().join("static"),
            &SiteConfig::default(),
            &plain_context(),
        );
        assert!(matches!(result, Err(GenerateError::Scan(_))));
    }
}
