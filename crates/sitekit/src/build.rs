// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Site generation.
//!
//! `build` loads the config and content, renders every route through
//! the layouts, writes the HTML tree under the output directory, and
//! copies static assets alongside it. `check` runs the same loading
//! and validation without writing anything.
//!
//! Routes:
//! - `index.md` renders to `index.html` and serves `/`
//! - any other page renders to `<slug>/index.html`
//! - the blog index is always generated at `blog/index.html`
//! - posts render to `blog/<slug>/index.html`

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::content::{self, Content};
use crate::error::{Error, Result};
use crate::head::PageHead;
use crate::layouts::{self, LayoutContext};
use crate::overrides::Overrides;

/// Input and output locations for one build.
#[derive(Debug, Clone)]
pub struct BuildParams {
    pub config: PathBuf,
    pub content: PathBuf,
    pub static_dir: Option<PathBuf>,
    pub out: PathBuf,
}

/// What a build produced, plus any validation warnings.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: usize,
    pub posts: usize,
    pub assets: usize,
    pub warnings: Vec<String>,
}

/// Build the site, stamping footers with today's date.
pub fn build(params: &BuildParams, overrides: &Overrides) -> Result<BuildReport> {
    build_with_date(params, overrides, Local::now().date_naive())
}

/// Build the site as of a fixed date.
pub fn build_with_date(
    params: &BuildParams,
    overrides: &Overrides,
    today: NaiveDate,
) -> Result<BuildReport> {
    let config = SiteConfig::load(&params.config)?;
    let content = content::load_content(&params.content)?;
    info!(
        "building \"{}\" into {}",
        config.site.title,
        params.out.display()
    );

    let mut report = BuildReport::default();
    validate(&config, &content, &mut report);

    let ctx = LayoutContext {
        config: &config,
        overrides,
        today,
    };
    fs::create_dir_all(&params.out).map_err(|e| Error::io(&params.out, e))?;

    for page in &content.pages {
        if page.slug == "blog" {
            continue;
        }
        let is_home = page.slug == "index";
        let (route, rel) = page_target(&page.slug);
        let head = PageHead {
            title: (!is_home).then_some(page.title.as_str()),
            path: &route,
        };
        let html = layouts::base(&ctx, &head, is_home, layouts::page_body(page));
        write_html(&params.out, &rel, &html)?;
        report.pages += 1;
    }

    let head = PageHead {
        title: Some("Blog"),
        path: "/blog",
    };
    let html = layouts::base(&ctx, &head, false, layouts::blog_index_body(&content.posts));
    write_html(&params.out, Path::new("blog/index.html"), &html)?;
    report.pages += 1;

    for post in &content.posts {
        let route = format!("/blog/{}/", post.slug);
        let head = PageHead {
            title: Some(&post.title),
            path: &route,
        };
        let html = layouts::base(&ctx, &head, false, layouts::post_body(post));
        let rel = PathBuf::from("blog").join(&post.slug).join("index.html");
        write_html(&params.out, &rel, &html)?;
        report.posts += 1;
    }

    if let Some(static_dir) = &params.static_dir {
        report.assets = copy_static(static_dir, &params.out)?;
    }

    info!(
        "wrote {} pages, {} posts, {} assets",
        report.pages,
        report.posts,
        report.assets
    );
    Ok(report)
}

/// Load and validate without writing. The report carries the page and
/// post counts a build would produce and the warnings it would log.
pub fn check(config: &Path, content_dir: &Path) -> Result<BuildReport> {
    let config = SiteConfig::load(config)?;
    let content = content::load_content(content_dir)?;

    let mut report = BuildReport::default();
    validate(&config, &content, &mut report);
    report.pages = content.pages.iter().filter(|p| p.slug != "blog").count() + 1;
    report.posts = content.posts.len();
    Ok(report)
}

fn page_target(slug: &str) -> (String, PathBuf) {
    if slug == "index" {
        ("/".to_string(), PathBuf::from("index.html"))
    } else {
        (format!("/{slug}"), PathBuf::from(slug).join("index.html"))
    }
}

/// Warn about menu entries that no generated route serves, pages that
/// collide with the generated blog index, and duplicate slugs.
fn validate(config: &SiteConfig, content: &Content, report: &mut BuildReport) {
    let mut routes = BTreeSet::new();
    routes.insert("/".to_string());
    routes.insert("/blog".to_string());

    let mut page_slugs = BTreeSet::new();
    for page in &content.pages {
        if page.slug == "blog" {
            warn(
                report,
                "page slug \"blog\" collides with the generated blog index; skipping it".to_string(),
            );
            continue;
        }
        if !page_slugs.insert(&page.slug) {
            warn(report, format!("duplicate page slug \"{}\"", page.slug));
        }
        if page.slug != "index" {
            routes.insert(format!("/{}", page.slug));
        }
    }

    let mut post_slugs = BTreeSet::new();
    for post in &content.posts {
        if !post_slugs.insert(&post.slug) {
            warn(report, format!("duplicate post slug \"{}\"", post.slug));
        }
        routes.insert(format!("/blog/{}", post.slug));
    }

    for entry in &config.theme.menu_links {
        if entry.link.starts_with("http://") || entry.link.starts_with("https://") {
            continue;
        }
        let normalized = match entry.link.trim_end_matches('/') {
            "" => "/",
            path => path,
        };
        if !routes.contains(normalized) {
            warn(
                report,
                format!(
                    "menu entry \"{}\" links to {} but nothing is generated there",
                    entry.name, entry.link
                ),
            );
        }
    }
}

fn warn(report: &mut BuildReport, message: String) {
    warn!("{message}");
    report.warnings.push(message);
}

fn write_html(out: &Path, rel: &Path, html: &str) -> Result<()> {
    let target = out.join(rel);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(&target, html).map_err(|e| Error::io(&target, e))?;
    debug!("wrote {}", target.display());
    Ok(())
}

/// Copy the static tree under the output directory, preserving
/// relative paths. A missing static directory copies nothing.
fn copy_static(from: &Path, out: &Path) -> Result<usize> {
    if !from.is_dir() {
        debug!("no static directory at {}", from.display());
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| from.to_path_buf());
            Error::Io {
                path,
                source: e.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(from).map_err(|e| Error::Io {
            path: entry.path().to_path_buf(),
            source: io::Error::other(e),
        })?;
        let target = out.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::copy(entry.path(), &target).map_err(|e| Error::io(entry.path(), e))?;
        debug!("copied {}", rel.display());
        copied += 1;
    }
    Ok(copied)
}
