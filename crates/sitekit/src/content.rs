// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Markdown content — frontmatter parsing, markdown rendering, and
//! page/post discovery.
//!
//! Pages live directly under the content root (`index.md`, `about.md`);
//! posts live under `posts/` and require a title and a date in their
//! frontmatter.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pulldown_cmark::{Options, Parser, html::push_html};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Frontmatter parsed from the top of each markdown file.
#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    slug: Option<String>,
}

/// A standalone page.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub slug: String,
    pub html: String,
}

/// A dated blog post.
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub html: String,
}

/// Everything discovered under the content root. Posts are sorted
/// newest-first, ties broken by title.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub pages: Vec<Page>,
    pub posts: Vec<Post>,
}

/// Render markdown to HTML.
///
/// Uses pulldown-cmark with GFM extensions (tables, strikethrough,
/// task lists). Raw HTML passes through unchanged.
pub fn render_markdown(content: &str) -> String {
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(content, options);
    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, parser);
    html
}

/// Split a leading `---` frontmatter block from the body.
fn split_frontmatter(content: &str) -> (String, String) {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("---") {
        return (String::new(), content.to_string());
    }
    let after = &trimmed[3..];
    if let Some(end) = after.find("\n---") {
        (after[..end].trim().to_string(), after[end + 4..].to_string())
    } else {
        (String::new(), content.to_string())
    }
}

fn parse_frontmatter(path: &Path, raw: &str) -> Result<(Frontmatter, String)> {
    let (fm_yaml, body) = split_frontmatter(raw);
    if fm_yaml.is_empty() {
        return Ok((Frontmatter::default(), body));
    }
    let fm = serde_yaml::from_str(&fm_yaml)
        .map_err(|e| Error::frontmatter(path, e.to_string()))?;
    Ok((fm, body))
}

/// File stem as a string, used as the fallback title and slug.
fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn load_page(path: &Path) -> Result<Page> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let (fm, body) = parse_frontmatter(path, &raw)?;
    let stem = stem(path);
    Ok(Page {
        title: fm.title.unwrap_or_else(|| stem.clone()),
        slug: fm.slug.unwrap_or(stem),
        html: render_markdown(&body),
    })
}

fn load_post(path: &Path) -> Result<Post> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let (fm, body) = parse_frontmatter(path, &raw)?;
    let title = fm
        .title
        .ok_or_else(|| Error::frontmatter(path, "posts require a title"))?;
    let date = fm
        .date
        .ok_or_else(|| Error::frontmatter(path, "posts require a date"))?;
    Ok(Post {
        title,
        slug: fm.slug.unwrap_or_else(|| stem(path)),
        date,
        html: render_markdown(&body),
    })
}

/// Markdown files directly inside `dir`, sorted by file name so
/// discovery order never depends on the directory walk.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Discover and render all content under `root`.
pub fn load_content(root: &Path) -> Result<Content> {
    if !root.is_dir() {
        return Err(Error::MissingContent {
            path: root.to_path_buf(),
        });
    }

    let mut pages = Vec::new();
    for path in markdown_files(root)? {
        pages.push(load_page(&path)?);
    }

    let posts_dir = root.join("posts");
    let mut posts = Vec::new();
    if posts_dir.is_dir() {
        for path in markdown_files(&posts_dir)? {
            posts.push(load_post(&path)?);
        }
    }
    posts.sort_by(|a, b| (Reverse(a.date), &a.title).cmp(&(Reverse(b.date), &b.title)));

    Ok(Content { pages, posts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_split_frontmatter() {
        let (fm, body) = split_frontmatter("---\ntitle: Hi\n---\n\n# Body");
        assert_eq!(fm, "title: Hi");
        assert!(body.contains("# Body"));
    }

    #[test]
    fn test_split_frontmatter_none() {
        let (fm, body) = split_frontmatter("# Just markdown");
        assert!(fm.is_empty());
        assert_eq!(body, "# Just markdown");
    }

    #[test]
    fn markdown_gets_gfm_extensions() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn raw_html_passes_through() {
        let html = render_markdown("before\n\n<div class=\"x\">kept</div>\n\nafter");
        assert!(html.contains("<div class=\"x\">kept</div>"));
    }

    #[test]
    fn loads_pages_and_posts() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path();
        fs::write(root.join("index.md"), "Welcome!").expect("write");
        fs::write(
            root.join("about.md"),
            "---\ntitle: \"About me\"\n---\nHello.",
        )
        .expect("write");
        fs::create_dir(root.join("posts")).expect("mkdir");
        fs::write(
            root.join("posts/first.md"),
            "---\ntitle: \"First\"\ndate: 2024-01-15\n---\nOne.",
        )
        .expect("write");
        fs::write(
            root.join("posts/second.md"),
            "---\ntitle: \"Second\"\ndate: 2024-03-02\n---\nTwo.",
        )
        .expect("write");

        let content = load_content(root).expect("load");
        assert_eq!(content.pages.len(), 2);
        // Pages come back in file-name order.
        assert_eq!(content.pages[0].title, "About me");
        assert_eq!(content.pages[1].slug, "index");
        // Posts come back newest-first.
        assert_eq!(content.posts.len(), 2);
        assert_eq!(content.posts[0].title, "Second");
        assert_eq!(content.posts[1].title, "First");
    }

    #[test]
    fn post_without_a_date_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path();
        fs::create_dir(root.join("posts")).expect("mkdir");
        fs::write(root.join("posts/bad.md"), "---\ntitle: \"X\"\n---\nBody").expect("write");

        let err = load_content(root).expect_err("should fail");
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn missing_content_root_is_an_error() {
        let err = load_content(Path::new("/definitely/not/here")).expect_err("should fail");
        assert!(matches!(err, Error::MissingContent { .. }));
    }
}
