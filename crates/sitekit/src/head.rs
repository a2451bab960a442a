// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Page head rendering — document titles and SEO/social metadata.
//!
//! Every tag that depends on an optional metadata field is emitted only
//! when the field is non-empty, so a half-filled `site.yaml` degrades
//! to a smaller head instead of emitting empty attributes.

use maud::{Markup, html};

use crate::config::SiteMetadata;

/// Version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Page-specific inputs to head rendering.
#[derive(Debug, Clone)]
pub struct PageHead<'a> {
    /// Page title; `None` renders the bare site title (the home page).
    pub title: Option<&'a str>,
    /// Site-relative path of the page (`/`, `/blog`, `/blog/hello/`).
    pub path: &'a str,
}

/// Compute the `<title>` text for a page.
///
/// With a page title and a configured `title_template`, every `%s` in
/// the template is replaced by the page title. Without a template the
/// page title stands alone; without a page title the site title is
/// used as-is.
pub fn page_title(meta: &SiteMetadata, page: Option<&str>) -> String {
    match (page, meta.title_template.as_deref()) {
        (Some(title), Some(template)) => template.replace("%s", title),
        (Some(title), None) => title.to_string(),
        (None, _) => meta.title.clone(),
    }
}

/// Join a base URL and a site-relative path without doubling slashes.
///
/// An empty base yields the path unchanged, so sites without a
/// configured URL still produce working relative links.
pub fn absolute_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Normalize a Twitter handle to carry exactly one leading `@`.
fn twitter_handle(name: &str) -> String {
    format!("@{}", name.trim_start_matches('@'))
}

/// Render the head metadata for one page: charset, viewport, generator,
/// title, description, canonical link, Open Graph and Twitter card
/// tags, and the stylesheet link.
pub fn render(meta: &SiteMetadata, page: &PageHead) -> Markup {
    let title = page_title(meta, page.title);
    let canonical = (!meta.url.is_empty()).then(|| absolute_url(&meta.url, page.path));
    let image = (!meta.url.is_empty() && !meta.image.is_empty())
        .then(|| absolute_url(&meta.url, &meta.image));

    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta name="generator" content=(format!("sitekit v{}", VERSION));
        title { (title) }
        @if !meta.description.is_empty() {
            meta name="description" content=(meta.description);
            meta property="og:description" content=(meta.description);
        }
        @if let Some(ref url) = canonical {
            link rel="canonical" href=(url);
            meta property="og:url" content=(url);
        }
        meta property="og:title" content=(title);
        meta property="og:type" content="website";
        @if let Some(ref image_url) = image {
            meta property="og:image" content=(image_url);
            meta name="twitter:card" content="summary_large_image";
        }
        @if !meta.twitter_username.is_empty() {
            meta name="twitter:creator" content=(twitter_handle(&meta.twitter_username));
        }
        link rel="stylesheet" href="/style.css";
    }
}
