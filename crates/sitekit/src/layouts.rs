// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Page layouts.
//!
//! Every page shares one base shell: head metadata, a header with the
//! site title and menu, the page body, and the footer. The socials
//! block only appears where a layout asks for it (the home page).

use chrono::NaiveDate;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::analytics;
use crate::config::SiteConfig;
use crate::content::{Page, Post};
use crate::head::{self, PageHead};
use crate::overrides::Overrides;
use crate::partials::{self, FooterContext, SocialsProps};

/// Shared inputs for every rendered page.
///
/// `today` is read once per build so all pages agree on the footer
/// year, and so tests can pin it.
pub struct LayoutContext<'a> {
    pub config: &'a SiteConfig,
    pub overrides: &'a Overrides,
    pub today: NaiveDate,
}

/// Render a full HTML document around `body`.
pub fn base(ctx: &LayoutContext, page: &PageHead, show_socials: bool, body: Markup) -> String {
    let meta = &ctx.config.site;
    let gtag = ctx
        .config
        .analytics
        .as_ref()
        .and_then(|a| analytics::snippet(&a.tracking_ids));
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (head::render(meta, page))
                @if let Some(ref gtag) = gtag { (gtag) }
            }
            body {
                header .site-header {
                    a .site-title href="/" { (meta.title) }
                    (partials::nav(&ctx.config.theme.menu_links, page.path))
                }
                main { (body) }
                @if show_socials {
                    (ctx.overrides.render_socials(&SocialsProps {
                        links: &ctx.config.theme.socials,
                    }))
                }
                (ctx.overrides.render_footer(&FooterContext {
                    today: ctx.today,
                    site_title: &meta.title,
                }))
            }
        }
    };
    markup.into_string()
}

/// Body markup for a standalone page.
pub fn page_body(page: &Page) -> Markup {
    html! {
        (PreEscaped(&page.html))
    }
}

/// Body markup for a single post.
pub fn post_body(post: &Post) -> Markup {
    html! {
        article .post {
            h1 { (post.title) }
            p .post-date { (post.date.format("%B %-d, %Y").to_string()) }
            (PreEscaped(&post.html))
        }
    }
}

/// Body markup for the blog index, newest post first.
pub fn blog_index_body(posts: &[Post]) -> Markup {
    html! {
        h1 { "Blog" }
        ul .post-list {
            @for post in posts {
                li {
                    a href=(format!("/blog/{}/", post.slug)) { (post.title) }
                    " "
                    span .post-date { (post.date.format("%b %-d, %Y").to_string()) }
                }
            }
        }
    }
}
