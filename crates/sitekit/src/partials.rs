// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Theme partials — pure functions from properties to markup.
//!
//! Nothing here touches the filesystem or the clock; the build
//! pipeline owns both and passes everything in.

use chrono::{Datelike, NaiveDate};
use maud::{Markup, html};

use crate::config::{MenuLink, SocialLink};

/// Properties accepted by the socials partial. A wrapper that
/// decorates the partial forwards this struct unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialsProps<'a> {
    pub links: &'a [SocialLink],
}

/// Context available to footer renderers. `today` is read from the
/// wall clock once per build.
#[derive(Debug, Clone)]
pub struct FooterContext<'a> {
    pub today: NaiveDate,
    pub site_title: &'a str,
}

/// Navigation menu: one anchor per entry, in declaration order. The
/// entry matching the current page path is marked `aria-current`.
pub fn nav(menu: &[MenuLink], current: &str) -> Markup {
    html! {
        nav class="menu" {
            @for entry in menu {
                a href=(entry.link) aria-current=[(entry.link == current).then_some("page")] {
                    (entry.name)
                }
            }
        }
    }
}

/// Social links list.
pub fn socials(props: &SocialsProps) -> Markup {
    html! {
        ul class="socials" {
            @for link in props.links {
                li {
                    a href=(link.url) rel="me" { (link.name) }
                }
            }
        }
    }
}

/// Footer chrome around caller-supplied children.
pub fn footer(children: Markup) -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-content" { (children) }
        }
    }
}

/// Footer children rendered when the site does not override the
/// footer: copyright year and the site title.
pub fn default_footer_children(ctx: &FooterContext) -> Markup {
    html! {
        span { "© " (ctx.today.year()) }
        span { (ctx.site_title) }
    }
}
