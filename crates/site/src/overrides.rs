// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! This site's theme tweaks: extra breathing room around the socials
//! block, and a footer crediting the author and the tools.

use chrono::Datelike;
use maud::{Markup, html};
use sitekit::partials;
use sitekit::{FooterContext, Overrides, SocialsProps};

const SOCIALS_MARGIN: &str = "margin: 36px 0";

/// The theme's socials block, unchanged, inside a spacing wrapper.
pub fn socials_margin(props: &SocialsProps) -> Markup {
    html! {
        div style=(SOCIALS_MARGIN) {
            (partials::socials(props))
        }
    }
}

/// Footer children: the copyright year, an author link, and a credit
/// to the HTML engine this site is rendered with.
pub fn footer(ctx: &FooterContext) -> Markup {
    html! {
        span { "© " (ctx.today.year()) }
        span {
            a href="https://github.com/filipkrw" { "Filip Krawczyk" }
        }
        span {
            a href="https://maud.lambda.xyz/" { "maud" }
        }
    }
}

/// Every hook this site registers.
pub fn overrides() -> Overrides {
    Overrides::new().footer(footer).socials(socials_margin)
}
