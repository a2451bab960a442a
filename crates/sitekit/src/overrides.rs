// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! The theme's extension contract.
//!
//! A site replaces individual partials by registering hooks here; at
//! most one hook per slot, and unset slots fall back to the theme
//! defaults. Hooks receive exactly the properties the default partial
//! accepts, so an override can delegate to the default and decorate
//! its output.

use maud::Markup;

use crate::partials::{self, FooterContext, SocialsProps};

type FooterHook = Box<dyn Fn(&FooterContext) -> Markup + Send + Sync>;
type SocialsHook = Box<dyn Fn(&SocialsProps) -> Markup + Send + Sync>;

/// Replacement hooks for theme partials.
#[derive(Default)]
pub struct Overrides {
    footer: Option<FooterHook>,
    socials: Option<SocialsHook>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the footer children. The footer chrome around them
    /// still comes from the theme.
    pub fn footer<F>(mut self, hook: F) -> Self
    where
        F: Fn(&FooterContext) -> Markup + Send + Sync + 'static,
    {
        self.footer = Some(Box::new(hook));
        self
    }

    /// Replace the rendered socials block.
    pub fn socials<F>(mut self, hook: F) -> Self
    where
        F: Fn(&SocialsProps) -> Markup + Send + Sync + 'static,
    {
        self.socials = Some(Box::new(hook));
        self
    }

    /// Render the footer, dispatching to the override when one is set.
    pub(crate) fn render_footer(&self, ctx: &FooterContext) -> Markup {
        let children = match &self.footer {
            Some(hook) => hook(ctx),
            None => partials::default_footer_children(ctx),
        };
        partials::footer(children)
    }

    /// Render the socials block, dispatching to the override when one
    /// is set.
    pub(crate) fn render_socials(&self, props: &SocialsProps) -> Markup {
        match &self.socials {
            Some(hook) => hook(props),
            None => partials::socials(props),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SocialLink;
    use chrono::NaiveDate;
    use maud::html;

    fn ctx() -> FooterContext<'static> {
        FooterContext {
            today: NaiveDate::from_ymd_opt(2024, 1, 2).expect("date"),
            site_title: "Test",
        }
    }

    #[test]
    fn unset_slots_render_the_defaults() {
        let overrides = Overrides::new();
        let html = overrides.render_footer(&ctx()).into_string();
        assert!(html.contains("© 2024"));
        assert!(html.contains("Test"));

        let links = vec![SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/filipkrw".to_string(),
        }];
        let html = overrides
            .render_socials(&SocialsProps { links: &links })
            .into_string();
        assert_eq!(html, partials::socials(&SocialsProps { links: &links }).into_string());
    }

    #[test]
    fn footer_hook_replaces_the_children_only() {
        let overrides = Overrides::new().footer(|_| html! { span { "custom" } });
        let html = overrides.render_footer(&ctx()).into_string();
        assert!(html.contains("<span>custom</span>"));
        // Chrome stays, default children go.
        assert!(html.contains(r#"footer class="site-footer""#));
        assert!(!html.contains("© 2024"));
    }

    #[test]
    fn socials_hook_can_decorate_the_default() {
        let overrides =
            Overrides::new().socials(|props| html! { div class="wrap" { (partials::socials(props)) } });
        let links = vec![SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/filipkrw".to_string(),
        }];
        let props = SocialsProps { links: &links };
        let html = overrides.render_socials(&props).into_string();
        let inner = partials::socials(&props).into_string();
        assert_eq!(html, format!(r#"<div class="wrap">{}</div>"#, inner));
    }
}
