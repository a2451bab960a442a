// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration — parsed from `site.yaml` at the repository root.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "Filip Krawczyk"
///   title_template: "%s – Filip Krawczyk"
///
/// theme:
///   menu_links:
///     - name: "Blog"
///       link: "/blog"
///   socials:
///     - name: "GitHub"
///       url: "https://github.com/filipkrw"
///
/// analytics:
///   tracking_ids: ["G-RC07QZCERZ"]
/// ```
///
/// Everything is read once at build time and never mutated. The
/// `analytics` section is genuinely optional: when it is absent the
/// generated pages carry no tracking snippet at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMetadata,
    #[serde(default)]
    pub theme: ThemeOptions,
    #[serde(default)]
    pub analytics: Option<AnalyticsOptions>,
}

/// Site-wide metadata, emitted into every page head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    /// Template applied to page titles; `%s` is replaced by the page's
    /// own title. The home page uses `title` directly.
    #[serde(default)]
    pub title_template: Option<String>,
    /// Canonical base URL (e.g. `https://example.com`). Empty disables
    /// canonical and `og:url` output.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Site-root-relative preview image path. Empty disables the
    /// preview-image tags.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub twitter_username: String,
}

/// One navigation entry. Declaration order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub name: String,
    pub link: String,
}

/// One entry in the social-icons list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Options consumed by the theme: the navigation menu and the
/// social-icons list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeOptions {
    #[serde(default)]
    pub menu_links: Vec<MenuLink>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// Options consumed by the analytics snippet. IDs are passed through
/// opaquely, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsOptions {
    pub tracking_ids: Vec<String>,
}

impl SiteConfig {
    /// Parse a configuration from YAML text.
    ///
    /// Returns the raw YAML error; `load` wraps it with the file path.
    pub fn parse(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Read and parse a configuration file, naming it in any failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let yaml = r#"
site:
  title: "Filip Krawczyk"
  title_template: "%s – Filip Krawczyk"

theme:
  menu_links:
    - name: "Blog"
      link: "/blog"
"#;
        let config = SiteConfig::parse(yaml).expect("parse config");
        assert_eq!(config.site.title, "Filip Krawczyk");
        assert_eq!(
            config.site.title_template.as_deref(),
            Some("%s – Filip Krawczyk")
        );
        assert_eq!(config.theme.menu_links.len(), 1);
        assert_eq!(config.theme.menu_links[0].name, "Blog");
        assert_eq!(config.theme.menu_links[0].link, "/blog");
        assert!(config.analytics.is_none());
    }

    #[test]
    fn menu_links_keep_declaration_order() {
        let yaml = r#"
site:
  title: "Test"

theme:
  menu_links:
    - name: "About"
      link: "/about"
    - name: "Blog"
      link: "/blog"
    - name: "Projects"
      link: "/projects"
"#;
        let config = SiteConfig::parse(yaml).expect("parse config");
        let links: Vec<(&str, &str)> = config
            .theme
            .menu_links
            .iter()
            .map(|l| (l.name.as_str(), l.link.as_str()))
            .collect();
        assert_eq!(
            links,
            vec![
                ("About", "/about"),
                ("Blog", "/blog"),
                ("Projects", "/projects"),
            ]
        );
    }

    #[test]
    fn analytics_round_trips_when_declared() {
        let yaml = r#"
site:
  title: "Test"

analytics:
  tracking_ids: ["G-RC07QZCERZ"]
"#;
        let config = SiteConfig::parse(yaml).expect("parse config");
        let analytics = config.analytics.expect("analytics section");
        assert_eq!(analytics.tracking_ids, vec!["G-RC07QZCERZ".to_string()]);
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let yaml = r#"
site:
  title: "Test"
"#;
        let config = SiteConfig::parse(yaml).expect("parse config");
        assert!(config.site.title_template.is_none());
        assert!(config.site.url.is_empty());
        assert!(config.site.description.is_empty());
        assert!(config.site.image.is_empty());
        assert!(config.site.twitter_username.is_empty());
        assert!(config.theme.menu_links.is_empty());
        assert!(config.theme.socials.is_empty());
        assert!(config.analytics.is_none());
    }

    #[test]
    fn missing_title_is_an_error() {
        let yaml = r#"
site:
  url: "https://example.com"
"#;
        assert!(SiteConfig::parse(yaml).is_err());
    }

    #[test]
    fn load_names_the_offending_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("site.yaml");
        std::fs::write(&path, "site: [not, a, mapping]").expect("write");

        let err = SiteConfig::load(&path).expect_err("should fail");
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("site.yaml"));
    }
}
