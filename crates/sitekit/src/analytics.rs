// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Google tag injection — the measurement snippet emitted into the
//! page head when tracking IDs are configured.
//!
//! The loader script is fetched for the first ID; every ID then gets
//! its own `gtag('config', …)` line, in declaration order. IDs are
//! embedded as JSON string literals so the inline script stays
//! well-formed no matter what the configured value contains.

use maud::{Markup, PreEscaped, html};

/// Render the tracking snippet, or `None` when no IDs are configured.
pub fn snippet(ids: &[String]) -> Option<Markup> {
    let first = ids.first()?;
    let loader = format!("https://www.googletagmanager.com/gtag/js?id={}", first);

    let mut inline = String::from(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){dataLayer.push(arguments);}\n\
         gtag('js', new Date());\n",
    );
    for id in ids {
        let literal = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
        inline.push_str(&format!("gtag('config', {});\n", literal));
    }

    Some(html! {
        script async src=(loader) {}
        script { (PreEscaped(inline)) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ids_means_no_snippet() {
        assert!(snippet(&[]).is_none());
    }

    #[test]
    fn single_id_loads_and_configures() {
        let html = snippet(&["G-RC07QZCERZ".to_string()])
            .expect("snippet")
            .into_string();
        assert!(html.contains("googletagmanager.com/gtag/js?id=G-RC07QZCERZ"));
        assert!(html.contains(r#"gtag('config', "G-RC07QZCERZ");"#));
        assert!(html.contains("dataLayer"));
    }

    #[test]
    fn extra_ids_share_one_loader() {
        let ids = vec!["G-AAA".to_string(), "G-BBB".to_string()];
        let html = snippet(&ids).expect("snippet").into_string();
        // Loader only for the first ID, config lines for both.
        assert_eq!(html.matches("gtag/js?id=").count(), 1);
        assert!(html.contains("gtag/js?id=G-AAA"));
        assert!(html.contains(r#"gtag('config', "G-AAA");"#));
        assert!(html.contains(r#"gtag('config', "G-BBB");"#));
        let a = html.find("G-AAA").expect("first id");
        let b = html.find(r#"gtag('config', "G-BBB")"#).expect("second id");
        assert!(a < b, "config lines keep declaration order");
    }
}
