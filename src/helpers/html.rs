//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;

/// Generate a CSS link tag
///
/// Absolute and protocol-relative URLs are used as-is, anything else is
/// resolved against the site root.
pub fn css(config: &SiteConfig, path: &str) -> String {
    let href =
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
            path.to_string()
        } else {
            url_for(config, path)
        };

    format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(&href))
}

/// Generate an anchor tag with a class attribute
///
/// # Examples
/// ```ignore
/// link_to("/articles", "Back", "back-link") // -> <a href="/articles" class="back-link">Back</a>
/// ```
pub fn link_to(href: &str, inner_html: &str, class: &str) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        html_escape(href),
        class,
        inner_html
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
