//! Client-side route surface

use std::fmt;

use crate::config::SiteConfig;
use crate::helpers::{decode_component, encode_component, url_for};

/// Path of the article list
pub const ARTICLES_PATH: &str = "/articles";

/// A routable page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// All articles
    ArticleList,
    /// One article, addressed by slug
    ArticleDetail { slug: String },
}

impl Route {
    pub fn detail(slug: impl Into<String>) -> Self {
        Route::ArticleDetail { slug: slug.into() }
    }

    /// Path relative to the site root, with the slug percent-encoded
    pub fn path(&self) -> String {
        match self {
            Route::ArticleList => ARTICLES_PATH.to_string(),
            Route::ArticleDetail { slug } => {
                format!("{}/{}", ARTICLES_PATH, encode_component(slug))
            }
        }
    }

    /// Link target including the configured root
    pub fn href(&self, config: &SiteConfig) -> String {
        url_for(config, &self.path())
    }

    /// Match a root-relative path
    ///
    /// `/articles` (with or without trailing slash) is the list and
    /// `/articles/{slug}` is a detail page. Everything else, including
    /// empty or undecodable slugs, does not match.
    pub fn parse(path: &str) -> Option<Self> {
        let rest = path.strip_prefix(ARTICLES_PATH)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return Some(Route::ArticleList);
        }

        let segment = rest.strip_prefix('/')?;
        if segment.is_empty() || segment.contains('/') {
            return None;
        }

        let slug = decode_component(segment)?;
        if slug.is_empty() {
            return None;
        }
        Some(Route::ArticleDetail { slug })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::ArticleList.path(), "/articles");
        assert_eq!(Route::detail("intro-to-x").path(), "/articles/intro-to-x");
        assert_eq!(Route::detail("a b").path(), "/articles/a%20b");
    }

    #[test]
    fn test_href_with_root() {
        let config = SiteConfig {
            root: "/hub/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(Route::detail("x").href(&config), "/hub/articles/x");
        assert_eq!(Route::ArticleList.href(&config), "/hub/articles");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/articles"), Some(Route::ArticleList));
        assert_eq!(Route::parse("/articles/"), Some(Route::ArticleList));
        assert_eq!(
            Route::parse("/articles/intro-to-x"),
            Some(Route::detail("intro-to-x"))
        );
        assert_eq!(Route::parse("/articlesx"), None);
        assert_eq!(Route::parse("/articles/a/b"), None);
        assert_eq!(Route::parse("/articles/%FF"), None);
        assert_eq!(Route::parse("/"), None);
    }

    #[test]
    fn test_slug_round_trip() {
        for slug in ["intro-to-x", "a b", "slash/inside", "café", "100%", "q?x=1&y#z"] {
            let route = Route::detail(slug);
            assert_eq!(Route::parse(&route.path()), Some(route.clone()), "{slug}");
        }
    }
}
