//! View renderer
//!
//! Pure functions from loader output to HTML. Each route has four
//! mutually exclusive presentations: pending, error, not found (detail
//! only) and success.

mod blocks;
mod detail;
mod list;
mod states;

pub use blocks::render_blocks;

use crate::config::SiteConfig;
use crate::helpers::{css, html_escape, link_to};
use crate::loader::{LoadState, View};
use crate::routes::Route;

const PAGE_CLASS: &str = "min-h-screen bg-gradient-to-b from-slate-900 via-slate-800 to-slate-900";

const BACK_ARROW: &str = r#"<svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"/></svg>"#;

const FORWARD_ARROW: &str = r#"<svg class="ml-2 w-4 h-4 group-hover:translate-x-1 transition-transform" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"/></svg>"#;

const BUTTON_CLASS: &str = "inline-flex items-center px-6 py-3 bg-cyan-500 hover:bg-cyan-600 text-white font-semibold rounded-lg transition-colors";

/// Renders views into complete HTML documents
#[derive(Debug, Clone)]
pub struct Renderer {
    config: SiteConfig,
}

impl Renderer {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render a view as a full page
    pub fn render(&self, view: &View) -> String {
        let (title, body) = match view {
            View::List { state } => (
                self.config.title.clone(),
                list::render(&self.config, state),
            ),
            View::Detail { state, .. } => {
                let title = match state {
                    LoadState::Success(article) => format!(
                        "{} | {}",
                        article.title().unwrap_or_default(),
                        self.config.title
                    ),
                    LoadState::NotFound => format!("Article Not Found | {}", self.config.title),
                    _ => self.config.title.clone(),
                };
                (title, detail::render(&self.config, state))
            }
        };
        self.layout(&title, &body)
    }

    /// Page for paths that match no route
    pub fn render_unknown_route(&self) -> String {
        let body = states::not_found(
            &self.config,
            "Page Not Found",
            "The page you're looking for doesn't exist.",
        );
        self.layout(&format!("Page Not Found | {}", self.config.title), &body)
    }

    fn layout(&self, title: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="generator" content="knowledge-hub {version}">
<title>{title}</title>
{stylesheet}
</head>
<body>
{body}
</body>
</html>
"#,
            lang = html_escape(&self.config.language),
            version = env!("CARGO_PKG_VERSION"),
            title = html_escape(title),
            stylesheet = css(&self.config, &self.config.stylesheet),
            body = body,
        )
    }
}

/// "Back to articles" link
fn back_link(config: &SiteConfig, class: &str) -> String {
    link_to(
        &Route::ArticleList.href(config),
        &format!("{}Back to articles", BACK_ARROW),
        class,
    )
}
