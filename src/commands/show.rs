//! Show a single article

use anyhow::Result;

use crate::content::{plain_text, Article};
use crate::helpers::{publication_date, strip_root};
use crate::loader::{LoadState, Navigation, View};
use crate::routes::Route;
use crate::KnowledgeHub;

/// Resolve a CLI target: a bare slug or a detail path such as `/articles/intro`
pub fn resolve_target(hub: &KnowledgeHub, target: &str) -> Result<String> {
    if !target.starts_with('/') {
        return Ok(target.to_string());
    }

    let path = strip_root(&hub.config, target)
        .ok_or_else(|| anyhow::anyhow!("Path is outside the site root: {}", target))?;

    match Route::parse(path) {
        Some(Route::ArticleDetail { slug }) => Ok(slug),
        Some(Route::ArticleList) => anyhow::bail!("{} is the article list, use `list`", target),
        None => anyhow::bail!("No route matches {}", target),
    }
}

/// Load an article and print it as text, or as the full HTML page with `html`
pub async fn run(hub: &KnowledgeHub, target: &str, html: bool) -> Result<()> {
    let slug = resolve_target(hub, target)?;
    let navigator = hub.navigator()?;
    eprintln!("Loading article...");

    let view = match navigator.navigate(Route::detail(slug.clone())).await {
        Navigation::Applied(view) => view,
        Navigation::Superseded => anyhow::bail!("Navigation to {} was superseded", slug),
    };

    if html {
        print!("{}", hub.renderer().render(&view));
        return Ok(());
    }

    match view {
        View::Detail {
            state: LoadState::Success(article),
            ..
        } => print!("{}", text(hub, &article)),
        View::Detail {
            state: LoadState::NotFound,
            ..
        } => println!("Article not found: {}", slug),
        View::Detail {
            state: LoadState::Error(message),
            ..
        } => anyhow::bail!(message),
        other => anyhow::bail!("Unexpected view: {:?}", other),
    }

    Ok(())
}

/// Plain-text rendering of an article
fn text(hub: &KnowledgeHub, article: &Article) -> String {
    let mut out = String::new();
    out.push_str(article.title().unwrap_or_default());
    out.push('\n');

    if let Some(category) = article.category_name() {
        out.push_str(&format!("Category: {}\n", category));
    }
    if let Some(date) = article.published_at {
        out.push_str(&format!(
            "Published on {}\n",
            publication_date(&date, hub.config.tz(), &hub.config.date_format)
        ));
    }

    let body = plain_text(&article.content);
    if !body.is_empty() {
        out.push('\n');
        out.push_str(&body);
        out.push('\n');
    }
    out
}
