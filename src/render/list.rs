//! Article list page

use super::{states, FORWARD_ARROW, PAGE_CLASS};
use crate::config::SiteConfig;
use crate::content::Article;
use crate::helpers::{html_escape, publication_date};
use crate::loader::LoadState;
use crate::routes::Route;

const CARD_CLASS: &str = "group bg-slate-800/50 backdrop-blur-sm border border-slate-700 rounded-xl p-6 hover:border-cyan-500/50 transition-all duration-300 hover:shadow-lg hover:shadow-cyan-500/10 hover:scale-105";

pub fn render(config: &SiteConfig, state: &LoadState<Vec<Article>>) -> String {
    match state {
        LoadState::Pending => states::pending("Loading articles..."),
        LoadState::Error(message) => {
            states::error(config, "Error Loading Articles", message, false)
        }
        // The list loader never reports not found; show it as empty
        LoadState::NotFound => page(config, &[]),
        LoadState::Success(articles) => page(config, articles),
    }
}

fn page(config: &SiteConfig, articles: &[Article]) -> String {
    let grid = if articles.is_empty() {
        r#"<div class="text-center py-20">
<div class="bg-slate-800/50 backdrop-blur-sm border border-slate-700 rounded-xl p-12 max-w-md mx-auto">
<p class="text-gray-400 text-lg">No articles found. Start by creating your first article in Strapi!</p>
</div>
</div>"#
            .to_string()
    } else {
        let cards: String = articles
            .iter()
            .filter_map(|article| card(config, article))
            .collect();
        format!(
            r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{}</div>"#,
            cards
        )
    };

    format!(
        r#"<div class="{page}">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
<div class="text-center mb-12">
<h1 class="text-5xl font-bold text-white mb-4">{title}</h1>
<p class="text-xl text-gray-400">{subtitle}</p>
</div>
{grid}
</div>
</div>"#,
        page = PAGE_CLASS,
        title = html_escape(&config.title),
        subtitle = html_escape(&config.subtitle),
        grid = grid,
    )
}

/// One linked card; `None` for articles that cannot be linked
fn card(config: &SiteConfig, article: &Article) -> Option<String> {
    let (Some(slug), Some(title)) = (article.slug(), article.title()) else {
        return None;
    };

    let badge = article
        .category_name()
        .map(|name| {
            format!(
                r#"<div class="mb-4"><span class="inline-block px-3 py-1 text-xs font-semibold text-cyan-400 bg-cyan-400/10 rounded-full">{}</span></div>"#,
                html_escape(name)
            )
        })
        .unwrap_or_default();

    let date = article
        .published_at
        .map(|date| {
            format!(
                r#"<p class="text-gray-400 text-sm">{}</p>"#,
                publication_date(&date, config.tz(), &config.date_format)
            )
        })
        .unwrap_or_default();

    Some(format!(
        r#"<a href="{href}" class="{class}" data-article-id="{id}">
{badge}<h2 class="text-2xl font-semibold text-white mb-3 group-hover:text-cyan-400 transition-colors">{title}</h2>
{date}<div class="mt-4 flex items-center text-cyan-400 text-sm font-medium">Read article{arrow}</div>
</a>"#,
        href = html_escape(&Route::detail(slug).href(config)),
        class = CARD_CLASS,
        id = article.id,
        badge = badge,
        title = html_escape(title),
        date = date,
        arrow = FORWARD_ARROW,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{normalize, retain_displayable, Envelope};
    use serde_json::json;

    fn articles(value: serde_json::Value) -> Vec<Article> {
        let envelope: Envelope = serde_json::from_value(value).unwrap();
        retain_displayable(normalize(envelope))
    }

    #[test]
    fn test_two_valid_one_invalid_renders_two_items_in_order() {
        let list = articles(json!({
            "data": [
                { "id": 1, "title": "First", "slug": "first", "publishedAt": "2024-01-15T10:30:00.000Z" },
                { "id": 2, "slug": "no-title" },
                { "id": 3, "title": "Third", "slug": "third" }
            ]
        }));
        let html = render(&SiteConfig::default(), &LoadState::Success(list));

        assert_eq!(html.matches("data-article-id=").count(), 2);
        let first = html.find(r#"href="/articles/first""#).unwrap();
        let third = html.find(r#"href="/articles/third""#).unwrap();
        assert!(first < third);
        assert!(!html.contains("no-title"));
        assert!(html.contains("January 15, 2024"));
    }

    #[test]
    fn test_card_never_links_invalid_article() {
        let article = Article {
            id: 9,
            slug: None,
            title: Some("Orphan".to_string()),
            content: Vec::new(),
            category: None,
            published_at: None,
        };
        assert!(card(&SiteConfig::default(), &article).is_none());
    }

    #[test]
    fn test_category_badge_and_escaped_title() {
        let list = articles(json!({
            "data": [{
                "id": 1,
                "title": "Tips & <Tricks>",
                "slug": "tips",
                "category": { "id": 4, "name": "Guides", "slug": "guides" }
            }]
        }));
        let html = render(&SiteConfig::default(), &LoadState::Success(list));
        assert!(html.contains("Guides</span>"));
        assert!(html.contains("Tips &amp; &lt;Tricks&gt;"));
    }

    #[test]
    fn test_empty_list() {
        let html = render(&SiteConfig::default(), &LoadState::Success(Vec::new()));
        assert!(html.contains("No articles found."));
        assert!(html.contains("Knowledge Hub"));
    }

    #[test]
    fn test_error_has_no_back_link() {
        let html = render(
            &SiteConfig::default(),
            &LoadState::Error("Failed to fetch articles: Internal Server Error".to_string()),
        );
        assert!(html.contains("Error Loading Articles"));
        assert!(html.contains("Failed to fetch articles: Internal Server Error"));
        assert!(!html.contains("Back to articles"));
    }

    #[test]
    fn test_pending() {
        let html = render(&SiteConfig::default(), &LoadState::Pending);
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Loading articles..."));
    }
}
