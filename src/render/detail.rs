//! Article detail page

use super::{back_link, render_blocks, states, PAGE_CLASS};
use crate::config::SiteConfig;
use crate::content::Article;
use crate::helpers::{html_escape, time_tag};
use crate::loader::LoadState;

const BACK_LINK_CLASS: &str = "inline-flex items-center text-cyan-400 hover:text-cyan-300 transition-colors";

pub fn render(config: &SiteConfig, state: &LoadState<Article>) -> String {
    match state {
        LoadState::Pending => states::pending("Loading article..."),
        LoadState::Error(message) => {
            states::error(config, "Error Loading Article", message, true)
        }
        LoadState::NotFound => states::not_found(
            config,
            "Article Not Found",
            "The article you're looking for doesn't exist or has been removed.",
        ),
        LoadState::Success(article) => page(config, article),
    }
}

fn page(config: &SiteConfig, article: &Article) -> String {
    let badge = article
        .category_name()
        .map(|name| {
            format!(
                r#"<div class="mb-6"><span class="inline-block px-4 py-1.5 text-sm font-semibold text-cyan-400 bg-cyan-400/10 rounded-full">{}</span></div>"#,
                html_escape(name)
            )
        })
        .unwrap_or_default();

    let published = article
        .published_at
        .map(|date| {
            format!(
                r#"<p class="text-gray-400 mb-8 pb-8 border-b border-slate-700">Published on {}</p>"#,
                time_tag(&date, config.tz(), &config.date_format)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="{page}">
<div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
{top_link}
<article class="bg-slate-800/50 backdrop-blur-sm border border-slate-700 rounded-xl p-8 md:p-12">
{badge}<h1 class="text-4xl md:text-5xl font-bold text-white mb-4">{title}</h1>
{published}<div class="prose prose-invert prose-lg prose-cyan max-w-none">{content}</div>
</article>
<div class="mt-8">{bottom_link}</div>
</div>
</div>"#,
        page = PAGE_CLASS,
        top_link = back_link(config, &format!("{} mb-8", BACK_LINK_CLASS)),
        badge = badge,
        title = html_escape(article.title().unwrap_or_default()),
        published = published,
        content = render_blocks(&article.content),
        bottom_link = back_link(config, BACK_LINK_CLASS),
    )
}
