//! List articles from the backend

use anyhow::Result;

use crate::content::{normalize, Article};
use crate::helpers::publication_date;
use crate::loader::{LoadState, Navigation, View};
use crate::routes::Route;
use crate::KnowledgeHub;

/// Print the article list
///
/// With `all`, records excluded by validation are printed too, with the
/// reason they are not shown.
pub async fn run(hub: &KnowledgeHub, all: bool, json: bool) -> Result<()> {
    if all {
        return run_all(hub).await;
    }

    let navigator = hub.navigator()?;
    eprintln!("Loading articles...");

    let articles = match navigator.navigate(Route::ArticleList).await {
        Navigation::Applied(View::List {
            state: LoadState::Success(articles),
        }) => articles,
        Navigation::Applied(View::List {
            state: LoadState::Error(message),
        }) => anyhow::bail!(message),
        other => anyhow::bail!("Unexpected navigation result: {:?}", other),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    println!("Articles ({}):", articles.len());
    for article in &articles {
        println!("  {}", summary_line(hub, article));
    }

    Ok(())
}

async fn run_all(hub: &KnowledgeHub) -> Result<()> {
    let envelope = hub.client()?.fetch_articles().await?;
    let articles = normalize(envelope);

    println!("Records ({}):", articles.len());
    for article in &articles {
        match article.validate() {
            Ok(()) => println!("  {}", summary_line(hub, article)),
            Err(gap) => println!("  #{} (hidden: {})", article.id, gap),
        }
    }

    Ok(())
}

/// `date - title [slug]`
fn summary_line(hub: &KnowledgeHub, article: &Article) -> String {
    let date = article
        .published_at
        .map(|date| publication_date(&date, hub.config.tz(), "YYYY-MM-DD"))
        .unwrap_or_else(|| "----------".to_string());

    format!(
        "{} - {} [{}]",
        date,
        article.title().unwrap_or_default(),
        article.slug().unwrap_or_default()
    )
}
