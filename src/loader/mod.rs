//! Route loaders
//!
//! A loader runs before a page is shown: it fetches from the content
//! backend, normalizes the envelope and settles into a [`LoadState`].
//! Nothing is cached between runs.

mod navigator;

pub use navigator::{Navigation, Navigator};

use crate::client::ContentClient;
use crate::content::{normalize, retain_displayable, Article};
use crate::error::Result;
use crate::routes::Route;

/// Progress of a loader
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Success(T),
    /// Only produced by the detail loader
    NotFound,
    /// Fetch failed; carries the error message
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Pending)
    }

    fn from_error(e: crate::error::HubError) -> Self {
        let message = e.to_string();
        if message.is_empty() {
            LoadState::Error("Unknown error".to_string())
        } else {
            LoadState::Error(message)
        }
    }
}

/// Loads the article list
#[derive(Debug, Clone)]
pub struct ListLoader {
    client: ContentClient,
}

impl ListLoader {
    pub fn new(client: ContentClient) -> Self {
        Self { client }
    }

    /// Fetch all articles and keep the displayable ones, in backend order
    pub async fn fetch(&self) -> Result<Vec<Article>> {
        let envelope = self.client.fetch_articles().await?;
        let articles = normalize(envelope);
        let received = articles.len();
        let articles = retain_displayable(articles);
        tracing::debug!(
            "Received {} articles, {} displayable",
            received,
            articles.len()
        );
        Ok(articles)
    }

    pub async fn load(&self) -> LoadState<Vec<Article>> {
        match self.fetch().await {
            Ok(articles) => LoadState::Success(articles),
            Err(e) => {
                tracing::warn!("Error fetching articles: {}", e);
                LoadState::from_error(e)
            }
        }
    }
}

/// Loads a single article by slug
#[derive(Debug, Clone)]
pub struct DetailLoader {
    client: ContentClient,
}

impl DetailLoader {
    pub fn new(client: ContentClient) -> Self {
        Self { client }
    }

    /// Fetch the first displayable article whose slug is exactly `slug`
    pub async fn fetch(&self, slug: &str) -> Result<Option<Article>> {
        let envelope = self.client.fetch_article_by_slug(slug).await?;
        let article = retain_displayable(normalize(envelope))
            .into_iter()
            .find(|article| article.slug() == Some(slug));
        Ok(article)
    }

    pub async fn load(&self, slug: &str) -> LoadState<Article> {
        match self.fetch(slug).await {
            Ok(Some(article)) => LoadState::Success(article),
            Ok(None) => {
                tracing::info!("Article not found: {}", slug);
                LoadState::NotFound
            }
            Err(e) => {
                tracing::warn!("Error fetching article {}: {}", slug, e);
                LoadState::from_error(e)
            }
        }
    }
}

/// What a route shows: the route plus its loader state
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    List {
        state: LoadState<Vec<Article>>,
    },
    Detail {
        slug: String,
        state: LoadState<Article>,
    },
}

impl View {
    /// The view shown while `route`'s loader runs
    pub fn pending(route: &Route) -> Self {
        match route {
            Route::ArticleList => View::List {
                state: LoadState::Pending,
            },
            Route::ArticleDetail { slug } => View::Detail {
                slug: slug.clone(),
                state: LoadState::Pending,
            },
        }
    }

    pub fn route(&self) -> Route {
        match self {
            View::List { .. } => Route::ArticleList,
            View::Detail { slug, .. } => Route::detail(slug.clone()),
        }
    }

    pub fn is_settled(&self) -> bool {
        match self {
            View::List { state } => state.is_settled(),
            View::Detail { state, .. } => state.is_settled(),
        }
    }
}

/// Dispatches a route to its loader
#[derive(Debug, Clone)]
pub struct RouteLoader {
    list: ListLoader,
    detail: DetailLoader,
}

impl RouteLoader {
    pub fn new(client: ContentClient) -> Self {
        Self {
            list: ListLoader::new(client.clone()),
            detail: DetailLoader::new(client),
        }
    }

    /// Run the loader for `route` until it settles
    pub async fn load(&self, route: &Route) -> View {
        match route {
            Route::ArticleList => View::List {
                state: self.list.load().await,
            },
            Route::ArticleDetail { slug } => View::Detail {
                slug: slug.clone(),
                state: self.detail.load(slug).await,
            },
        }
    }
}
