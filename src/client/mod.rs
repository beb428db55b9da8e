//! Content backend client
//!
//! Issues single-attempt GET requests against the backend's REST API and
//! decodes the response envelope. There is no retry and no caching: every
//! call is a fresh request.

mod http;

pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};

#[cfg(test)]
pub use http::MockHttpClient;

use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::content::Envelope;
use crate::error::{HubError, Result};
use crate::helpers::encode_component;

/// Client for the article endpoints of the content backend
#[derive(Clone)]
pub struct ContentClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ContentClient {
    /// Create a client for `base_url` (e.g. `http://localhost:1337/api`)
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!("Created ContentClient for {}", base_url);
        Self { base_url, http }
    }

    /// Create a reqwest-backed client from site configuration
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let http = ReqwestHttpClient::with_timeout(Duration::from_secs(
            config.request_timeout_secs,
        ))?;
        Ok(Self::new(config.api_url.clone(), Arc::new(http)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the full article collection with relations populated
    pub fn articles_url(&self) -> String {
        format!("{}/articles?populate=*", self.base_url)
    }

    /// URL of the articles matching `slug`, with the category populated
    pub fn article_by_slug_url(&self, slug: &str) -> String {
        format!(
            "{}/articles?filters[slug][$eq]={}&populate=category",
            self.base_url,
            encode_component(slug)
        )
    }

    /// Fetch the whole article collection
    pub async fn fetch_articles(&self) -> Result<Envelope> {
        self.fetch(&self.articles_url(), "articles").await
    }

    /// Fetch the articles whose slug equals `slug` (zero or one in practice)
    pub async fn fetch_article_by_slug(&self, slug: &str) -> Result<Envelope> {
        self.fetch(&self.article_by_slug_url(slug), "article").await
    }

    async fn fetch(&self, url: &str, what: &str) -> Result<Envelope> {
        let response = self.http.get(url).await?;

        if !response.is_success() {
            return Err(HubError::Fetch {
                status: Some(response.status),
                message: format!("Failed to fetch {}: {}", what, response.status_text()),
            });
        }

        serde_json::from_str(&response.body).map_err(|e| HubError::Fetch {
            status: Some(response.status),
            message: format!("Failed to fetch {}: invalid JSON response ({})", what, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_response(body: &'static str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_urls() {
        let client = ContentClient::new("http://localhost:1337/api/", Arc::new(MockHttpClient::new()));
        assert_eq!(
            client.articles_url(),
            "http://localhost:1337/api/articles?populate=*"
        );
        assert_eq!(
            client.article_by_slug_url("intro-to-x"),
            "http://localhost:1337/api/articles?filters[slug][$eq]=intro-to-x&populate=category"
        );
        assert_eq!(
            client.article_by_slug_url("a&b c"),
            "http://localhost:1337/api/articles?filters[slug][$eq]=a%26b%20c&populate=category"
        );
    }

    #[tokio::test]
    async fn test_fetch_articles_decodes_envelope() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url.ends_with("/articles?populate=*"))
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(ok_response(
                        r#"{"data":[{"id":1,"title":"A","slug":"a"}],"meta":{"pagination":{"page":1,"pageSize":25,"pageCount":1,"total":1}}}"#,
                    ))
                })
            });

        let client = ContentClient::new("http://cms/api", Arc::new(mock));
        let envelope = client.fetch_articles().await.unwrap();
        assert_eq!(envelope.data.into_records().len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 500,
                    body: "oops".to_string(),
                })
            })
        });

        let client = ContentClient::new("http://cms/api", Arc::new(mock));
        let err = client.fetch_articles().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "Failed to fetch articles: Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_fetch_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { Ok(ok_response("<html>not json</html>")) }));

        let client = ContentClient::new("http://cms/api", Arc::new(mock));
        let err = client.fetch_article_by_slug("x").await.unwrap_err();
        assert!(matches!(err, HubError::Fetch { .. }));
        assert!(err.to_string().starts_with("Failed to fetch article: invalid JSON"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Box::pin(async { Err(HubError::fetch("connection refused")) }));

        let client = ContentClient::new("http://cms/api", Arc::new(mock));
        let err = client.fetch_articles().await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }
}
