// src/crawl/fetch.rs
// =============================================================================
// This module fetches pages for the crawler.
//
// The crawl loop only talks to the `Fetch` trait. The real implementation,
// `HttpFetcher`, wraps a reqwest client; tests plug in an in-memory site.
//
// Every request identifies itself with the same desktop-Chrome User-Agent.
// Non-2xx responses, timeouts and connection failures all come back as
// errors; the caller decides what to do with them (the crawler logs and
// moves on).
//
// Rust concepts:
// - Traits: a seam between the crawl logic and the network
// - async_trait: async methods in traits
// - Builder pattern: reqwest::Client::builder()
// =============================================================================

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// The User-Agent header sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/111.0.0.0 Safari/537.36";

const MAX_REDIRECTS: usize = 10;

/// A fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    /// The URL the response came from, after redirects.
    /// Relative links on the page resolve against this.
    pub url: Url,
    pub content_type: Option<String>,
    pub body: String,
}

impl Page {
    /// A page served as `text/html`.
    #[cfg(test)]
    pub fn html(url: Url, body: impl Into<String>) -> Self {
        Self {
            url,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: body.into(),
        }
    }

    /// Only HTML responses are scanned for links.
    pub fn is_html(&self) -> bool {
        is_html_type(self.content_type.as_deref())
    }
}

fn is_html_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("html"))
}

#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Page>;
}

/// reqwest-backed fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .context("failed to build the HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Links only come from HTML, so PDFs, images and the like are left
        // undownloaded; dropping the response closes the body stream.
        let body = if is_html_type(content_type.as_deref()) {
            response.text().await?
        } else {
            tracing::debug!("Skipping body of non-HTML response from {}", final_url);
            String::new()
        };

        Ok(Page {
            url: final_url,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_sends_browser_user_agent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/").header("user-agent", USER_AGENT);
                then.status(200)
                    .header("content-type", "text/html; charset=utf-8")
                    .body(r#"<a href="/a">A</a>"#);
            })
            .await;

        let page = fetcher().fetch(&server.url("/")).await.unwrap();

        assert!(page.is_html());
        assert_eq!(page.body, r#"<a href="/a">A</a>"#);
        assert_eq!(page.url.path(), "/");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_a_failed_fetch() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404);
            })
            .await;

        let err = fetcher().fetch(&server.url("/missing")).await.unwrap_err();

        assert!(err.to_string().contains("404"), "unexpected error: {}", err);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_page_url_follows_redirects() {
        let server = MockServer::start_async().await;
        let target = server.url("/new");
        server
            .mock_async(|when, then| {
                when.method(GET).path("/old");
                then.status(301).header("location", target.as_str());
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/new");
                then.status(200)
                    .header("content-type", "text/html")
                    .body("<p>moved</p>");
            })
            .await;

        let page = fetcher().fetch(&server.url("/old")).await.unwrap();

        assert_eq!(page.url.path(), "/new");
        assert_eq!(page.body, "<p>moved</p>");
    }

    #[tokio::test]
    async fn test_non_html_content_type() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/report.pdf");
                then.status(200)
                    .header("content-type", "application/pdf")
                    .body("%PDF-1.7");
            })
            .await;

        let page = fetcher().fetch(&server.url("/report.pdf")).await.unwrap();

        assert!(!page.is_html());
        assert_eq!(page.content_type.as_deref(), Some("application/pdf"));
        assert!(page.body.is_empty(), "non-HTML body was read: {:?}", page.body);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        // Port 9 (discard) on localhost is not expected to be listening.
        let result = fetcher().fetch("http://127.0.0.1:9/").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_is_html() {
        let url = Url::parse("https://example.com/").unwrap();
        assert!(Page::html(url.clone(), "").is_html());

        let mut page = Page::html(url, "");
        page.content_type = Some("TEXT/HTML".to_string());
        assert!(page.is_html());
        page.content_type = None;
        assert!(!page.is_html());
    }
}
