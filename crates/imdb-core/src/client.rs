//! HTTP fetching for IMDb pages
//!
//! Pages are fetched with a single GET and no retries. The body is returned
//! whatever the status code, unless [`ClientConfig::error_for_status`] is set.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Url;
use tracing::{debug, warn};

use crate::error::{Result, ScraperError};

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header; IMDb localizes episode titles otherwise
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Something that can turn a URL into page text.
///
/// [`HttpFetcher`] is the real implementation; tests plug in canned pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of `url` as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url).await
    }
}

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// Accept-Language header value (default: "en-US,en;q=0.9")
    pub accept_language: String,
    /// Fail on non-success status codes instead of returning the body (default: false)
    pub error_for_status: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            error_for_status: false,
        }
    }
}

/// reqwest-backed [`PageFetcher`]
pub struct HttpFetcher {
    client: reqwest::Client,
    error_for_status: bool,
}

impl HttpFetcher {
    /// Create a new fetcher with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new fetcher with custom configuration
    ///
    /// # Errors
    /// - `ScraperError::InvalidConfig` - header values are not valid HTTP header text
    /// - `ScraperError::Http` - the TLS backend could not be initialized
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let accept_language = HeaderValue::from_str(&config.accept_language).map_err(|e| {
            ScraperError::InvalidConfig(format!(
                "accept-language {:?}: {}",
                config.accept_language, e
            ))
        })?;
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            error_for_status: config.error_for_status,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// # Errors
    /// - `ScraperError::InvalidUrl` - URL is not an absolute http(s) URL
    /// - `ScraperError::Http` - network failure or undecodable body
    /// - `ScraperError::UnexpectedStatus` - non-success status in strict mode
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = parse_http_url(url)?;
        debug!("GET {}", parsed);

        let response = self.client.get(parsed).send().await?;
        let status = response.status();

        if !status.is_success() {
            if self.error_for_status {
                return Err(ScraperError::UnexpectedStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            warn!("{} answered with status {}, using body anyway", url, status);
        }

        Ok(response.text().await?)
    }
}

/// Parse `url` as an absolute URL usable by the HTTP client.
fn parse_http_url(url: &str) -> Result<Url> {
    let parsed =
        Url::parse(url).map_err(|e| ScraperError::InvalidUrl(format!("{}: {}", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidUrl(format!(
            "{}: unsupported scheme {:?}",
            url,
            parsed.scheme()
        )));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ScraperError::InvalidUrl(format!("{}: missing host", url)));
    }

    Ok(parsed)
}
