//! Error types for the IMDb ratings scraper
//!
//! Every failure in the pipeline is surfaced as a [`ScraperError`]; nothing
//! is caught and retried inside the core.

use thiserror::Error;

/// Error type for scraper operations
#[derive(Error, Debug)]
pub enum ScraperError {
    /// Transport-level failure (DNS, connection, timeout, body decoding)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL has no usable scheme and host
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML could not be queried (bad selector)
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// Page is missing an element the scraper relies on
    #[error("Malformed page at {url} during {stage}: {reason}")]
    MalformedPage {
        /// URL of the page being parsed
        url: String,
        /// Pipeline stage, e.g. "season discovery"
        stage: &'static str,
        /// What was missing
        reason: String,
    },

    /// Client configuration could not be turned into an HTTP client
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Server answered with a non-success status (strict mode only)
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

impl ScraperError {
    pub(crate) fn malformed(url: &str, stage: &'static str, reason: impl Into<String>) -> Self {
        ScraperError::MalformedPage {
            url: url.to_string(),
            stage,
            reason: reason.into(),
        }
    }
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;
