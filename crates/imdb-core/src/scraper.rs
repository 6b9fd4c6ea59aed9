//! Main show ratings API
//!
//! Combines a [`PageFetcher`] with the parsers into a linear pipeline:
//! show page -> season links -> season pages -> episode ratings.

use tracing::{debug, info};

use crate::client::{ClientConfig, HttpFetcher, PageFetcher};
use crate::error::Result;
use crate::parser::{extract_base_url, parse_season_episodes, parse_seasons};
use crate::types::{EpisodeRatings, OrderedMap, SeasonMap, ShowRatings};

/// Scrapes the rating of every episode of one show.
///
/// Holds nothing but the show URL and a fetcher; every call to
/// [`get_rates`](Self::get_rates) fetches all pages afresh.
///
/// # Example
/// ```no_run
/// use imdb_core::ShowRatingScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = ShowRatingScraper::new("https://www.imdb.com/title/tt0944947/")?;
///     let ratings = scraper.get_rates().await?;
///     for (season, episodes) in ratings.season.iter() {
///         println!("Season {}: {} episodes", season, episodes.len());
///     }
///     Ok(())
/// }
/// ```
pub struct ShowRatingScraper<F = HttpFetcher> {
    url: String,
    fetcher: F,
}

impl ShowRatingScraper<HttpFetcher> {
    /// Create a scraper for `url` with the default HTTP fetcher.
    ///
    /// The URL is not validated here; a bad URL fails on first use.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_config(url, ClientConfig::default())
    }

    /// Create a scraper for `url` with a custom HTTP configuration.
    pub fn with_config(url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::with_config(config)?;
        Ok(Self::with_fetcher(url, fetcher))
    }
}

impl<F: PageFetcher> ShowRatingScraper<F> {
    /// Create a scraper that fetches pages through `fetcher`.
    ///
    /// This is useful for testing or for plugging in another transport.
    pub fn with_fetcher(url: impl Into<String>, fetcher: F) -> Self {
        Self {
            url: url.into(),
            fetcher,
        }
    }

    /// The show URL this scraper was built for
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Scheme and host of the show URL, e.g. `https://www.imdb.com`.
    ///
    /// # Errors
    /// `ScraperError::InvalidUrl` if the show URL has no http(s) scheme and host.
    pub fn extract_base_url(&self) -> Result<String> {
        let base_url = extract_base_url(&self.url)?;
        info!("Found base url {}", base_url);
        Ok(base_url)
    }

    /// Fetch a page body through the configured fetcher.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        self.fetcher.fetch(url).await
    }

    /// Find the season listing URLs on the show page.
    ///
    /// # Errors
    /// - `ScraperError::InvalidUrl` if the base URL cannot be extracted
    /// - `ScraperError::MalformedPage` if the episode widget is missing
    pub fn discover_seasons(&self, page_html: &str) -> Result<SeasonMap> {
        let base_url = self.extract_base_url()?;
        let seasons = parse_seasons(page_html, &base_url, &self.url)?;
        info!("Discovered {} seasons for {}", seasons.len(), self.url);
        Ok(seasons)
    }

    /// Fetch one season page and read the rating of each episode.
    pub async fn collect_season_episodes(&self, season_url: &str) -> Result<EpisodeRatings> {
        let html = self.fetch_page(season_url).await?;
        let episodes = parse_season_episodes(&html, season_url)?;
        debug!("Collected {} episodes from {}", episodes.len(), season_url);
        Ok(episodes)
    }

    /// Collect the episodes of every season, one season at a time.
    ///
    /// The first failing season aborts the whole collection.
    pub async fn collect_all_seasons(&self, seasons: &SeasonMap) -> Result<ShowRatings> {
        let mut season = OrderedMap::new();
        for (label, season_url) in seasons.iter() {
            let episodes = self.collect_season_episodes(season_url).await?;
            info!("Season {}: {} episodes", label, episodes.len());
            season.insert(label.clone(), episodes);
        }

        Ok(ShowRatings { season })
    }

    /// Fetch the show page, discover its seasons and rate every episode.
    ///
    /// # Errors
    /// Any fetch or parse failure; no partial result is returned.
    pub async fn get_rates(&self) -> Result<ShowRatings> {
        let page = self.fetch_page(&self.url).await?;
        let seasons = self.discover_seasons(&page)?;
        self.collect_all_seasons(&seasons).await
    }
}
