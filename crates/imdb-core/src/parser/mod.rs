//! HTML parsers for IMDb pages
//!
//! This module contains parsers for extracting data from IMDb pages:
//! - `url`: Extract the scheme and host from a show URL
//! - `seasons`: Parse season links from a show page
//! - `episodes`: Parse episode titles and ratings from a season page

pub mod episodes;
pub mod seasons;
pub mod url;

use scraper::Selector;

use crate::error::{Result, ScraperError};

// Re-export main parsing functions
pub use episodes::parse_season_episodes;
pub use seasons::{parse_seasons, SEASON_QUERY};
pub use url::extract_base_url;

/// Compile a CSS selector, reporting failures as `ScraperError::Parse`.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScraperError::Parse(format!("Invalid selector {}: {:?}", css, e)))
}
