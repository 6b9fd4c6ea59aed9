//! IMDb Show Ratings Core Library
//!
//! This crate scrapes the rating of every episode of a TV show from IMDb.
//!
//! # Features
//! - Discover season listing pages from a show page
//! - Collect episode titles and ratings per season, in air order
//! - Serialize the result as `{"season": {label: {"title": {title: {"rating": r}}}}}`
//! - Pluggable page fetcher for testing or custom transports

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, HttpFetcher, PageFetcher};
pub use error::{Result, ScraperError};
pub use scraper::ShowRatingScraper;
pub use types::{EpisodeRatings, OrderedMap, Rating, SeasonMap, ShowRatings};
