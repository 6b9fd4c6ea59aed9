//! Data types for the IMDb ratings scraper
//!
//! The result of a scrape is a nested mapping. Its serialized shape is
//! `{"season": {label: {"title": {title: {"rating": "8.4"}}}}}`.

use indexmap::IndexMap;
use serde::Serialize;

/// String-keyed map that remembers insertion order.
///
/// Inserting an existing key replaces its value but keeps its original
/// position. Serializes as a map in insertion order.
pub type OrderedMap<V> = IndexMap<String, V>;

/// Season label (as displayed on the show page) to absolute season URL
pub type SeasonMap = OrderedMap<String>;

/// Rating record of a single episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    /// Rating exactly as displayed, e.g. "8.4"
    pub rating: String,
}

/// Episodes of one season, keyed by title in air order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EpisodeRatings {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub title: OrderedMap<Rating>,
}

impl EpisodeRatings {
    pub fn len(&self) -> usize {
        self.title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }

    /// Rating string of the episode with the given title
    pub fn rating(&self, title: &str) -> Option<&str> {
        self.title.get(title).map(|r| r.rating.as_str())
    }
}

/// Ratings of every episode of a show, keyed by season label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowRatings {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub season: OrderedMap<EpisodeRatings>,
}
