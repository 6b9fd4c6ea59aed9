//! Season discovery on IMDb show pages
//!
//! The show page carries an episode-navigation widget
//! (`div#title-episode-widget`) with one link per season listing page.

use scraper::Html;
use tracing::debug;

use crate::error::{Result, ScraperError};
use crate::types::SeasonMap;

use super::selector;

const STAGE: &str = "season discovery";

/// Substring marking a link to a season's episode listing
pub const SEASON_QUERY: &str = "episodes?season=";

/// Parse season links from a show page.
///
/// # Arguments
/// * `html` - Raw HTML of the show page
/// * `base_url` - Scheme and host prepended to each (site-relative) href
/// * `page_url` - URL the page came from, used in error messages
///
/// # Returns
/// * `Ok(SeasonMap)` mapping the link text to `base_url + href`, in document order
/// * `Err(ScraperError::MalformedPage)` if the episode widget is missing
pub fn parse_seasons(html: &str, base_url: &str, page_url: &str) -> Result<SeasonMap> {
    let document = Html::parse_document(html);
    let widget_selector = selector("div#title-episode-widget")?;
    let link_selector = selector("a")?;

    let widget = document
        .select(&widget_selector)
        .next()
        .ok_or_else(|| {
            ScraperError::malformed(page_url, STAGE, "missing div#title-episode-widget")
        })?;

    let mut seasons = SeasonMap::new();
    for link in widget.select(&link_selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.contains(SEASON_QUERY) {
            continue;
        }

        let label = link.text().collect::<String>().trim().to_string();
        if label.is_empty() {
            debug!("Skipping season link without text: {}", href);
            continue;
        }

        seasons.insert(label, format!("{}{}", base_url, href));
    }

    Ok(seasons)
}
