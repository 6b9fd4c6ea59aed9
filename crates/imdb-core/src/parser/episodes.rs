//! Episodes parser for IMDb season pages
//!
//! A season listing page has one `div[itemprop="episodes"]` block per
//! episode inside `div#main`, each with a name link and a rating star.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScraperError};
use crate::types::{EpisodeRatings, OrderedMap, Rating};

use super::selector;

const STAGE: &str = "episode collection";

/// Parse episode titles and ratings from a season page.
///
/// # Arguments
/// * `html` - Raw HTML content of the season page
/// * `page_url` - URL the page came from, used in error messages
///
/// # Returns
/// * `Ok(EpisodeRatings)` keyed by episode title in document order; rating text is kept verbatim
/// * `Err(ScraperError::MalformedPage)` if `div#main` or a block's name/rating is missing
pub fn parse_season_episodes(html: &str, page_url: &str) -> Result<EpisodeRatings> {
    let document = Html::parse_document(html);
    let main_selector = selector("div#main")?;
    let episode_selector = selector(r#"div[itemprop="episodes"]"#)?;
    let name_selector = selector(r#"a[itemprop="name"]"#)?;
    let rating_selector = selector("span.ipl-rating-star__rating")?;

    let main = document
        .select(&main_selector)
        .next()
        .ok_or_else(|| ScraperError::malformed(page_url, STAGE, "missing div#main"))?;

    let mut title = OrderedMap::new();
    for (index, block) in main.select(&episode_selector).enumerate() {
        let (episode_title, rating) =
            parse_episode_block(&block, &name_selector, &rating_selector).map_err(|reason| {
                ScraperError::malformed(page_url, STAGE, format!("episode #{}: {}", index + 1, reason))
            })?;
        title.insert(episode_title, Rating { rating });
    }

    Ok(EpisodeRatings { title })
}

/// Pull `(title, rating)` out of one episode block, or say what is missing.
fn parse_episode_block(
    block: &ElementRef,
    name_selector: &Selector,
    rating_selector: &Selector,
) -> std::result::Result<(String, String), &'static str> {
    let name = block
        .select(name_selector)
        .next()
        .ok_or("missing a[itemprop=name]")?;
    let title = name
        .value()
        .attr("title")
        .ok_or("name link has no title attribute")?;
    if title.is_empty() {
        return Err("name link has an empty title attribute");
    }

    let rating = block
        .select(rating_selector)
        .next()
        .ok_or("missing span.ipl-rating-star__rating")?
        .text()
        .collect::<String>();

    Ok((title.to_string(), rating))
}
