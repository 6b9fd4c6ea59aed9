use imdb_core::ShowRatingScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.imdb.com/title/tt0944947/".to_string());

    println!("Fetching ratings for {}\n", url);

    let scraper = ShowRatingScraper::new(url)?;
    let ratings = scraper.get_rates().await?;

    for (season, episodes) in ratings.season.iter() {
        println!("Season {} ({} episodes)", season, episodes.len());
        for (title, rating) in episodes.title.iter() {
            println!("  {:<50} {}", title, rating.rating);
        }
        println!();
    }

    Ok(())
}
