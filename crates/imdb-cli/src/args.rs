//! Command-line arguments

use clap::Parser;
use imdb_core::ClientConfig;

/// Print the rating of every episode of an IMDb show as JSON.
#[derive(Debug, Parser)]
#[command(name = "imdb-ratings", version, about)]
pub struct Args {
    /// Show URL, e.g. https://www.imdb.com/title/tt0944947/
    pub url: String,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Override the User-Agent header
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Override the Accept-Language header
    #[arg(long, value_name = "LANG")]
    pub accept_language: Option<String>,

    /// Fail on non-success HTTP status codes instead of parsing the body
    #[arg(long)]
    pub strict_status: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// HTTP client configuration derived from the flags
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout_secs: self.timeout,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            accept_language: self
                .accept_language
                .clone()
                .unwrap_or(defaults.accept_language),
            error_for_status: self.strict_status,
        }
    }

    /// Default log filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "imdb_core=debug,imdb_ratings=debug,warn"
        } else {
            "imdb_core=info,imdb_ratings=info,warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_defaults_match_client_config() {
        let args = Args::try_parse_from(["imdb-ratings", "https://www.imdb.com/title/tt0944947/"])
            .unwrap();
        let config = args.client_config();
        let defaults = ClientConfig::default();

        assert_eq!(args.url, "https://www.imdb.com/title/tt0944947/");
        assert!(!args.pretty);
        assert_eq!(config.timeout_secs, defaults.timeout_secs);
        assert_eq!(config.user_agent, defaults.user_agent);
        assert_eq!(config.accept_language, defaults.accept_language);
        assert!(!config.error_for_status);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "imdb-ratings",
            "--pretty",
            "--timeout",
            "5",
            "--user-agent",
            "ratings-bot/0.1",
            "--accept-language",
            "de-DE",
            "--strict-status",
            "https://www.imdb.com/title/tt0165598/",
        ])
        .unwrap();
        let config = args.client_config();

        assert!(args.pretty);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, "ratings-bot/0.1");
        assert_eq!(config.accept_language, "de-DE");
        assert!(config.error_for_status);
    }

    #[test]
    fn test_url_is_required() {
        assert!(Args::try_parse_from(["imdb-ratings"]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Args::try_parse_from(["imdb-ratings", "--timeout", "0", "http://x"]).is_err());

        let args = Args::try_parse_from(["imdb-ratings", "--timeout", "1", "http://x"]).unwrap();
        assert_eq!(args.client_config().timeout_secs, 1);
    }

    /// Run `check` with a subscriber built from `filter` as the current default.
    fn under_filter<R>(filter: &str, check: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .finish();
        tracing::subscriber::with_default(subscriber, check)
    }

    #[test]
    fn test_default_filter_enables_info_for_binary_and_core() {
        let args = Args::try_parse_from(["imdb-ratings", "http://x"]).unwrap();

        let (binary, core, binary_debug) = under_filter(args.log_filter(), || {
            (
                tracing::enabled!(Level::INFO),
                tracing::enabled!(target: "imdb_core::scraper", Level::INFO),
                tracing::enabled!(Level::DEBUG),
            )
        });
        assert!(binary, "binary info events filtered out");
        assert!(core, "core info events filtered out");
        assert!(!binary_debug);
    }

    #[test]
    fn test_verbose_filter_enables_debug_for_binary_and_core() {
        let args = Args::try_parse_from(["imdb-ratings", "-v", "http://x"]).unwrap();

        let (binary, core) = under_filter(args.log_filter(), || {
            (
                tracing::enabled!(Level::DEBUG),
                tracing::enabled!(target: "imdb_core::client", Level::DEBUG),
            )
        });
        assert!(binary, "binary debug events filtered out under -v");
        assert!(core, "core debug events filtered out under -v");
    }
}
