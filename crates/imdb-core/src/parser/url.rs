//! Base URL extraction

use regex_lite::Regex;

use crate::error::{Result, ScraperError};

/// Scheme prefix, anchored at the start
const SCHEME_PATTERN: &str = r"^https?://";

/// Host characters: Unicode letters and digits, underscore and dot.
///
/// regex-lite's `\w` is ASCII-only, so the host is scanned by hand.
fn is_host_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Extract the scheme and host part of a full URL.
///
/// Everything from the first character that cannot belong to the host
/// (`/`, `:`, `?`, `#`, ...) onward is dropped.
///
/// # Errors
/// `ScraperError::InvalidUrl` if the URL does not start with `http://` or
/// `https://` followed by at least one host character.
///
/// # Examples
/// ```
/// use imdb_core::parser::extract_base_url;
///
/// assert_eq!(
///     extract_base_url("https://www.imdb.com/title/tt0944947/?ref_=nv_sr_1").unwrap(),
///     "https://www.imdb.com"
/// );
/// assert!(extract_base_url("www.imdb.com/title/tt0944947/").is_err());
/// ```
pub fn extract_base_url(url: &str) -> Result<String> {
    let re = Regex::new(SCHEME_PATTERN)
        .map_err(|e| ScraperError::Parse(format!("invalid scheme pattern: {}", e)))?;
    let invalid = || ScraperError::InvalidUrl(format!("could not extract base url from {}", url));

    let scheme_end = re.find(url).ok_or_else(invalid)?.end();
    let host_len: usize = url[scheme_end..]
        .chars()
        .take_while(|c| is_host_char(*c))
        .map(char::len_utf8)
        .sum();
    if host_len == 0 {
        return Err(invalid());
    }

    Ok(url[..scheme_end + host_len].to_string())
}
