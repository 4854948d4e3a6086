use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `http` or `https`, then `://`, then a run of non-whitespace.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("URL pattern must compile"));

/// An absolute `http(s)://` URL pulled out of shared text, kept verbatim.
///
/// Values only come out of [`extract_url`] or [`ExtractedUrl::new`], so a
/// held `ExtractedUrl` never contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExtractedUrl(String);

impl ExtractedUrl {
    /// Accepts `text` only if the whole string is a single URL.
    pub fn new(text: &str) -> Option<Self> {
        extract_url(text).filter(|url| url.0.len() == text.len())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExtractedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExtractedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ExtractedUrl> for String {
    fn from(url: ExtractedUrl) -> Self {
        url.0
    }
}

/// Finds the first URL in free-form text.
///
/// No normalization and no trimming of trailing punctuation: `"see
/// https://x.y/z."` yields `https://x.y/z.`. Later URLs are ignored.
pub fn extract_url(text: &str) -> Option<ExtractedUrl> {
    URL_PATTERN
        .find(text)
        .map(|m| ExtractedUrl(m.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_url_from_surrounding_text() {
        let url = extract_url("check this out http://a.b/c nice").unwrap();
        assert_eq!(url.as_str(), "http://a.b/c");
    }

    #[test]
    fn test_no_url_yields_none() {
        assert!(extract_url("just some words").is_none());
        assert!(extract_url("").is_none());
        assert!(extract_url("ftp://files.example.com/a").is_none());
        // Needs at least one character after the scheme separator.
        assert!(extract_url("http:// trailing").is_none());
    }

    #[test]
    fn test_only_first_url_is_returned() {
        let text = "first https://open.spotify.com/track/1 then https://music.apple.com/2";
        let url = extract_url(text).unwrap();
        assert_eq!(url.as_str(), "https://open.spotify.com/track/1");
    }

    #[test]
    fn test_trailing_punctuation_is_kept() {
        let url = extract_url("Listen: https://youtu.be/abc?si=xyz!").unwrap();
        assert_eq!(url.as_str(), "https://youtu.be/abc?si=xyz!");
    }

    #[test]
    fn test_stops_at_any_whitespace() {
        assert_eq!(
            extract_url("https://deezer.page.link/q\tmore").unwrap().as_str(),
            "https://deezer.page.link/q"
        );
        assert_eq!(
            extract_url("https://a.b/c\nnext line").unwrap().as_str(),
            "https://a.b/c"
        );
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert!(extract_url("HTTPS://EXAMPLE.COM").is_none());
    }

    #[test]
    fn test_url_embedded_in_word_is_found() {
        let url = extract_url("link:https://tidal.com/browse/track/9").unwrap();
        assert_eq!(url.as_str(), "https://tidal.com/browse/track/9");
    }

    #[test]
    fn test_new_requires_whole_input() {
        assert!(ExtractedUrl::new("http://x").is_some());
        assert!(ExtractedUrl::new(" http://x").is_none());
        assert!(ExtractedUrl::new("http://x y").is_none());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let url = ExtractedUrl::new("https://a.b/c").unwrap();
        assert_eq!(serde_json::to_string(&url).unwrap(), "\"https://a.b/c\"");
    }
}
