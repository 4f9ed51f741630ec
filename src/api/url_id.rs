// src/api/url_id.rs
// =============================================================================
// Where "read post" gets its post id from.
//
// The reader doesn't take an id argument. It asks an IdSource for the value
// stored under a key ("postID"), which in practice is the query string of
// the page the user is looking at, e.g.
//   https://example.com/post/index.html?postID=42
// =============================================================================

use url::Url;

/// Query parameter that carries the post id
pub const POST_ID_KEY: &str = "postID";

/// Looks up an identifier by key
pub trait IdSource: Send + Sync {
    fn id(&self, key: &str) -> Option<String>;
}

/// A page URL whose query string holds the ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl(Url);

impl PageUrl {
    pub fn parse(page: &str) -> Result<Self, url::ParseError> {
        Url::parse(page).map(PageUrl)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl From<Url> for PageUrl {
    fn from(url: Url) -> Self {
        PageUrl(url)
    }
}

impl IdSource for PageUrl {
    // First non-empty value wins, like URLSearchParams.get() with "?postID="
    // treated as absent
    fn id(&self, key: &str) -> Option<String> {
        self.0
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_post_id() {
        let page = PageUrl::parse("https://example.com/post/?postID=42&x=1").unwrap();
        assert_eq!(page.id(POST_ID_KEY), Some("42".to_string()));
    }

    #[test]
    fn test_missing_or_empty_id() {
        let page = PageUrl::parse("https://example.com/post/").unwrap();
        assert_eq!(page.id(POST_ID_KEY), None);

        let page = PageUrl::parse("https://example.com/post/?postID=").unwrap();
        assert_eq!(page.id(POST_ID_KEY), None);
    }

    #[test]
    fn test_from_url_keeps_the_page() {
        let url = Url::parse("https://example.com/post/?postID=9").unwrap();
        let page = PageUrl::from(url.clone());
        assert_eq!(page.as_url(), &url);
        assert_eq!(page.id(POST_ID_KEY), Some("9".to_string()));
    }

    #[test]
    fn test_key_is_case_sensitive_and_decoded() {
        let page = PageUrl::parse("https://example.com/?postid=1&postID=a%20b").unwrap();
        assert_eq!(page.id(POST_ID_KEY), Some("a b".to_string()));
    }
}
