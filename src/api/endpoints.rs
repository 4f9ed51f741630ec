// src/api/endpoints.rs
// =============================================================================
// Builds the URLs for the three read operations.
//
// URL layout (relative to the API base, e.g. https://v2.api.noroff.dev):
//   posts collection:  {base}/social/posts
//   single post:       {base}/social/posts/{id}
//   posts by a user:   {base}/social/profiles/{username}/posts
//
// This module only deals with paths. Query strings (?limit=..&page=..) are
// described by the serde structs in query.rs and attached by reqwest when
// the request is sent.
//
// Rust concepts:
// - url::Url: a parsed URL we can modify safely, instead of gluing strings
// - Result: building a URL can fail (e.g. "mailto:" URLs have no path)
// =============================================================================

use url::Url;

use crate::error::ReadError;

/// Base URLs for the posts and profiles collections
//
// Clone is cheap enough here: two Urls, cloned once per PostReader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    posts: Url,
    profiles: Url,
}

impl Endpoints {
    /// Derives both collections from the API root
    pub fn new(api_base: &Url) -> Result<Self, ReadError> {
        Ok(Self {
            posts: with_segments(api_base, &["social", "posts"])?,
            profiles: with_segments(api_base, &["social", "profiles"])?,
        })
    }

    /// Uses explicit collection URLs (for APIs with a different layout)
    pub fn with_bases(posts: Url, profiles: Url) -> Self {
        Self { posts, profiles }
    }

    pub fn posts(&self) -> &Url {
        &self.posts
    }

    pub fn profiles(&self) -> &Url {
        &self.profiles
    }

    /// `{posts}/{id}`
    pub fn post(&self, id: &str) -> Result<Url, ReadError> {
        with_segments(&self.posts, &[id])
    }

    /// `{profiles}/{username}/posts`
    pub fn user_posts(&self, username: &str) -> Result<Url, ReadError> {
        with_segments(&self.profiles, &[username, "posts"])
    }
}

// Appends path segments to a copy of `base`
//
// path_segments_mut() percent-encodes each segment, so an id like "a/b"
// becomes "a%2Fb" instead of adding an extra path level. pop_if_empty()
// drops the trailing empty segment of "https://host/" so that
// "https://host/" and "https://host" give the same result.
fn with_segments(base: &Url, segments: &[&str]) -> Result<Url, ReadError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
