// src/api/query.rs
// =============================================================================
// Query parameters for the paged operations.
//
// These structs ARE the query string: reqwest's RequestBuilder::query()
// runs them through serde, so a field named `limit` becomes `limit=12`.
// Field order is the order the pairs appear in the URL.
//
// The API does the validation; values are passed through as-is.
// =============================================================================

use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 12;
pub const DEFAULT_PAGE: u32 = 1;

/// `limit` / `page` for the posts collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub limit: u32,
    pub page: u32,
}

impl PageQuery {
    pub fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

/// Arguments accepted by "list posts by user"
///
/// Whether they reach the server depends on [`UserPostsMode`]. When they do,
/// the tag is sent as `_tag` and left out entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPostsQuery {
    pub limit: u32,
    pub page: u32,
    #[serde(rename = "_tag", skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Default for UserPostsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
            tag: None,
        }
    }
}

/// How "list posts by user" treats its `limit`/`page`/`tag` arguments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserPostsMode {
    /// Accept the arguments but send a bare `{profiles}/{username}/posts`.
    /// Existing callers rely on this request shape.
    #[default]
    Compatible,
    /// Forward `limit`, `page` and `_tag` as query parameters
    Filtered,
}

// Appends `_author=true` after whatever `query` serializes to, so posts come
// back with their author embedded.
//
// #[serde(flatten)] inlines the inner struct's fields into this one, so
// WithAuthor { query: PageQuery { limit: 5, page: 2 }, .. } serializes as
// limit=5&page=2&_author=true. With `()` as the inner query only
// `_author=true` is left.
#[derive(Debug, Serialize)]
pub(crate) struct WithAuthor<Q> {
    #[serde(flatten)]
    query: Q,
    #[serde(rename = "_author")]
    author: bool,
}

impl<Q: Serialize> WithAuthor<Q> {
    pub(crate) fn new(query: Q) -> Self {
        Self {
            query,
            author: true,
        }
    }
}
