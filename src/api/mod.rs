// src/api/mod.rs
// =============================================================================
// Client for the social API's read endpoints.
//
// Submodules:
// - posts: the PostReader and its three operations
// - endpoints: URL construction for posts and profiles
// - headers: the HeaderProvider trait and a static implementation
// - url_id: the IdSource trait and PageUrl (ids from a page's query string)
// - query: limit/page/tag parameters
// =============================================================================

mod endpoints;
mod headers;
mod posts;
mod query;
mod url_id;

pub use endpoints::Endpoints;
pub use headers::{HeaderProvider, StaticHeaders, API_KEY_HEADER};
pub use posts::PostReader;
pub use query::{PageQuery, UserPostsMode, UserPostsQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use url_id::{IdSource, PageUrl, POST_ID_KEY};
