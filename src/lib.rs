// src/lib.rs
// =============================================================================
// post_reader: read posts from a social-media REST API.
//
// Three operations, all on PostReader:
// - list_posts: one page of posts (limit/page, author embedded)
// - read_post: a single post, id taken from the current page URL
// - list_posts_by_user: a profile's posts
//
// Headers and the post id come from collaborators passed in by the caller
// (HeaderProvider and IdSource), so nothing here reads global state.
//
// Example:
//   let reader = Config::default().reader()?;
//   let posts = reader.list_posts(PageQuery::new(5, 2)).await?;
// =============================================================================

pub mod api;
pub mod config;
pub mod error;

pub use api::{
    Endpoints, HeaderProvider, IdSource, PageQuery, PageUrl, PostReader, StaticHeaders,
    UserPostsMode, UserPostsQuery,
};
pub use config::Config;
pub use error::ReadError;
