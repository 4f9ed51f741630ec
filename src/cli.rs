// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
//   post-reader list [--limit N] [--page N] [--json]
//   post-reader read <PAGE_URL> [--json]
//   post-reader user <USERNAME> [--limit N] [--page N] [--tag T]
//                    [--forward-user-filters] [--json]
//
// Connection settings are global flags. Each one can also come from an
// environment variable, so tokens don't have to be typed on the command line.
//
// Rust concepts:
// - Structs and enums with derive macros: clap generates the parser for us
// - Option<T>: flags the user may leave out (token, timeout, tag)
// =============================================================================

use clap::{Parser, Subcommand};
use post_reader::api::{DEFAULT_LIMIT, DEFAULT_PAGE};
use post_reader::config::DEFAULT_API_BASE;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "post-reader",
    version,
    about = "Read posts from a social-media REST API",
    long_about = "post-reader lists posts, reads a single post and lists a user's posts \
                  from the social API. Results are printed as a table or as raw JSON."
)]
pub struct Cli {
    /// API root; the posts and profiles collections live under /social
    #[arg(long, global = true, env = "POST_READER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: Url,

    /// Access token, sent as "Authorization: Bearer <token>"
    #[arg(long, global = true, env = "POST_READER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API key, sent in the X-Noroff-API-Key header
    #[arg(long, global = true, env = "POST_READER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: no timeout)
    ///
    /// Must be at least 1: a zero timeout would fail every request
    #[arg(long, global = true, env = "POST_READER_TIMEOUT", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, newest first, with author data
    ///
    /// Example: post-reader list --limit 5 --page 2
    List {
        /// Posts per page
        #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,

        /// Page number, starting at 1
        #[arg(long, default_value_t = DEFAULT_PAGE, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Output the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Read the post referenced by a page URL
    ///
    /// The post id is taken from the page's "postID" query parameter.
    ///
    /// Example: post-reader read "https://example.com/post/?postID=42"
    Read {
        /// Page URL carrying ?postID=<id>
        page_url: Url,

        /// Output the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the posts of one user
    ///
    /// Example: post-reader user alice
    User {
        /// Profile name
        username: String,

        /// Posts per page (only sent with --forward-user-filters)
        #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,

        /// Page number (only sent with --forward-user-filters)
        #[arg(long, default_value_t = DEFAULT_PAGE, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Tag filter (only sent with --forward-user-filters)
        #[arg(long)]
        tag: Option<String>,

        /// Send limit, page and tag to the server. Without this flag the
        /// request is the bare profile posts URL, as existing clients expect.
        #[arg(long)]
        forward_user_filters: bool,

        /// Output the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `global = true` do?
//    - The flag is accepted before OR after the subcommand
//    - `post-reader --timeout 5 list` and `post-reader list --timeout 5` both work
//
// 2. What does `env = "..."` do?
//    - If the flag is missing, clap reads the environment variable instead
//    - hide_env_values keeps secrets out of --help output
//
// 3. Why `value_parser!(u32).range(1..)`?
//    - clap rejects 0 while parsing, so the rest of the code never sees it
//    - The error message names the flag and the allowed range
//
// 4. Why is page_url a Url and not a String?
//    - Url implements FromStr, so clap parses and validates it for us
//    - A typo like "not a url" fails before any request is made
// -----------------------------------------------------------------------------
