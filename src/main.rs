// src/main.rs
// =============================================================================
// This is the entry point of the post-reader CLI.
//
// What happens here:
// 1. Set up logging (tracing, filtered by RUST_LOG, written to stderr)
// 2. Parse command-line arguments using clap
// 3. Build a PostReader from the connection settings
// 4. Run the requested operation and print the result
// 5. Exit with proper code (0 = success, 1 = API returned an error, 2 = other error)
//
// Rust concepts:
// - async/await: the requests are network I/O, run on the tokio runtime
// - anyhow::Result: any error type can bubble up to main with ?
// - match: one branch per subcommand
// =============================================================================

mod cli;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use post_reader::{Config, PageQuery, PageUrl, ReadError, UserPostsMode, UserPostsQuery};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so `--json` output on stdout stays machine-readable
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = config_from_cli(&cli);

    match cli.command {
        Commands::List { limit, page, json } => {
            let reader = config.reader()?;
            let posts = reader
                .list_posts(PageQuery::new(limit, page))
                .await
                .context("could not list posts")?;
            output::print_collection(&posts, json)
        }
        Commands::Read { page_url, json } => {
            let reader = config.reader()?;
            let page = PageUrl::from(page_url);
            let post = reader
                .read_post(&page)
                .await
                .context("could not read post")?;
            output::print_post(&post, json)
        }
        Commands::User {
            username,
            limit,
            page,
            tag,
            forward_user_filters,
            json,
        } => {
            if forward_user_filters {
                config.user_posts_mode = UserPostsMode::Filtered;
            }
            let reader = config.reader()?;
            let query = UserPostsQuery { limit, page, tag };
            let posts = reader
                .list_posts_by_user(&username, &query)
                .await
                .with_context(|| format!("could not list posts for {}", username))?;
            output::print_collection(&posts, json)
        }
    }
}

fn config_from_cli(cli: &Cli) -> Config {
    let mut config = Config::new(cli.api_base.clone());
    config.token = cli.token.clone();
    config.api_key = cli.api_key.clone();
    config.timeout = cli.timeout.map(Duration::from_secs);
    config
}

// 1 when the server answered with an error status, 2 for everything else
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ReadError>() {
        Some(e) if e.is_request() => 1,
        _ => 2,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the library use ReadError but main uses anyhow?
//    - Library callers need to tell errors apart (network vs HTTP status)
//    - The binary only needs to print them and pick an exit code
//    - `?` converts ReadError into anyhow::Error automatically
//
// 2. What does .context() add?
//    - A line of explanation on top of the original error
//    - `{:#}` prints the whole chain: "could not read post: Failed to fetch post: Not Found"
//
// 3. How does exit_code_for see through the context?
//    - downcast_ref::<ReadError>() finds the original error under the context
//
// 4. Why log to stderr?
//    - stdout is for results, so `post-reader list --json | jq` keeps working
// -----------------------------------------------------------------------------
