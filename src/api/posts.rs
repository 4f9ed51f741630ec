// src/api/posts.rs
// =============================================================================
// The post reader: three GET operations against the social API.
//
// Every operation has the same shape:
// 1. Ask the header provider for headers
// 2. Send a GET to the endpoint (with a query string, if the operation has one)
// 3. Check the HTTP status
// 4. Parse the JSON body and hand it back (or fail)
//
// There is no retry, no caching and no shared mutable state. A PostReader
// can be cloned and used from many tasks at once.
//
// Failures are logged with tracing::error! and then returned to the caller,
// who decides what to show the user.
//
// Rust concepts:
// - async fn: each operation suspends while waiting for the network
// - Arc<dyn Trait>: a shared, swappable collaborator (the header provider)
// - Generics with trait bounds: send() accepts any query that implements Serialize
// =============================================================================

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use super::endpoints::Endpoints;
use super::headers::HeaderProvider;
use super::query::{PageQuery, UserPostsMode, UserPostsQuery, WithAuthor};
use super::url_id::{IdSource, POST_ID_KEY};
use crate::error::ReadError;

// #[derive(Clone)] works because every field is cheap to clone:
// reqwest::Client and Arc are both reference-counted handles
#[derive(Clone)]
pub struct PostReader {
    client: Client,
    endpoints: Endpoints,
    headers: Arc<dyn HeaderProvider>,
    user_posts_mode: UserPostsMode,
}

impl PostReader {
    /// Creates a reader with a default HTTP client (no timeout)
    pub fn new(endpoints: Endpoints, headers: Arc<dyn HeaderProvider>) -> Self {
        Self {
            client: Client::new(),
            endpoints,
            headers,
            user_posts_mode: UserPostsMode::default(),
        }
    }

    /// Uses a preconfigured client (timeouts, proxies, ...)
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_user_posts_mode(mut self, mode: UserPostsMode) -> Self {
        self.user_posts_mode = mode;
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetches one page of posts with author data embedded.
    ///
    /// The body (posts plus pagination `meta`) is returned unmodified.
    pub async fn list_posts(&self, query: PageQuery) -> Result<Value, ReadError> {
        let url = self.endpoints.posts();

        // limit=..&page=..&_author=true
        let query = WithAuthor::new(query);

        self.fetch_posts(url, &query)
            .await
            .map_err(|e| report("list_posts", url, e))
    }

    /// Fetches the post whose id is stored under `postID` in `page`.
    ///
    /// Only the `data` field of the response is returned. A body without
    /// `data` gives `Value::Null`.
    pub async fn read_post(&self, page: &dyn IdSource) -> Result<Value, ReadError> {
        // No id means no request: fail before touching the network
        let id = page.id(POST_ID_KEY).ok_or_else(|| ReadError::MissingId {
            key: POST_ID_KEY.to_string(),
        });
        let url = match id.and_then(|id| self.endpoints.post(&id)) {
            Ok(url) => url,
            Err(e) => return Err(report("read_post", self.endpoints.posts(), e)),
        };

        self.fetch_post(&url)
            .await
            .map_err(|e| report("read_post", &url, e))
    }

    /// Fetches the posts of `username`.
    ///
    /// In [`UserPostsMode::Compatible`] (the default) the `limit`, `page`
    /// and `tag` arguments are accepted but not sent: the request is always
    /// `{profiles}/{username}/posts`. [`UserPostsMode::Filtered`] forwards
    /// them as `limit`, `page` and `_tag`.
    ///
    /// On a non-success status the error carries the server's `message`.
    pub async fn list_posts_by_user(
        &self,
        username: &str,
        query: &UserPostsQuery,
    ) -> Result<Value, ReadError> {
        let filters = match self.user_posts_mode {
            UserPostsMode::Compatible => None,
            UserPostsMode::Filtered => Some(query),
        };
        let url = match self.endpoints.user_posts(username) {
            Ok(url) => url,
            Err(e) => return Err(report("list_posts_by_user", self.endpoints.profiles(), e)),
        };

        self.fetch_user_posts(&url, filters)
            .await
            .map_err(|e| report("list_posts_by_user", &url, e))
    }

    async fn fetch_posts<Q: Serialize>(&self, url: &Url, query: &Q) -> Result<Value, ReadError> {
        let (status, body) = self.send(url, Some(query)).await?;
        if !status.is_success() {
            return Err(ReadError::Request {
                status,
                message: format!("Failed to fetch posts: {}", status_text(status)),
            });
        }
        decode(url, &body)
    }

    async fn fetch_post(&self, url: &Url) -> Result<Value, ReadError> {
        let (status, body) = self.send(url, Some(&WithAuthor::new(()))).await?;
        if !status.is_success() {
            return Err(ReadError::Request {
                status,
                message: format!("Failed to fetch post: {}", status_text(status)),
            });
        }
        let envelope = decode(url, &body)?;
        debug!(url = %url, response = %envelope, "post response");
        Ok(take_data(envelope))
    }

    async fn fetch_user_posts(
        &self,
        url: &Url,
        filters: Option<&UserPostsQuery>,
    ) -> Result<Value, ReadError> {
        let (status, body) = self.send(url, filters).await?;
        // The body is parsed before the status check so error responses
        // can contribute their message
        let parsed = decode(url, &body);

        if status.is_success() {
            return parsed;
        }

        // Option chaining: take the parsed body if there is one, look for a
        // message in it, and fall back to the status text otherwise
        let message = parsed
            .ok()
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| status_text(status).to_string());

        Err(ReadError::Request {
            status,
            message: format!("Failed to fetch posts: {}", message),
        })
    }

    // Sends the GET and reads the whole body. Only transport failures are
    // errors here; status handling is up to the caller.
    //
    // `query` is serialized by reqwest (serde under the hood). With None
    // the URL goes out without a query string at all.
    async fn send<Q: Serialize + ?Sized>(
        &self,
        url: &Url,
        query: Option<&Q>,
    ) -> Result<(StatusCode, Vec<u8>), ReadError> {
        let headers = self.headers.headers()?;

        let mut builder = self.client.get(url.clone()).headers(headers);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        // build() is where a query that can't be encoded shows up
        let request = builder.build().map_err(ReadError::Query)?;
        let full_url = request.url().to_string();

        debug!(url = %full_url, "GET");

        // One closure for both network failure points below; it only borrows
        // `full_url`, so it is Copy and can be passed to map_err twice
        let network = |source| ReadError::Network {
            url: full_url.clone(),
            source,
        };

        let response = self.client.execute(request).await.map_err(network)?;

        let status = response.status();
        let body = response.bytes().await.map_err(network)?;

        debug!(url = %full_url, status = status.as_u16(), bytes = body.len(), "response");

        Ok((status, body.to_vec()))
    }
}

fn decode(url: &Url, body: &[u8]) -> Result<Value, ReadError> {
    serde_json::from_slice(body).map_err(|source| ReadError::Decode {
        url: url.to_string(),
        source,
    })
}

// Keeps only the envelope's `data`; anything else becomes Null
fn take_data(envelope: Value) -> Value {
    match envelope {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

// `message` at the top level, else the first entry of an `errors` array
//
// The ? inside the closure works on Option: any missing step returns None
fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("errors")?.get(0)?.get("message")?.as_str())
        .map(str::to_string)
}

// Reason phrase for the status, e.g. "Not Found"
fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

// Logs a failed operation and hands the error back unchanged, so callers
// can write `.map_err(|e| report(..))` and still propagate with ?
fn report(operation: &'static str, url: &Url, err: ReadError) -> ReadError {
    error!(
        operation,
        url = %url,
        status = err.status().map(|s| s.as_u16()),
        error = %err,
        "request failed"
    );
    err
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return serde_json::Value instead of a Post struct?
//    - The API's response shape isn't checked here; callers get exactly what
//      the server sent
//    - Value is an enum (Null, Bool, Number, String, Array, Object), so any
//      JSON fits
//
// 2. Why does report() take the error by value and return it?
//    - It logs, then gives ownership back, so nothing is cloned
//    - map_err(|e| report(..)) keeps the error flowing to the caller
//
// 3. What is &dyn IdSource?
//    - A reference to "anything that implements IdSource"
//    - Tests pass a PageUrl; other callers can pass their own type
// -----------------------------------------------------------------------------
