// src/config.rs
// =============================================================================
// Runtime configuration: where the API lives and how to authenticate.
//
// The CLI fills this in from flags (with environment variable fallbacks,
// see cli.rs). Library users can build it directly.
// =============================================================================

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::api::{Endpoints, PostReader, StaticHeaders, UserPostsMode};
use crate::error::ReadError;

/// API root used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "https://v2.api.noroff.dev";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub token: Option<String>,
    pub api_key: Option<String>,
    /// None = wait as long as the server takes
    pub timeout: Option<Duration>,
    pub user_posts_mode: UserPostsMode,
}

impl Config {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            token: None,
            api_key: None,
            timeout: None,
            user_posts_mode: UserPostsMode::default(),
        }
    }

    /// Builds a PostReader with this config's endpoints, headers and client
    pub fn reader(&self) -> Result<PostReader, ReadError> {
        let endpoints = Endpoints::new(&self.api_base)?;
        let headers = StaticHeaders::new(self.token.clone(), self.api_key.clone());

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ReadError::Client)?;

        Ok(PostReader::new(endpoints, Arc::new(headers))
            .with_client(client)
            .with_user_posts_mode(self.user_posts_mode))
    }
}

impl Default for Config {
    fn default() -> Self {
        // The constant is a valid absolute URL
        Self::new(Url::parse(DEFAULT_API_BASE).expect("default API base is valid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_api() {
        let config = Config::default();
        assert_eq!(config.api_base.as_str(), "https://v2.api.noroff.dev/");
        assert!(config.timeout.is_none());
        assert_eq!(config.user_posts_mode, UserPostsMode::Compatible);
    }

    #[test]
    fn test_reader_uses_api_base() {
        let mut config = Config::new(Url::parse("http://localhost:8080/api").unwrap());
        config.timeout = Some(Duration::from_secs(3));
        let reader = config.reader().unwrap();
        assert_eq!(
            reader.endpoints().posts().as_str(),
            "http://localhost:8080/api/social/posts"
        );
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_network_error() {
        use crate::api::PageQuery;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": []}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let mut config = Config::new(Url::parse(&server.uri()).unwrap());
        config.timeout = Some(Duration::from_millis(200));

        let err = config
            .reader()
            .unwrap()
            .list_posts(PageQuery::default())
            .await
            .unwrap_err();
        assert!(err.is_network(), "expected a network error, got {:?}", err);
        assert!(err.status().is_none());
    }
}
