// src/api/headers.rs
// =============================================================================
// Request headers come from a HeaderProvider.
//
// The reader never builds auth headers itself. Whoever creates the reader
// decides where tokens come from and passes in a provider. StaticHeaders is
// the provider the CLI uses: a fixed token and API key from the config.
//
// Rust concepts:
// - Traits: HeaderProvider is an interface; any type can implement it
// - Send + Sync: the provider can be shared between async tasks through an Arc
// =============================================================================

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::ReadError;

/// Name of the API key header expected by the social API
pub const API_KEY_HEADER: &str = "x-noroff-api-key";

/// Supplies the headers sent with every request
pub trait HeaderProvider: Send + Sync {
    fn headers(&self) -> Result<HeaderMap, ReadError>;
}

/// Content type plus optional bearer token and API key
#[derive(Debug, Clone, Default)]
pub struct StaticHeaders {
    token: Option<String>,
    api_key: Option<String>,
}

impl StaticHeaders {
    pub fn new(token: Option<String>, api_key: Option<String>) -> Self {
        Self { token, api_key }
    }
}

impl HeaderProvider for StaticHeaders {
    fn headers(&self) -> Result<HeaderMap, ReadError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", token))?);
        }

        if let Some(key) = &self.api_key {
            headers.insert(HeaderName::from_static(API_KEY_HEADER), header_value(key)?);
        }

        Ok(headers)
    }
}

// Auth values are marked sensitive so they don't show up in Debug output
fn header_value(value: &str) -> Result<HeaderValue, ReadError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| ReadError::Header(format!("{} (value not shown)", e)))?;
    value.set_sensitive(true);
    Ok(value)
}
