use crate::config::QuoteSettings;
use crate::models::Quote;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Upper bound on an upstream quote body; a quote is a few hundred bytes
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Errors that can occur when fetching a quote from upstream
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Anything that can produce one quote per call
///
/// The proxy route only depends on this trait, so the real provider can be
/// swapped for a fake in tests.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self) -> Result<Quote, QuoteError>;
}

/// Quote provider API client
///
/// Issues exactly one GET per call. No retries, no caching.
pub struct QuoteClient {
    endpoint: String,
    tags: Vec<String>,
    max_body_bytes: usize,
    client: Client,
}

impl QuoteClient {
    /// Create a new quote client
    ///
    /// Without a timeout the client keeps reqwest's default behaviour.
    pub fn new(
        endpoint: String,
        tags: Vec<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, QuoteError> {
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint,
            tags,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            client: builder.build()?,
        })
    }

    /// Reject upstream bodies larger than `limit` bytes
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    pub fn from_settings(settings: &QuoteSettings) -> Result<Self, QuoteError> {
        Ok(Self::new(
            settings.endpoint.clone(),
            settings.tags.clone(),
            settings.timeout_secs.map(Duration::from_secs),
        )?
        .with_max_body_bytes(settings.max_body_bytes))
    }

    /// Full upstream URL including the tag filter
    pub fn request_url(&self) -> String {
        if self.tags.is_empty() {
            return self.endpoint.clone();
        }

        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}tags={}",
            self.endpoint,
            separator,
            urlencoding::encode(&self.tags.join("|"))
        )
    }
}

fn body_too_large(limit: usize) -> QuoteError {
    QuoteError::InvalidResponse(format!("Quote body exceeds {} bytes", limit))
}

#[async_trait]
impl QuoteSource for QuoteClient {
    async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
        let url = self.request_url();

        tracing::debug!("Fetching quote from: {}", url);

        let mut response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::UpstreamStatus(status));
        }

        if let Some(len) = response.content_length() {
            if len > self.max_body_bytes as u64 {
                return Err(body_too_large(self.max_body_bytes));
            }
        }

        // Content-Length may be absent or wrong, so the cap is enforced per chunk too
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(body_too_large(self.max_body_bytes));
            }
            body.extend_from_slice(&chunk);
        }

        Quote::from_json_bytes(body)
            .map_err(|e| QuoteError::InvalidResponse(format!("Failed to parse quote: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str, tags: &[&str]) -> QuoteClient {
        QuoteClient::new(
            endpoint.to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_request_url_encodes_tags() {
        let client = client("https://api.quotable.io/random", &["inspirational", "wisdom"]);
        assert_eq!(
            client.request_url(),
            "https://api.quotable.io/random?tags=inspirational%7Cwisdom"
        );
    }

    #[test]
    fn test_request_url_without_tags() {
        let client = client("https://quotes.test/random", &[]);
        assert_eq!(client.request_url(), "https://quotes.test/random");
    }

    #[test]
    fn test_request_url_appends_to_existing_query() {
        let client = client("https://quotes.test/random?lang=en", &["hope"]);
        assert_eq!(client.request_url(), "https://quotes.test/random?lang=en&tags=hope");
    }

    #[test]
    fn test_from_settings_applies_body_limit() {
        let settings = QuoteSettings {
            max_body_bytes: 128,
            ..QuoteSettings::default()
        };
        let client = QuoteClient::from_settings(&settings).unwrap();
        assert_eq!(client.max_body_bytes, 128);
        assert_eq!(
            client.request_url(),
            "https://api.quotable.io/random?tags=inspirational%7Cwisdom%7Chope"
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = QuoteError::UpstreamStatus(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Upstream returned status 503 Service Unavailable");
    }
}
