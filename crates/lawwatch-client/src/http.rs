//! HTTP client for the law backend's listing and search endpoints.

use std::time::Duration;

use lawwatch_core::{Law, LawsEnvelope, SearchEnvelope};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("invalid API token: {0}")]
    Token(#[from] reqwest::header::InvalidHeaderValue),
}

/// HTTP client for the law backend.
///
/// Holds a fixed base URL and a per-request timeout. When a bearer token is
/// configured it is attached to every outbound request.
pub struct LawClient {
    client: reqwest::Client,
    base_url: String,
}

impl LawClient {
    /// Create a client for the given backend base URL.
    ///
    /// `base_url` should be like `https://backend.example.org` (no trailing
    /// slash).
    pub fn new(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the law list.
    ///
    /// With `new_only`, the backend restricts the list to recent records,
    /// ordered newest first.
    pub async fn laws(&self, new_only: bool) -> Result<Vec<Law>, ClientError> {
        let mut url = format!("{}/users/laws/", self.base_url);
        if new_only {
            url.push_str("?new=true");
        }

        info!(url = %url, "fetching laws");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: LawsEnvelope = resp.json().await?;
        info!(count = envelope.laws.len(), "fetched laws");
        Ok(envelope.laws)
    }

    /// Search recent laws matching the selected category.
    pub async fn search(&self, query: &str) -> Result<Vec<Law>, ClientError> {
        let url = format!("{}/users/search/", self.base_url);

        info!(url = %url, query = %query, "searching laws");
        let resp = self
            .client
            .get(&url)
            .query(&[("category", "laws"), ("query", query), ("new", "true")])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: SearchEnvelope = resp.json().await?;
        info!(count = envelope.results.len(), "search complete");
        Ok(envelope.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client =
            LawClient::new("http://localhost:4000/", None, Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url, "http://localhost:4000");
    }

    #[test]
    fn token_with_line_break_is_rejected() {
        let result = LawClient::new(
            "http://localhost:4000",
            Some("bad\ntoken"),
            Duration::from_secs(10),
        );
        assert!(matches!(result, Err(ClientError::Token(_))));
    }

    #[test]
    fn valid_token_accepted() {
        let result = LawClient::new(
            "http://localhost:4000",
            Some("secret-token"),
            Duration::from_secs(10),
        );
        assert!(result.is_ok());
    }
}
