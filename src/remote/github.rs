//! GitHub user search client.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::config::Config;
use crate::error::{LookaheadError, Result};
use crate::types::UserRecord;

use super::{FetchError, SearchClient, parse_search_response};

const USER_AGENT: &str = concat!("lookahead/", env!("CARGO_PKG_VERSION"));

/// Search client for `GET <api_url><encoded query>`.
pub struct GitHubSearchClient {
    client: Client,
    api_url: String,
    token: Option<SecretString>,
}

impl fmt::Debug for GitHubSearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubSearchClient")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GitHubSearchClient {
    /// Create a client from configuration
    ///
    /// The token is optional: unauthenticated search works, just with a much
    /// lower rate limit.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_http_client(config.request_timeout())?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.github_token().map(SecretString::from),
        })
    }

    /// Create an unauthenticated client for the given endpoint prefix
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_http_client(Duration::from_secs(30))?,
            api_url: api_url.into(),
            token: None,
        })
    }

    /// Full request URL for a query. The raw query is percent-encoded so
    /// spaces, `&` and `#` survive as part of the search term.
    pub fn request_url(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{}", self.api_url, encoded)
    }
}

fn build_http_client(timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .build()
        .map_err(LookaheadError::from)
}

impl SearchClient for GitHubSearchClient {
    async fn search_users(&self, query: &str) -> std::result::Result<Vec<UserRecord>, FetchError> {
        let mut request = self.client.get(self.request_url(query));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .unwrap_or_default();
            return Err(FetchError::status(status, message));
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_API_URL;

    #[test]
    fn test_request_url_encodes_query() {
        let client = GitHubSearchClient::new(DEFAULT_API_URL).unwrap();
        assert_eq!(
            client.request_url("octo cat&x"),
            "https://api.github.com/search/users?q=octo+cat%26x"
        );
    }

    #[test]
    fn test_request_url_plain_query() {
        let client = GitHubSearchClient::new("http://localhost/search?q=").unwrap();
        assert_eq!(client.request_url("octo"), "http://localhost/search?q=octo");
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut client = GitHubSearchClient::new(DEFAULT_API_URL).unwrap();
        client.token = Some(SecretString::from("ghp_secret".to_string()));
        let debug = format!("{client:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = GitHubSearchClient::new("http://127.0.0.1:9/search?q=").unwrap();
        let err = client.search_users("octo").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    }
}
