//! Public IP detection.

use crate::error::{Result, UpdateError};
use std::time::Duration;

/// IP-echo service queried for the machine's public address.
const DEFAULT_ENDPOINT: &str = "http://icanhazip.com";

/// Fetches the current public IPv4 address from an IP-echo service.
pub struct PublicIpFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl PublicIpFetcher {
    /// Create a fetcher pointed at the default echo service.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string())
    }

    /// Create a fetcher with a custom endpoint (for testing).
    pub fn with_endpoint(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, endpoint }
    }

    /// Fetch the current public IPv4 address.
    ///
    /// The response body is trimmed and checked structurally; anything that
    /// is not a dotted quad is an [`UpdateError::InvalidPublicIp`].
    pub async fn fetch(&self) -> Result<String> {
        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(UpdateError::Network(format!(
                "HTTP {} from {}",
                response.status(),
                self.endpoint
            )));
        }

        let text = response.text().await?;
        let ip = text.trim();

        if !is_dotted_quad(ip) {
            return Err(UpdateError::InvalidPublicIp(ip.to_string()));
        }

        tracing::debug!("Public IP: '{}'", ip);
        Ok(ip.to_string())
    }
}

impl Default for PublicIpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Four dot-separated groups of 1-3 digits. Structural only, no 0-255
/// range check.
fn is_dotted_quad(s: &str) -> bool {
    let mut groups = 0;
    for group in s.split('.') {
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn dotted_quad_accepts_plain_addresses() {
        assert!(is_dotted_quad("203.0.113.5"));
        assert!(is_dotted_quad("0.0.0.0"));
        // No range validation by design.
        assert!(is_dotted_quad("999.1.1.1"));
    }

    #[test]
    fn dotted_quad_rejects_malformed_input() {
        assert!(!is_dotted_quad("not-an-ip"));
        assert!(!is_dotted_quad("1.2.3"));
        assert!(!is_dotted_quad("1.2.3.4.5"));
        assert!(!is_dotted_quad("1..2.3"));
        assert!(!is_dotted_quad("1.2.3.4444"));
        assert!(!is_dotted_quad(""));
    }

    #[tokio::test]
    async fn fetch_trims_surrounding_whitespace() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("203.0.113.5\n"))
            .mount(&mock_server)
            .await;

        let fetcher = PublicIpFetcher::with_endpoint(mock_server.uri());
        let ip = fetcher.fetch().await.unwrap();

        assert_eq!(ip, "203.0.113.5");
    }

    #[tokio::test]
    async fn fetch_rejects_non_ip_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not-an-ip"))
            .mount(&mock_server)
            .await;

        let fetcher = PublicIpFetcher::with_endpoint(mock_server.uri());
        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, UpdateError::InvalidPublicIp(body) if body == "not-an-ip"));
    }

    #[tokio::test]
    async fn fetch_fails_on_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let fetcher = PublicIpFetcher::with_endpoint(mock_server.uri());
        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, UpdateError::Network(_)));
    }
}
