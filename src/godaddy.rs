//! GoDaddy DNS records API client.

use crate::error::Result;
use crate::records::DnsRecord;
use reqwest::StatusCode;

const DEFAULT_BASE_URL: &str = "https://api.godaddy.com";

/// Client for GoDaddy's v1 domain records endpoint.
pub struct GoDaddyClient {
    client: reqwest::Client,
    api_key: String,
    api_secret: String,
    base_url: String,
}

/// Raw outcome of a record-set push.
///
/// A non-success status is not an error at this level; callers inspect
/// `status` and `body` and decide.
#[derive(Debug)]
pub struct PushResponse {
    /// HTTP status of the PUT.
    pub status: StatusCode,
    /// Response body text, as sent by the provider.
    pub body: String,
}

impl PushResponse {
    /// Whether the provider accepted the record set.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl GoDaddyClient {
    /// Create a client against the production API.
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self::with_base_url(api_key, api_secret, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (for testing).
    pub fn with_base_url(api_key: String, api_secret: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_secret,
            base_url,
        }
    }

    fn records_url(&self, domain: &str) -> String {
        format!("{}/v1/domains/{}/records", self.base_url, domain)
    }

    fn auth_header(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.api_secret)
    }

    /// Fetch the domain's full record set, in provider order.
    pub async fn get_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let response = self
            .client
            .get(self.records_url(domain))
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        let records = response.json().await?;
        Ok(records)
    }

    /// PUT a full record set back for the domain.
    ///
    /// Returns the raw status and body; see [`PushResponse`].
    pub async fn push_records(&self, domain: &str, records: &[DnsRecord]) -> Result<PushResponse> {
        let response = self
            .client
            .put(self.records_url(domain))
            .header("Authorization", self.auth_header())
            .json(&records)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(PushResponse { status, body })
    }
}
