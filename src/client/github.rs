//! GitHub REST API client

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::time::Duration;

use super::RepoSource;
use super::classify::RemoteFailure;
use crate::error::{Error, Result};

/// Default API base URL
pub const API_BASE_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";

/// GitHub API client
///
/// Sends authenticated GET requests for pages of repository records. Failures
/// are returned raw; classification happens in the lister.
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
}

impl GitHubClient {
    /// Create a new client authenticated with `token`.
    pub fn new(token: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            Error::authentication("GitHub token contains invalid characters").with_cause(e)
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("github-repo-analyzer/", env!("CARGO_PKG_VERSION"))),
        );

        let http = HttpClient::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                Error::configuration(format!("Failed to build HTTP client: {}", e)).with_cause(e)
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_page(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> std::result::Result<Vec<Value>, RemoteFailure> {
        log::debug!("GET {} {:?}", url, params);

        let response = self.http.get(url).query(params).send().await?;
        let status = response.status();

        if status.is_success() {
            let records = response.json::<Vec<Value>>().await?;
            log::debug!("Received {} records", records.len());
            return Ok(records);
        }

        let headers = response.headers();
        let retry_after = headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let quota_exhausted = headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim() == "0");

        let body = response.text().await.unwrap_or_default();
        log::debug!("Request failed with {}: {}", status, body);

        Err(RemoteFailure::Status {
            status: status.as_u16(),
            body,
            retry_after,
            quota_exhausted,
        })
    }
}
