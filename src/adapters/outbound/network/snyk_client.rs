use super::http::{HttpMethod, RetryPolicy};
use crate::ports::outbound::SbomTestRepository;
use crate::shared::error::SbomError;
use crate::shared::{ApiToken, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.snyk.io";
pub const DEFAULT_API_VERSION: &str = "2024-10-15~beta";

const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Why a single attempt did not produce a response body
enum AttemptFailure {
    RateLimited,
    Failed(String),
}

/// SnykClient adapter for the Snyk REST API
///
/// Implements the SbomTestRepository port. Every request carries the
/// JSON:API content type and the token header, and goes through the same
/// retry loop.
pub struct SnykClient {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
    token: ApiToken,
    retry: RetryPolicy,
}

impl SnykClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the public Snyk API with the default retry policy
    pub fn new(token: ApiToken) -> Result<Self> {
        Self::with_settings(
            token,
            DEFAULT_BASE_URL,
            DEFAULT_API_VERSION,
            RetryPolicy::default(),
        )
    }

    pub fn with_settings(
        token: ApiToken,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        retry: RetryPolicy,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bazel-sbom/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self::with_client(client, token, base_url, api_version, retry))
    }

    /// Creates a client around a preconfigured reqwest client
    pub fn with_client(
        client: reqwest::Client,
        token: ApiToken,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_version: api_version.into(),
            token,
            retry,
        }
    }

    pub fn sbom_tests_url(&self, org_id: &str) -> String {
        format!(
            "{}/rest/orgs/{}/sbom_tests?version={}",
            self.base_url,
            urlencoding::encode(org_id),
            urlencoding::encode(&self.api_version)
        )
    }

    pub fn sbom_test_url(&self, org_id: &str, test_run_id: &str) -> String {
        format!(
            "{}/rest/orgs/{}/sbom_tests/{}?version={}",
            self.base_url,
            urlencoding::encode(org_id),
            urlencoding::encode(test_run_id),
            urlencoding::encode(&self.api_version)
        )
    }

    /// Sends a request and returns the JSON body of the first successful
    /// response
    ///
    /// # Errors
    /// Returns `SbomError::ApiRequestFailed` once every attempt allowed by
    /// the retry policy has failed
    pub async fn send(&self, method: HttpMethod, url: &str, body: Option<&Value>) -> Result<Value> {
        let payload = body.map(serde_json::to_vec).transpose()?;
        let mut last_failure = String::new();

        for attempt in 1..=self.retry.max_attempts {
            tracing::debug!(%method, url, attempt, "Sending API request");

            let rate_limited = match self.attempt(method, url, payload.as_deref()).await {
                Ok(value) => return Ok(value),
                Err(AttemptFailure::RateLimited) => {
                    last_failure = "API rate limit exceeded (HTTP 429)".to_string();
                    true
                }
                Err(AttemptFailure::Failed(details)) => {
                    last_failure = details;
                    false
                }
            };

            tracing::warn!(
                "Attempt {} of {} failed: {}",
                attempt,
                self.retry.max_attempts,
                last_failure
            );

            if let Some(pause) = self.retry.pause_after(attempt, rate_limited) {
                if rate_limited {
                    tracing::warn!("Rate limit exceeded. Waiting {} seconds.", pause.as_secs());
                }
                tokio::time::sleep(pause).await;
            }
        }

        Err(SbomError::ApiRequestFailed {
            method: method.to_string(),
            url: url.to_string(),
            attempts: self.retry.max_attempts,
            details: last_failure,
        }
        .into())
    }

    async fn attempt(
        &self,
        method: HttpMethod,
        url: &str,
        payload: Option<&[u8]>,
    ) -> std::result::Result<Value, AttemptFailure> {
        let mut request = self
            .client
            .request(method.into(), url)
            .header(CONTENT_TYPE, JSON_API_CONTENT_TYPE)
            .header(AUTHORIZATION, self.token.authorization_header());
        if let Some(bytes) = payload {
            request = request.body(bytes.to_vec());
        }

        let response = request
            .send()
            .await
            .map_err(|e| AttemptFailure::Failed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AttemptFailure::RateLimited);
        }
        if !status.is_success() {
            return Err(AttemptFailure::Failed(format!(
                "API returned status code {}",
                status
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AttemptFailure::Failed(format!("Response is not valid JSON: {}", e)))
    }
}

#[async_trait]
impl SbomTestRepository for SnykClient {
    async fn create_test_run(&self, org_id: &str, sbom: &Value) -> Result<Value> {
        let body = json!({
            "data": {
                "type": "sbom_test",
                "attributes": { "sbom": sbom }
            }
        });
        self.send(HttpMethod::Post, &self.sbom_tests_url(org_id), Some(&body))
            .await
    }

    async fn get_test_run_status(&self, org_id: &str, test_run_id: &str) -> Result<Value> {
        self.send(HttpMethod::Get, &self.sbom_test_url(org_id, test_run_id), None)
            .await
    }
}
