use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// SbomTestRepository port for the remote SBOM test service
///
/// Responses are returned as raw JSON:API documents; interpreting them is
/// the use case's job.
#[async_trait]
pub trait SbomTestRepository: Send + Sync {
    /// Submits an SBOM document and starts a test run
    ///
    /// # Arguments
    /// * `org_id` - Organization that owns the test run
    /// * `sbom` - The CycloneDX document, embedded as `data.attributes.sbom`
    ///
    /// # Errors
    /// Returns an error if every attempt fails (network error, non-success
    /// status, rate limiting) or the body is not JSON
    async fn create_test_run(&self, org_id: &str, sbom: &Value) -> Result<Value>;

    /// Fetches the status of a test run once
    ///
    /// # Errors
    /// Same conditions as `create_test_run`
    async fn get_test_run_status(&self, org_id: &str, test_run_id: &str) -> Result<Value>;
}
