use serde_json::Value;

/// TestSbomResponse - Result of a submitted SBOM test run
#[derive(Debug, Clone, PartialEq)]
pub struct TestSbomResponse {
    pub test_run_id: String,
    /// Raw status document returned by the service
    pub status: Value,
}

impl TestSbomResponse {
    pub fn new(test_run_id: String, status: Value) -> Self {
        Self {
            test_run_id,
            status,
        }
    }
}
