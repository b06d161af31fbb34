use std::path::PathBuf;

/// TestSbomRequest - Request DTO for submitting an SBOM to the test service
#[derive(Debug, Clone)]
pub struct TestSbomRequest {
    /// SBOM JSON produced by the generate command
    pub sbom_path: PathBuf,
    /// Organization the test run is created in
    pub org_id: String,
}

impl TestSbomRequest {
    pub fn new(sbom_path: PathBuf, org_id: impl Into<String>) -> Self {
        Self {
            sbom_path,
            org_id: org_id.into(),
        }
    }
}
