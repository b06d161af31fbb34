use crate::sbom_generation::domain::SpecVersion;
use std::path::PathBuf;

/// GenerateSbomRequest - Request DTO for the SBOM generation use case
#[derive(Debug, Clone)]
pub struct GenerateSbomRequest {
    /// Path to the `bazel query --output=xml` export
    pub input_path: PathBuf,
    /// CycloneDX schema version to emit
    pub spec_version: SpecVersion,
}

impl GenerateSbomRequest {
    pub fn new(input_path: PathBuf, spec_version: SpecVersion) -> Self {
        Self {
            input_path,
            spec_version,
        }
    }
}
