use crate::sbom_generation::domain::CycloneDxBom;

/// GenerateSbomResponse - Response DTO from the SBOM generation use case
///
/// Carries the finished document; formatting and output are left to the
/// adapters.
#[derive(Debug, Clone)]
pub struct GenerateSbomResponse {
    pub bom: CycloneDxBom,
    pub component_count: usize,
    pub dependency_count: usize,
}

impl GenerateSbomResponse {
    pub fn new(bom: CycloneDxBom) -> Self {
        let component_count = bom.components.len();
        let dependency_count = bom.dependencies.len();
        Self {
            bom,
            component_count,
            dependency_count,
        }
    }
}
