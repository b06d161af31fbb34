use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::CycloneDxBom;
use crate::shared::Result;

/// CycloneDxFormatter adapter for generating CycloneDX JSON
///
/// Output uses two-space indentation and the document's field declaration
/// order, so regenerated SBOMs diff cleanly.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, bom: &CycloneDxBom) -> Result<String> {
        serde_json::to_string_pretty(bom).map_err(Into::into)
    }
}
