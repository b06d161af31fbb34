use crate::sbom_generation::domain::CycloneDxBom;
use crate::shared::Result;

/// SbomFormatter port for rendering a CycloneDX document
pub trait SbomFormatter {
    /// Renders the document as text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, bom: &CycloneDxBom) -> Result<String>;
}
