use crate::shared::Result;
use std::path::Path;

/// SbomDocumentReader port for loading a previously generated SBOM
pub trait SbomDocumentReader {
    /// Reads and parses an SBOM JSON document
    ///
    /// The document is returned untyped; it is forwarded as-is to the
    /// SBOM test API.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON
    fn read_sbom(&self, path: &Path) -> Result<serde_json::Value>;
}
