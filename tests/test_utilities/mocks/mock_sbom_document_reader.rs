use bazel_sbom::prelude::*;
use serde_json::Value;
use std::path::Path;

/// Mock SbomDocumentReader returning a fixed JSON document
pub struct MockSbomDocumentReader {
    document: Value,
}

impl MockSbomDocumentReader {
    pub fn new(document: Value) -> Self {
        Self { document }
    }
}

impl SbomDocumentReader for MockSbomDocumentReader {
    fn read_sbom(&self, _path: &Path) -> Result<Value> {
        Ok(self.document.clone())
    }
}
