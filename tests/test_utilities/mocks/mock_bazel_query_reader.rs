use bazel_sbom::prelude::*;
use std::path::Path;

/// Mock BazelQueryReader returning fixed XML, or failing when built with `failing`
pub struct MockBazelQueryReader {
    content: String,
    should_fail: bool,
}

impl MockBazelQueryReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl BazelQueryReader for MockBazelQueryReader {
    fn read_bazel_query(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock read failure: {}", path.display());
        }
        Ok(self.content.clone())
    }
}
