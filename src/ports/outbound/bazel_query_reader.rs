use crate::shared::Result;
use std::path::Path;

/// BazelQueryReader port for loading `bazel query --output=xml` dumps
pub trait BazelQueryReader {
    /// Reads the raw XML text of a query dump
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The path is a symbolic link, a directory, or too large
    /// - The file cannot be read as UTF-8 text
    fn read_bazel_query(&self, path: &Path) -> Result<String>;
}
