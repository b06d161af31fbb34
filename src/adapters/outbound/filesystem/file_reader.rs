use crate::ports::outbound::{BazelQueryReader, SbomDocumentReader};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input file size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading input files
///
/// This adapter implements both BazelQueryReader and SbomDocumentReader,
/// applying the same checks to every file it opens.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file after rejecting missing paths, symlinks, non-regular
    /// files and files over the size limit
    fn safe_read_file(&self, path: &Path, suggestion: &str) -> Result<String> {
        if !path.exists() {
            return Err(SbomError::InputFileNotFound {
                path: path.to_path_buf(),
                suggestion: suggestion.to_string(),
            }
            .into());
        }

        let read_error = |details: String| SbomError::InputReadError {
            path: path.to_path_buf(),
            details,
        };

        let metadata = fs::symlink_metadata(path)
            .map_err(|e| read_error(format!("Failed to read file metadata: {}", e)))?;

        if metadata.is_symlink() {
            return Err(read_error(
                "Security: Input path is a symbolic link. For security reasons, symbolic links are not allowed."
                    .to_string(),
            )
            .into());
        }

        if !metadata.is_file() {
            return Err(read_error("Not a regular file".to_string()).into());
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(read_error(format!(
                "Security: File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                MAX_FILE_SIZE
            ))
            .into());
        }

        fs::read_to_string(path).map_err(|e| read_error(e.to_string()).into())
    }
}

impl BazelQueryReader for FileSystemReader {
    fn read_bazel_query(&self, path: &Path) -> Result<String> {
        self.safe_read_file(
            path,
            "Export the dependency graph first, e.g. \
             `bazel query 'deps(//your:target)' --output=xml > deps.xml`",
        )
    }
}

impl SbomDocumentReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<serde_json::Value> {
        let content = self.safe_read_file(
            path,
            "Generate an SBOM first with `bazel-sbom generate -i deps.xml -o sbom.json`",
        )?;

        serde_json::from_str(&content).map_err(|e| {
            SbomError::SbomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
