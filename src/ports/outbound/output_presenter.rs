use crate::shared::Result;

/// OutputPresenter port for delivering the rendered SBOM
pub trait OutputPresenter {
    /// Presents the rendered SBOM at the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory of the output file does not exist
    /// - The output path is a symbolic link
    /// - Writing fails (permissions, disk space)
    fn present(&self, content: &str) -> Result<()>;
}
